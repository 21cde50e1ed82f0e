//! Category spending breakdown
//!
//! Ranks expense categories by total spend over a given transaction set.

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// Default number of top categories to report
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Aggregated spending for one expense category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Sum expense amounts per category, ranked by descending total and
/// truncated to `top_n` entries
///
/// Income transactions are ignored. Ties break alphabetically so the
/// ranking is deterministic.
pub fn category_spending(set: &[Transaction], top_n: usize) -> Vec<CategorySpending> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

    for txn in set.iter().filter(|t| t.is_expense()) {
        let entry = by_category
            .entry(txn.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += txn.amount;
        entry.1 += 1;
    }

    let mut ranked: Vec<CategorySpending> = by_category
        .into_iter()
        .map(|(category, (total, transaction_count))| CategorySpending {
            category: category.to_string(),
            total,
            transaction_count,
        })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    ranked.truncate(top_n);
    ranked
}
