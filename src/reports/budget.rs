//! Budget overview
//!
//! Compares per-category expense totals against the budget map.

use std::collections::HashMap;

use crate::models::{Money, Transaction};

/// One category line in the budget overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub category: String,
    pub budgeted: Money,
    pub spent: Money,
    /// Budgeted minus spent; negative when over budget
    pub remaining: Money,
}

impl BudgetLine {
    /// Check if spending exceeds the budget
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Build a budget overview for every budgeted category over the given set
///
/// Categories with spending but no budget are not reported; the budget map
/// decides what is tracked. Lines are sorted by category name.
pub fn budget_overview(
    set: &[Transaction],
    budgets: &HashMap<String, Money>,
) -> Vec<BudgetLine> {
    let mut lines: Vec<BudgetLine> = budgets
        .iter()
        .map(|(category, budgeted)| {
            let spent: Money = set
                .iter()
                .filter(|t| t.is_expense() && t.category.eq_ignore_ascii_case(category))
                .map(|t| t.amount)
                .sum();
            BudgetLine {
                category: category.clone(),
                budgeted: *budgeted,
                spent,
                remaining: *budgeted - spent,
            }
        })
        .collect();

    lines.sort_by(|a, b| a.category.cmp(&b.category));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::{TimeZone, Utc};

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            Money::from_cents(cents),
            "test",
            category,
            Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_overview_tracks_budgeted_categories() {
        let set = vec![
            expense(30_000, "Food"),
            expense(20_000, "Food"),
            expense(5_000, "Entertainment"),
        ];
        let mut budgets = HashMap::new();
        budgets.insert("Food".to_string(), Money::from_cents(40_000));
        budgets.insert("Housing".to_string(), Money::from_cents(150_000));

        let lines = budget_overview(&set, &budgets);
        assert_eq!(lines.len(), 2);

        // Sorted by category name
        assert_eq!(lines[0].category, "Food");
        assert_eq!(lines[0].spent, Money::from_cents(50_000));
        assert_eq!(lines[0].remaining, Money::from_cents(-10_000));
        assert!(lines[0].is_over_budget());

        assert_eq!(lines[1].category, "Housing");
        assert_eq!(lines[1].spent, Money::zero());
        assert!(!lines[1].is_over_budget());
    }

    #[test]
    fn test_empty_budget_map() {
        let set = vec![expense(1_000, "Food")];
        assert!(budget_overview(&set, &HashMap::new()).is_empty());
    }
}
