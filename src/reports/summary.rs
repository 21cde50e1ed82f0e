//! Summary derivations: totals, quick stats, and unlinked savings
//!
//! All functions are pure over whatever transaction set the caller passes
//! (filtered or full).

use crate::models::{Money, Transaction};

/// Income/expense totals over a transaction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
}

/// Compute income, expense, and balance totals
pub fn totals(set: &[Transaction]) -> Totals {
    let income: Money = set.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expenses: Money = set
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Expense statistics over a transaction set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub highest_expense: Money,
    pub average_expense: Money,
    pub count: usize,
}

/// Compute highest/average expense and expense count; all zero when the
/// set has no expenses
pub fn quick_stats(set: &[Transaction]) -> QuickStats {
    let expenses: Vec<Money> = set
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .collect();

    if expenses.is_empty() {
        return QuickStats {
            highest_expense: Money::zero(),
            average_expense: Money::zero(),
            count: 0,
        };
    }

    let highest = expenses.iter().copied().max().unwrap_or(Money::zero());
    let total: Money = expenses.iter().copied().sum();
    let average = Money::from_cents(total.cents() / expenses.len() as i64);

    QuickStats {
        highest_expense: highest,
        average_expense: average,
        count: expenses.len(),
    }
}

/// Income not associated with any goal, minus all expenses, floored at zero
pub fn unlinked_savings(set: &[Transaction]) -> Money {
    let unlinked_income: Money = set
        .iter()
        .filter(|t| t.is_income() && t.linked_goal_id.is_none())
        .map(|t| t.amount)
        .sum();
    let all_expenses: Money = set
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    let net = unlinked_income - all_expenses;
    if net.is_negative() {
        Money::zero()
    } else {
        net
    }
}
