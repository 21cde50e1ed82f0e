//! Report display formatting
//!
//! Renders totals, quick stats, spending breakdowns, and the budget
//! overview for terminal output.

use crate::models::Money;
use crate::reports::{BudgetLine, CategorySpending, QuickStats, Totals};

/// Format the income/expense/balance summary
pub fn format_totals(totals: &Totals, unlinked_savings: Money) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:           {:>12}\n", totals.income.to_string()));
    output.push_str(&format!("Expenses:         {:>12}\n", totals.expenses.to_string()));
    output.push_str(&format!("Balance:          {:>12}\n", totals.balance.to_string()));
    output.push_str(&format!(
        "Unlinked savings: {:>12}\n",
        unlinked_savings.to_string()
    ));
    output
}

/// Format the quick expense statistics
pub fn format_quick_stats(stats: &QuickStats) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Highest expense:  {:>12}\n",
        stats.highest_expense.to_string()
    ));
    output.push_str(&format!(
        "Average expense:  {:>12}\n",
        stats.average_expense.to_string()
    ));
    output.push_str(&format!("Expense count:    {:>12}\n", stats.count));
    output
}

/// Format the top-category spending breakdown
pub fn format_spending(ranked: &[CategorySpending]) -> String {
    if ranked.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Top spending by category:\n");
    for entry in ranked {
        output.push_str(&format!(
            "  {:16} {:>12}  ({} transactions)\n",
            entry.category,
            entry.total.to_string(),
            entry.transaction_count
        ));
    }
    output
}

/// Format the budget overview
pub fn format_budget_overview(lines: &[BudgetLine]) -> String {
    if lines.is_empty() {
        return "No budgets set. Use 'fintrack budget set <category> <amount>'.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:>12} {:>12} {:>12}\n",
        "Category", "Budgeted", "Spent", "Remaining"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for line in lines {
        let marker = if line.is_over_budget() { " (over)" } else { "" };
        output.push_str(&format!(
            "{:16} {:>12} {:>12} {:>12}{}\n",
            line.category,
            line.budgeted.to_string(),
            line.spent.to_string(),
            line.remaining.to_string(),
            marker
        ));
    }
    output
}
