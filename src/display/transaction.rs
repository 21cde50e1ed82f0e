//! Transaction display formatting
//!
//! Utilities for formatting transactions for terminal display.

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    let advice_tag = match &txn.advice {
        Some(advice) => format!(" [{}]", advice.classification),
        None => String::new(),
    };

    format!(
        "{} {} {:14} {:24} {:>10}{}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 14),
        truncate(&txn.description, 24),
        format!("{}{}", sign, txn.amount),
        advice_tag
    )
}

/// Format a list of transactions as a register
pub fn format_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:14} {:24} {:>10}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    if let Some(goal_id) = txn.linked_goal_id {
        output.push_str(&format!("Linked goal: {}\n", goal_id));
    }

    if let Some(advice) = &txn.advice {
        output.push_str("\nAI analysis:\n");
        output.push_str(&format!("  Classification: {}\n", advice.classification));
        if !advice.reason.is_empty() {
            output.push_str(&format!("  Reason:         {}\n", advice.reason));
        }
        if !advice.recommendation.is_empty() {
            output.push_str(&format!("  Recommendation: {}\n", advice.recommendation));
        }
    }

    output
}

/// Truncate a string for column display
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
