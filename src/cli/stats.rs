//! Statistics CLI command
//!
//! Shows totals, quick expense stats, unlinked savings, and top category
//! spending over a chosen date window.

use chrono::Utc;

use crate::display::{format_quick_stats, format_spending, format_totals};
use crate::error::{FintrackError, FintrackResult};
use crate::reports::{
    category_spending, filter_transactions, quick_stats, totals, unlinked_savings, DateWindow,
    TransactionQuery, DEFAULT_TOP_CATEGORIES,
};
use crate::storage::Storage;

/// Handle the stats command
pub fn handle_stats_command(storage: &Storage, window: &str) -> FintrackResult<()> {
    let window = window
        .parse::<DateWindow>()
        .map_err(FintrackError::Validation)?;

    let transactions = storage.transactions.get_all()?;
    let set = filter_transactions(
        &transactions,
        &TransactionQuery::new().window(window),
        Utc::now(),
    );

    println!("Statistics ({})", window);
    println!();
    print!("{}", format_totals(&totals(&set), unlinked_savings(&set)));
    println!();
    print!("{}", format_quick_stats(&quick_stats(&set)));
    println!();
    print!(
        "{}",
        format_spending(&category_spending(&set, DEFAULT_TOP_CATEGORIES))
    );

    Ok(())
}
