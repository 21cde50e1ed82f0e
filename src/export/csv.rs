//! CSV export functionality
//!
//! Writes the transaction collection with the fixed column order
//! `Date, Type, Category, Description, Amount`.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::storage::Storage;

/// Column header, fixed order
const HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Locale-style date rendering used by the CSV export
const CSV_DATE_FORMAT: &str = "%m/%d/%Y";

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> FintrackResult<()> {
    let transactions = storage.transactions.get_all()?;
    write_csv(&transactions, writer)
}

/// Write a transaction set as CSV rows
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: &mut W) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.date.format(CSV_DATE_FORMAT).to_string(),
                txn.kind.to_string(),
                txn.category.clone(),
                txn.description.clone(),
                format!("{:.2}", txn.amount.to_units()),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
