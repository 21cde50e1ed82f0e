//! JSON export functionality
//!
//! Exports the transaction collection as a verbatim JSON array, the same
//! shape the import service accepts, so export-then-import round-trips.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::storage::Storage;

/// Export all transactions as a JSON array
pub fn export_transactions_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    let transactions = storage.transactions.get_all()?;

    if pretty {
        serde_json::to_writer_pretty(writer, &transactions)
    } else {
        serde_json::to_writer(writer, &transactions)
    }
    .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
