//! JSON import service
//!
//! Replaces the transaction collection wholesale from a JSON array.
//! Anything that is not array-shaped is rejected without mutating state.

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transaction;
use crate::storage::Storage;

/// Service for importing transaction data
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import a JSON array of transactions, replacing the collection
    ///
    /// Returns the number of imported records. The existing collection is
    /// only touched after the whole payload parses.
    pub fn import_json(&self, json: &str) -> FintrackResult<usize> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| FintrackError::Import(format!("Invalid JSON: {}", e)))?;

        if !value.is_array() {
            return Err(FintrackError::Import(
                "Expected a JSON array of transactions".into(),
            ));
        }

        let transactions: Vec<Transaction> = serde_json::from_value(value)
            .map_err(|e| FintrackError::Import(format!("Malformed transaction record: {}", e)))?;

        let count = transactions.len();
        self.storage.transactions.replace_all(transactions)?;
        self.storage.transactions.save()?;

        Ok(count)
    }
}
