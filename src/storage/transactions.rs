//! Transaction store for JSON persistence
//!
//! Manages loading and saving the transaction collection to
//! transactions.json. The collection keeps insertion order, which is not
//! necessarily chronological (imports and undo re-insertions preserve
//! their original positions).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Store for the ordered transaction collection
pub struct TransactionStore {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk in insertion order
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.read_lock()?;
        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Append a transaction to the end of the collection
    pub fn append(&self, txn: Transaction) -> Result<(), FintrackError> {
        let mut data = self.write_lock()?;
        data.push(txn);
        Ok(())
    }

    /// Re-insert a transaction at a specific position (clamped to the
    /// current length). Used by undo to restore the prior ordering.
    pub fn insert_at(&self, index: usize, txn: Transaction) -> Result<(), FintrackError> {
        let mut data = self.write_lock()?;
        let index = index.min(data.len());
        data.insert(index, txn);
        Ok(())
    }

    /// Replace an existing transaction in place, matching by ID
    ///
    /// Returns false when no transaction with that ID exists.
    pub fn update(&self, txn: Transaction) -> Result<bool, FintrackError> {
        let mut data = self.write_lock()?;
        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a transaction, returning its former index and the record
    pub fn remove(
        &self,
        id: TransactionId,
    ) -> Result<Option<(usize, Transaction)>, FintrackError> {
        let mut data = self.write_lock()?;
        match data.iter().position(|t| t.id == id) {
            Some(index) => {
                let txn = data.remove(index);
                Ok(Some((index, txn)))
            }
            None => Ok(None),
        }
    }

    /// Replace the whole collection (used by import)
    pub fn replace_all(&self, transactions: Vec<Transaction>) -> Result<(), FintrackError> {
        let mut data = self.write_lock()?;
        *data = transactions;
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.len())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Transaction>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Transaction>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
