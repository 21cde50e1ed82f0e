//! Category budget store for JSON persistence
//!
//! Manages the budget map (expense category -> monthly limit) in
//! budgets.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: HashMap<String, Money>,
}

/// Store for the category budget map
pub struct BudgetStore {
    path: PathBuf,
    data: RwLock<HashMap<String, Money>>,
}

impl BudgetStore {
    /// Create a new budget store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load the budget map from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.budgets;
        Ok(())
    }

    /// Save the budget map to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.read_lock()?;
        let file_data = BudgetData {
            budgets: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> Result<Option<Money>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.get(category).copied())
    }

    /// Get the whole budget map
    pub fn get_all(&self) -> Result<HashMap<String, Money>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Set the budget for a category, replacing any previous value
    pub fn set(&self, category: impl Into<String>, amount: Money) -> Result<(), FintrackError> {
        let mut data = self.write_lock()?;
        data.insert(category.into(), amount);
        Ok(())
    }

    /// Remove the budget for a category
    ///
    /// Returns false when no budget was set for that category.
    pub fn remove(&self, category: &str) -> Result<bool, FintrackError> {
        let mut data = self.write_lock()?;
        Ok(data.remove(category).is_some())
    }

    fn read_lock(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Money>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Money>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
