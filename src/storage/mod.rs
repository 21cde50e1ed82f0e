//! Storage layer for fintrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each collection persists to its own file and is loaded and
//! saved independently; a missing file reads as an empty collection.

pub mod budgets;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use budgets::BudgetStore;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalStore;
pub use transactions::TransactionStore;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to all stores
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionStore,
    pub goals: GoalStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            goals: GoalStore::new(paths.goals_file()),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.transactions.load()?;
        self.goals.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.transactions.save()?;
        self.goals.save()?;
        self.budgets.save()?;
        Ok(())
    }
}
