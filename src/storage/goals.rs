//! Savings goal store for JSON persistence
//!
//! Manages loading and saving the goal collection to goals.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{GoalId, SavingsGoal};

use super::file_io::{read_json, write_json_atomic};

/// Serializable goal file structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<SavingsGoal>,
}

/// Store for the ordered savings goal collection
pub struct GoalStore {
    path: PathBuf,
    data: RwLock<Vec<SavingsGoal>>,
}

impl GoalStore {
    /// Create a new goal store
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self.write_lock()?;
        *data = file_data.goals;
        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.read_lock()?;
        let file_data = GoalData {
            goals: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<SavingsGoal>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.iter().find(|g| g.id == id).cloned())
    }

    /// Get all goals in insertion order
    pub fn get_all(&self) -> Result<Vec<SavingsGoal>, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.clone())
    }

    /// Append a goal to the collection
    pub fn append(&self, goal: SavingsGoal) -> Result<(), FintrackError> {
        let mut data = self.write_lock()?;
        data.push(goal);
        Ok(())
    }

    /// Replace an existing goal in place, matching by ID
    ///
    /// Returns false when no goal with that ID exists.
    pub fn update(&self, goal: SavingsGoal) -> Result<bool, FintrackError> {
        let mut data = self.write_lock()?;
        match data.iter_mut().find(|g| g.id == goal.id) {
            Some(slot) => {
                *slot = goal;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a goal, returning the removed record
    pub fn remove(&self, id: GoalId) -> Result<Option<SavingsGoal>, FintrackError> {
        let mut data = self.write_lock()?;
        match data.iter().position(|g| g.id == id) {
            Some(index) => Ok(Some(data.remove(index))),
            None => Ok(None),
        }
    }

    /// Count goals
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.read_lock()?;
        Ok(data.len())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<SavingsGoal>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Vec<SavingsGoal>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
