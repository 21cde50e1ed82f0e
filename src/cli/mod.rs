//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod goal;
pub mod stats;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, handle_import_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use stats::handle_stats_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalId, TransactionId};
use crate::storage::Storage;

/// Resolve a transaction ID argument: a full UUID or a unique prefix as
/// printed in list output (with or without the "txn-" marker)
pub(crate) fn resolve_txn_id(storage: &Storage, s: &str) -> FintrackResult<TransactionId> {
    if let Ok(id) = s.parse::<TransactionId>() {
        return Ok(id);
    }

    let needle = s.strip_prefix("txn-").unwrap_or(s).to_lowercase();
    if needle.is_empty() {
        return Err(FintrackError::Validation(format!(
            "Invalid transaction ID '{}'",
            s
        )));
    }

    let matches: Vec<TransactionId> = storage
        .transactions
        .get_all()?
        .iter()
        .filter(|t| t.id.as_uuid().to_string().starts_with(&needle))
        .map(|t| t.id)
        .collect();

    match matches.len() {
        0 => Err(FintrackError::transaction_not_found(s)),
        1 => Ok(matches[0]),
        _ => Err(FintrackError::Validation(format!(
            "Transaction ID '{}' is ambiguous",
            s
        ))),
    }
}

/// Resolve a goal ID argument: a full UUID or a unique prefix
pub(crate) fn resolve_goal_id(storage: &Storage, s: &str) -> FintrackResult<GoalId> {
    if let Ok(id) = s.parse::<GoalId>() {
        return Ok(id);
    }

    let needle = s.strip_prefix("goal-").unwrap_or(s).to_lowercase();
    if needle.is_empty() {
        return Err(FintrackError::Validation(format!("Invalid goal ID '{}'", s)));
    }

    let matches: Vec<GoalId> = storage
        .goals
        .get_all()?
        .iter()
        .filter(|g| g.id.as_uuid().to_string().starts_with(&needle))
        .map(|g| g.id)
        .collect();

    match matches.len() {
        0 => Err(FintrackError::goal_not_found(s)),
        1 => Ok(matches[0]),
        _ => Err(FintrackError::Validation(format!(
            "Goal ID '{}' is ambiguous",
            s
        ))),
    }
}
