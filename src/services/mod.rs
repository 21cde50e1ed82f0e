//! Business logic layer
//!
//! The ledger service owns all mutations of the transaction and goal
//! collections; the import service handles wholesale JSON replacement.

pub mod import;
pub mod ledger;

pub use import::ImportService;
pub use ledger::{
    GoalPatch, LedgerService, NewGoal, NewTransaction, TransactionPatch, UNDO_WINDOW_SECS,
};
