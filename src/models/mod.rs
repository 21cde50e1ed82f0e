//! Core data models for fintrack
//!
//! Defines the transaction and savings goal records, strongly-typed IDs,
//! the cents-based Money type, and the AI advice annotation.

pub mod advice;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use advice::{Advice, UNKNOWN_CLASSIFICATION};
pub use goal::{GoalValidationError, SavingsGoal};
pub use ids::{GoalId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
