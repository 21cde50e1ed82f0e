//! fintrack - AI-assisted personal finance tracker
//!
//! This library provides the core functionality for the fintrack CLI:
//! a ledger of income/expense transactions and savings goals with pure
//! derivation queries, JSON file persistence, export/import, and an
//! optional AI advisory annotation per transaction.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, goals, money, advice)
//! - `storage`: JSON file storage layer, one file per collection
//! - `services`: Business logic layer (ledger mutations, undo, import)
//! - `reports`: Pure derivations (filters, totals, spending, budgets)
//! - `ai`: AI advisory adapter (Gemini client with Unknown fallback)
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{paths::FintrackPaths, settings::Settings};
//! use fintrack::storage::Storage;
//!
//! let paths = FintrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod ai;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
