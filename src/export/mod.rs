//! Export functionality
//!
//! Serializes the transaction collection to JSON (a verbatim array) or CSV
//! (fixed column order).

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::export_transactions_json;
