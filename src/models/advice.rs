//! AI advisory annotations
//!
//! Optional commentary attached to a transaction by the AI advisory adapter.
//! Advice is purely informational; no accounting computation reads it.

use serde::{Deserialize, Serialize};

/// Classification string used when the advisor fails or returns
/// unreadable output.
pub const UNKNOWN_CLASSIFICATION: &str = "Unknown";

/// Structured advisory result attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    /// Spending classification (e.g. "Necessary", "Unnecessary", "Unknown")
    pub classification: String,

    /// Short explanation of the classification
    pub reason: String,

    /// Actionable suggestion for the user
    pub recommendation: String,

    /// Free-text context the analysis was based on
    #[serde(default)]
    pub context: String,
}

impl Advice {
    /// Deterministic fallback used when the advisor call fails or its
    /// response cannot be parsed. Never an error: a failed analysis
    /// degrades to this value.
    pub fn unknown(context: impl Into<String>) -> Self {
        Self {
            classification: UNKNOWN_CLASSIFICATION.to_string(),
            reason: "The AI advisor could not be reached or returned an unreadable response."
                .to_string(),
            recommendation: "No recommendation available. Re-run the analysis later.".to_string(),
            context: context.into(),
        }
    }

    /// Check whether this advice is the failure fallback
    pub fn is_unknown(&self) -> bool {
        self.classification == UNKNOWN_CLASSIFICATION
    }
}
