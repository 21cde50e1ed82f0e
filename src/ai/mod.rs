//! AI advisory adapter
//!
//! Given a transaction's details and optional free-text context, an advisor
//! produces a structured classification with a reason and recommendation.
//! Advisors never fail: transport or parse problems degrade to the
//! deterministic [`Advice::unknown`] fallback, and the ledger records the
//! transaction either way.

pub mod gemini;

pub use gemini::GeminiAdvisor;

use crate::models::{Advice, Money, TransactionKind};

/// Input for an advisory analysis
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub amount: Money,
    /// Standing context (e.g. a summary of recent spending)
    pub context: String,
    /// Extra context supplied for this one analysis
    pub custom_context: Option<String>,
}

impl AdviceRequest {
    /// Combined context string for prompts and fallback annotations
    pub fn combined_context(&self) -> String {
        match &self.custom_context {
            Some(custom) if !custom.trim().is_empty() => {
                if self.context.is_empty() {
                    custom.clone()
                } else {
                    format!("{}\n{}", self.context, custom)
                }
            }
            _ => self.context.clone(),
        }
    }
}

/// A pluggable advisory backend
pub trait Advisor {
    /// Analyze a transaction; infallible by contract (failures yield the
    /// Unknown fallback)
    fn analyze(&self, request: &AdviceRequest) -> Advice;
}
