//! Transaction register: filtering and sorting
//!
//! Pure functions over a transaction slice. The evaluation instant is an
//! explicit parameter so date windows are deterministic and testable;
//! nothing here reads the wall clock or caches results.

use chrono::{DateTime, Datelike, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use crate::models::{Transaction, TransactionKind};

/// Named date window, evaluated relative to a supplied instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    /// Same calendar date as the evaluation instant
    Today,
    /// Within the trailing 7 x 24 hours
    Week,
    /// Same calendar month as the evaluation instant
    Month,
    /// Same calendar year as the evaluation instant
    Year,
    #[default]
    All,
}

impl DateWindow {
    /// Check whether a transaction date falls inside this window
    /// relative to `now`
    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::Today => date.date_naive() == now.date_naive(),
            Self::Week => now.signed_duration_since(date) <= Duration::days(7),
            Self::Month => date.year() == now.year() && date.month() == now.month(),
            Self::Year => date.year() == now.year(),
            Self::All => true,
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DateWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(format!(
                "Invalid window '{}', expected today|week|month|year|all",
                other
            )),
        }
    }
}

/// Sort order for the register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    DateAsc,
    #[default]
    DateDesc,
    AmountAsc,
    AmountDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date-asc" => Ok(Self::DateAsc),
            "date-desc" => Ok(Self::DateDesc),
            "amount-asc" => Ok(Self::AmountAsc),
            "amount-desc" => Ok(Self::AmountDesc),
            other => Err(format!(
                "Invalid sort '{}', expected date-asc|date-desc|amount-asc|amount-desc",
                other
            )),
        }
    }
}

/// Options for filtering and sorting transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Filter by kind; None matches both
    pub kind: Option<TransactionKind>,
    /// Filter by exact category (case-insensitive); None matches all
    pub category: Option<String>,
    /// Date window relative to the evaluation instant
    pub window: DateWindow,
    /// Case-insensitive substring match against description or category
    pub search: Option<String>,
    /// Sort order for the result
    pub sort: SortOrder,
}

impl TransactionQuery {
    /// Create a new empty query (matches everything, date-descending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to a date window
    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    /// Search descriptions and categories
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the sort order
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, txn: &Transaction, now: DateTime<Utc>) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !txn.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if !self.window.contains(txn.date, now) {
            return false;
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !term.is_empty()
                && !txn.description.to_lowercase().contains(&term)
                && !txn.category.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }
}

/// Filter and sort a transaction set
///
/// Pure: the input is untouched and the result is re-derived on every call.
pub fn filter_transactions(
    transactions: &[Transaction],
    query: &TransactionQuery,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    let mut result: Vec<Transaction> = transactions
        .iter()
        .filter(|t| query.matches(t, now))
        .cloned()
        .collect();

    match query.sort {
        SortOrder::DateAsc => result.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::DateDesc => result.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::AmountAsc => result.sort_by(|a, b| a.amount.cmp(&b.amount)),
        SortOrder::AmountDesc => result.sort_by(|a, b| b.amount.cmp(&a.amount)),
    }

    result
}
