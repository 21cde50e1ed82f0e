//! Pure derivation functions over the ledger
//!
//! Everything in this module is side-effect-free and re-derivable on every
//! call; functions that depend on the current time take the evaluation
//! instant as a parameter.

pub mod budget;
pub mod register;
pub mod spending;
pub mod summary;

pub use budget::{budget_overview, BudgetLine};
pub use register::{filter_transactions, DateWindow, SortOrder, TransactionQuery};
pub use spending::{category_spending, CategorySpending, DEFAULT_TOP_CATEGORIES};
pub use summary::{quick_stats, totals, unlinked_savings, QuickStats, Totals};
