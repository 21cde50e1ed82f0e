//! Transaction CLI commands
//!
//! Bridges clap argument parsing with the ledger service. Deletion is
//! unconditional at the engine level; the `--yes` flag is the caller-side
//! confirmation required before it is invoked.

use chrono::Utc;
use clap::Subcommand;

use crate::ai::{Advisor, AdviceRequest, GeminiAdvisor};
use crate::config::Settings;
use crate::display::{format_register, format_transaction_details};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Advice, Money, Transaction, TransactionKind};
use crate::reports::{filter_transactions, DateWindow, SortOrder, TransactionQuery};
use crate::services::{LedgerService, NewTransaction, TransactionPatch, UNDO_WINDOW_SECS};
use crate::storage::Storage;

use super::{resolve_goal_id, resolve_txn_id};

/// Transaction management commands
#[derive(Debug, Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type: income or expense
        #[arg(short, long)]
        kind: String,
        /// Amount, e.g. "42.50"
        #[arg(short, long)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long)]
        description: String,
        /// Savings goal ID to contribute the full amount to
        #[arg(short, long)]
        goal: Option<String>,
        /// Request an AI analysis after recording
        #[arg(long)]
        analyze: bool,
        /// Extra context for the AI analysis
        #[arg(long)]
        context: Option<String>,
    },
    /// List transactions with optional filters
    List {
        /// Filter by type: income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Date window: today, week, month, year, or all
        #[arg(short, long, default_value = "all")]
        window: String,
        /// Search descriptions and categories
        #[arg(short, long)]
        search: Option<String>,
        /// Sort order: date-asc, date-desc, amount-asc, amount-desc
        #[arg(long, default_value = "date-desc")]
        sort: String,
    },
    /// Show one transaction in full
    Show {
        /// Transaction ID
        id: String,
    },
    /// Update a transaction
    Update {
        /// Transaction ID
        id: String,
        /// New type: income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Link to a savings goal
        #[arg(short, long, conflicts_with = "unlink_goal")]
        goal: Option<String>,
        /// Remove any goal link
        #[arg(long)]
        unlink_goal: bool,
    },
    /// Delete a transaction (requires --yes)
    Delete {
        /// Transaction ID
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Restore the most recently deleted transaction
    Undo,
    /// Attach an AI analysis to an existing transaction
    Analyze {
        /// Transaction ID
        id: String,
        /// Extra context for the analysis
        #[arg(long)]
        context: Option<String>,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            goal,
            analyze,
            context,
        } => {
            let input = NewTransaction {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                description,
                category,
                linked_goal_id: goal
                    .as_deref()
                    .map(|g| resolve_goal_id(storage, g))
                    .transpose()?,
            };

            let txn = service.add_transaction(input, Utc::now())?;
            println!("Added {} {}: {}", txn.kind, txn.id, txn);

            if analyze {
                let advice = run_analysis(settings, &txn, context);
                service.annotate_transaction(txn.id, advice.clone())?;
                print_advice(&advice);
            }
        }
        TransactionCommands::List {
            kind,
            category,
            window,
            search,
            sort,
        } => {
            let mut query = TransactionQuery::new()
                .window(window.parse::<DateWindow>().map_err(FintrackError::Validation)?)
                .sort(sort.parse::<SortOrder>().map_err(FintrackError::Validation)?);
            if let Some(kind) = kind {
                query = query.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                query = query.category(category);
            }
            if let Some(search) = search {
                query = query.search(search);
            }

            let transactions = storage.transactions.get_all()?;
            let filtered = filter_transactions(&transactions, &query, Utc::now());
            print!("{}", format_register(&filtered));
        }
        TransactionCommands::Show { id } => {
            let id = resolve_txn_id(storage, &id)?;
            let txn = storage
                .transactions
                .get(id)?
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn));
        }
        TransactionCommands::Update {
            id,
            kind,
            amount,
            category,
            description,
            goal,
            unlink_goal,
        } => {
            let id = resolve_txn_id(storage, &id)?;
            let linked_goal_id = if unlink_goal {
                Some(None)
            } else {
                goal.as_deref()
                    .map(|g| resolve_goal_id(storage, g))
                    .transpose()?
                    .map(Some)
            };

            let patch = TransactionPatch {
                kind: kind.as_deref().map(parse_kind).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category,
                date: None,
                linked_goal_id,
            };

            let txn = service.update_transaction(id, patch)?;
            println!("Updated {}: {}", txn.id, txn);
        }
        TransactionCommands::Delete { id, yes } => {
            if !yes {
                return Err(FintrackError::Validation(
                    "Deleting a transaction is permanent after the undo window; \
                     pass --yes to confirm"
                        .into(),
                ));
            }

            let id = resolve_txn_id(storage, &id)?;
            let txn = service.delete_transaction(id, Utc::now())?;
            println!(
                "Deleted {}: {} (undo available for {} seconds)",
                txn.id, txn, UNDO_WINDOW_SECS
            );
        }
        TransactionCommands::Undo => match service.undo_delete(Utc::now())? {
            Some(txn) => println!("Restored {}: {}", txn.id, txn),
            None => println!("Nothing to undo."),
        },
        TransactionCommands::Analyze { id, context } => {
            let id = resolve_txn_id(storage, &id)?;
            let txn = storage
                .transactions
                .get(id)?
                .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

            let advice = run_analysis(settings, &txn, context);
            service.annotate_transaction(txn.id, advice.clone())?;
            print_advice(&advice);
        }
    }

    Ok(())
}

/// Run an AI analysis for a transaction, degrading to the Unknown
/// fallback when no advisor is configured or the call fails
fn run_analysis(settings: &Settings, txn: &Transaction, custom_context: Option<String>) -> Advice {
    let request = AdviceRequest {
        kind: txn.kind,
        description: txn.description.clone(),
        category: txn.category.clone(),
        amount: txn.amount,
        context: String::new(),
        custom_context,
    };

    match settings.ai.resolve_api_key() {
        Some(api_key) => match GeminiAdvisor::new(api_key, settings.ai.model.clone()) {
            Ok(advisor) => advisor.analyze(&request),
            Err(_) => Advice::unknown(request.combined_context()),
        },
        None => {
            eprintln!(
                "No Gemini API key configured; set GEMINI_API_KEY or run \
                 'fintrack config' to see the settings file."
            );
            Advice::unknown(request.combined_context())
        }
    }
}

fn print_advice(advice: &Advice) {
    println!("AI analysis: {}", advice.classification);
    if !advice.reason.is_empty() {
        println!("  Reason:         {}", advice.reason);
    }
    if !advice.recommendation.is_empty() {
        println!("  Recommendation: {}", advice.recommendation);
    }
}

fn parse_kind(s: &str) -> FintrackResult<TransactionKind> {
    s.parse::<TransactionKind>()
        .map_err(FintrackError::Validation)
}

fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}
