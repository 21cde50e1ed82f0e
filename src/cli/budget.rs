//! Category budget CLI commands

use chrono::Utc;
use clap::Subcommand;

use crate::display::format_budget_overview;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;
use crate::reports::{budget_overview, filter_transactions, DateWindow, TransactionQuery};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Category budget commands
#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Category label
        category: String,
        /// Budget amount, e.g. "400"
        amount: String,
    },
    /// Remove the budget for a category
    Remove {
        /// Category label
        category: String,
    },
    /// Show this month's spending against each budget
    Status,
}

/// Handle a budget subcommand
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> FintrackResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount =
                Money::parse(&amount).map_err(|e| FintrackError::Validation(e.to_string()))?;
            service.set_budget(&category, amount)?;
            println!("Budget for '{}' set to {}", category, amount);
        }
        BudgetCommands::Remove { category } => {
            if service.remove_budget(&category)? {
                println!("Removed budget for '{}'", category);
            } else {
                println!("No budget set for '{}'", category);
            }
        }
        BudgetCommands::Status => {
            // Budgets are monthly: compare against the current calendar month
            let transactions = storage.transactions.get_all()?;
            let this_month = filter_transactions(
                &transactions,
                &TransactionQuery::new().window(DateWindow::Month),
                Utc::now(),
            );
            let budgets = storage.budgets.get_all()?;
            print!("{}", format_budget_overview(&budget_overview(&this_month, &budgets)));
        }
    }

    Ok(())
}
