//! Savings goal CLI commands

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::display::format_goal_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;
use crate::services::{GoalPatch, LedgerService, NewGoal};
use crate::storage::Storage;

use super::resolve_goal_id;

/// Savings goal commands
#[derive(Debug, Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount, e.g. "1200"
        target: String,
        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Display icon
        #[arg(short, long, default_value = "")]
        icon: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List savings goals with progress
    List,
    /// Update a savings goal
    Update {
        /// Goal ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New icon
        #[arg(short, long)]
        icon: Option<String>,
        /// New target amount (progress is re-clamped)
        #[arg(short, long)]
        target: Option<String>,
        /// New deadline (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<String>,
        /// Remove the deadline
        #[arg(long)]
        clear_deadline: bool,
    },
    /// Delete a savings goal (requires --yes)
    Delete {
        /// Goal ID
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Overwrite a goal's saved progress
    Progress {
        /// Goal ID
        id: String,
        /// New progress amount
        amount: String,
    },
}

/// Handle a goal subcommand
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> FintrackResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            category,
            description,
            icon,
            deadline,
        } => {
            let goal = service.add_goal(NewGoal {
                name,
                category,
                description,
                icon,
                target_amount: parse_amount(&target)?,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
            })?;
            println!("Added goal {}: {}", goal.id, goal);
        }
        GoalCommands::List => {
            let goals = service.goals()?;
            print!("{}", format_goal_list(&goals, Utc::now().date_naive()));
        }
        GoalCommands::Update {
            id,
            name,
            category,
            description,
            icon,
            target,
            deadline,
            clear_deadline,
        } => {
            let deadline = if clear_deadline {
                Some(None)
            } else {
                deadline.as_deref().map(parse_date).transpose()?.map(Some)
            };

            let patch = GoalPatch {
                name,
                category,
                description,
                icon,
                target_amount: target.as_deref().map(parse_amount).transpose()?,
                deadline,
            };

            let goal = service.update_goal(resolve_goal_id(storage, &id)?, patch)?;
            println!("Updated goal {}: {}", goal.id, goal);
        }
        GoalCommands::Delete { id, yes } => {
            if !yes {
                return Err(FintrackError::Validation(
                    "Deleting a goal unlinks its transactions; pass --yes to confirm".into(),
                ));
            }

            let goal = service.delete_goal(resolve_goal_id(storage, &id)?)?;
            println!("Deleted goal {}: {}", goal.id, goal.name);
        }
        GoalCommands::Progress { id, amount } => {
            let goal = service
                .set_goal_progress(resolve_goal_id(storage, &id)?, parse_amount(&amount)?)?;
            println!("Updated goal {}: {}", goal.id, goal);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| FintrackError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| FintrackError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}
