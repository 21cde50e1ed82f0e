use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_budget_command, handle_export_command, handle_goal_command, handle_import_command,
    handle_stats_command, handle_transaction_command, BudgetCommands, ExportCommands,
    GoalCommands, TransactionCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings, Theme};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "AI-assisted personal finance tracker",
    long_about = "fintrack records income and expense transactions, tracks savings \
                  goals, and derives spending statistics from the command line. \
                  Transactions can optionally be annotated with AI-generated \
                  commentary via the Gemini API."
)]
struct Cli {
    /// Data directory override
    #[arg(long, global = true, env = "FINTRACK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Tx(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Category budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, quick stats, and top spending
    Stats {
        /// Date window: today, week, month, year, or all
        #[arg(short, long, default_value = "all")]
        window: String,
    },

    /// Export transactions to JSON or CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import transactions from a JSON array file (replaces the collection)
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Set the display theme
    Theme {
        /// light or dark
        theme: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FintrackPaths::with_base_dir(dir),
        None => FintrackPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tx(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Stats { window }) => {
            handle_stats_command(&storage, &window)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &file)?;
        }
        Some(Commands::Theme { theme }) => {
            let theme: Theme = theme.parse().map_err(anyhow::Error::msg)?;
            let mut settings = settings;
            settings.theme = theme;
            settings.save(&paths)?;
            println!("Theme set to {}", theme);
        }
        Some(Commands::Config) => {
            println!("fintrack configuration");
            println!("======================");
            println!("Config file:    {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Theme:    {}", settings.theme);
            println!("  Currency: {}", settings.currency_symbol);
            println!("  AI model: {}", settings.ai.model);
            println!(
                "  AI key:   {}",
                if settings.ai.resolve_api_key().is_some() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
        None => {
            println!("fintrack - AI-assisted personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack tx add' to record your first transaction.");
        }
    }

    Ok(())
}
