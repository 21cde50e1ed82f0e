//! Export and import CLI commands

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_transactions_csv, export_transactions_json};
use crate::services::ImportService;
use crate::storage::Storage;

/// Export commands
#[derive(Debug, Subcommand)]
pub enum ExportCommands {
    /// Export transactions as a JSON array
    Json {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Export transactions as CSV
    Csv {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export subcommand
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Json { output, pretty } => {
            let mut writer = open_output(output.as_deref())?;
            export_transactions_json(storage, &mut writer, pretty)?;
            finish_output(writer, output.as_deref())?;
        }
        ExportCommands::Csv { output } => {
            let mut writer = open_output(output.as_deref())?;
            export_transactions_csv(storage, &mut writer)?;
            finish_output(writer, output.as_deref())?;
        }
    }

    Ok(())
}

/// Handle the import command: replace the transaction collection from a
/// JSON array file
pub fn handle_import_command(storage: &Storage, file: &Path) -> FintrackResult<()> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| FintrackError::Import(format!("Failed to read {}: {}", file.display(), e)))?;

    let service = ImportService::new(storage);
    let count = service.import_json(&contents)?;
    println!("Imported {} transactions from {}", count, file.display());

    Ok(())
}

fn open_output(path: Option<&Path>) -> FintrackResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn finish_output(mut writer: Box<dyn Write>, path: Option<&Path>) -> FintrackResult<()> {
    writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    drop(writer);

    if let Some(path) = path {
        println!("Exported to {}", path.display());
    } else {
        println!();
    }

    Ok(())
}
