//! CLI commands for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::export_transactions_csv;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all transactions to CSV
    Csv {
        /// Output file path (prints to stdout when omitted)
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> FinanceResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let service = TransactionService::new(&storage.transactions, &settings.user_id);
            let transactions = service.list_all()?;

            match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        FinanceError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    export_transactions_csv(&transactions, BufWriter::new(file))?;
                    println!(
                        "Exported {} transactions to {}",
                        transactions.len(),
                        path.display()
                    );
                }
                None => {
                    let stdout = std::io::stdout();
                    export_transactions_csv(&transactions, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}
