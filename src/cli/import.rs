//! CLI commands for data import

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::export::import_transactions_csv;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Import transactions from a CSV export
    Csv {
        /// Path to the CSV file
        file: PathBuf,
        /// Currency of the imported amounts, defaults to the base currency
        #[arg(long)]
        currency: Option<String>,
    },
}

/// Handle import commands
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ImportCommands,
) -> FinanceResult<()> {
    match cmd {
        ImportCommands::Csv { file, currency } => {
            let handle = File::open(&file).map_err(|e| {
                FinanceError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let currency = currency.unwrap_or_else(|| settings.base_currency.clone());

            // Parse everything first so a bad row imports nothing
            let transactions = import_transactions_csv(BufReader::new(handle), &currency)?;

            let service = TransactionService::new(&storage.transactions, &settings.user_id);
            for txn in &transactions {
                service.insert(txn)?;
            }

            tracing::info!(count = transactions.len(), file = %file.display(), "imported transactions");
            println!("Imported {} transactions.", transactions.len());
        }
    }

    Ok(())
}
