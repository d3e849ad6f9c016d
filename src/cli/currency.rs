//! CLI commands for currency conversion

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::currency::{currency_info, RateCache, SnapshotRateProvider};
use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// List currencies with available rates
    List,

    /// Show the exchange rate between two currencies
    Rate {
        from: String,
        to: String,
    },

    /// Convert an amount for display
    Convert {
        amount: String,
        from: String,
        to: String,
    },
}

/// Build a rate cache over the configured snapshot
pub(crate) fn rate_cache(storage: &Storage, settings: &Settings) -> RateCache<SnapshotRateProvider> {
    RateCache::new(SnapshotRateProvider::new(
        settings.rates_path(storage.paths()),
    ))
}

/// Handle currency commands
pub fn handle_currency_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CurrencyCommands,
) -> FinanceResult<()> {
    let cache = rate_cache(storage, settings);

    match cmd {
        CurrencyCommands::List => {
            let codes = cache.available_currencies();
            if codes.is_empty() {
                println!(
                    "No exchange rates available. Save a rate snapshot to {}",
                    cache.provider().path().display()
                );
            }
            for code in codes {
                if let Some(info) = currency_info(code) {
                    println!("{:<4} {:<4} {}", info.code, info.symbol, info.name);
                }
            }
        }

        CurrencyCommands::Rate { from, to } => {
            let rate = cache.get_rate(&from, &to);
            println!("1 {} = {} {}", from.to_uppercase(), rate, to.to_uppercase());
        }

        CurrencyCommands::Convert { amount, from, to } => {
            let amount = Money::parse(&amount).map_err(|e| FinanceError::Validation(e.to_string()))?;
            let converted = cache.convert(amount, &from, &to);
            println!(
                "{} {} = {} {}",
                amount,
                from.to_uppercase(),
                converted,
                to.to_uppercase()
            );
        }
    }

    Ok(())
}
