//! CLI commands for reports
//!
//! Analytics for a rolling range, the home dashboard and daily balances.

use chrono::NaiveDate;
use clap::Subcommand;

use super::currency::rate_cache;
use crate::analytics::{aggregate, daily_balance, dashboard};
use crate::config::settings::Settings;
use crate::currency::currency_symbol;
use crate::display::{format_analytics, format_daily_balance, format_dashboard};
use crate::error::FinanceResult;
use crate::models::{parse_iso_date, TimeRange};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals, categories and balance trend for a rolling range
    Analytics {
        /// week, month, quarter or year (defaults to the configured range)
        #[arg(short, long)]
        range: Option<String>,

        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,

        /// Display amounts converted to this currency
        #[arg(short, long)]
        currency: Option<String>,
    },

    /// Balance, period totals and recent transactions
    #[command(alias = "home")]
    Dashboard {
        /// Evaluate as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Net balance of a single day
    Daily {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<String>,
    },
}

/// Resolve an optional `--as-of` argument to a date
pub(crate) fn resolve_today(as_of: Option<String>) -> FinanceResult<NaiveDate> {
    match as_of {
        Some(value) => parse_iso_date(&value),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(&storage.transactions, &settings.user_id);

    match cmd {
        ReportCommands::Analytics {
            range,
            as_of,
            currency,
        } => {
            let range: TimeRange = match range {
                Some(r) => r.parse()?,
                None => settings.default_range,
            };
            let today = resolve_today(as_of)?;

            let transactions = service.list_all()?;
            let view = aggregate(&transactions, range, today);

            match currency {
                Some(target) => {
                    let cache = rate_cache(storage, settings);
                    let rate = cache.get_rate(&settings.base_currency, &target);
                    print!(
                        "{}",
                        format_analytics(&view.converted(rate), &currency_symbol(&target))
                    );
                }
                None => print!(
                    "{}",
                    format_analytics(&view, &currency_symbol(&settings.base_currency))
                ),
            }
        }

        ReportCommands::Dashboard { as_of } => {
            let today = resolve_today(as_of)?;
            let summary = dashboard(&service.list_all()?, today);
            print!(
                "{}",
                format_dashboard(&summary, &currency_symbol(&settings.base_currency))
            );
        }

        ReportCommands::Daily { date } => {
            let date = resolve_today(date)?;
            let balance = daily_balance(&service.list_all()?, date);
            print!(
                "{}",
                format_daily_balance(date, balance, &currency_symbol(&settings.base_currency))
            );
        }
    }

    Ok(())
}
