//! CLI commands for transaction management

use clap::Subcommand;

use crate::analytics::TransactionQuery;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{default_categories, parse_iso_date, Money, TransactionKind};
use crate::services::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// income or expense
        kind: String,
        /// Amount (e.g. 12.50)
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Currency code, defaults to the configured base currency
        #[arg(long)]
        currency: Option<String>,
    },

    /// List transactions, newest first
    #[command(alias = "ls")]
    List {
        /// Only income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show transaction details
    Show {
        /// Transaction ID or ID prefix
        id: String,
    },

    /// Replace fields of a transaction
    Edit {
        /// Transaction ID or ID prefix
        id: String,
        #[arg(short, long)]
        kind: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
        #[arg(long)]
        currency: Option<String>,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID or ID prefix
        id: String,
    },

    /// Search the history by date or category
    Search {
        /// Only income or expense
        #[arg(short, long)]
        kind: Option<String>,
        /// Exact date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "category")]
        date: Option<String>,
        /// Text contained in the category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the suggested categories
    Categories {
        /// Only income or expense
        kind: Option<String>,
    },
}

fn parse_amount(value: &str) -> FinanceResult<Money> {
    Money::parse(value).map_err(|e| FinanceError::Validation(e.to_string()))
}

fn parse_kind(value: Option<String>) -> FinanceResult<Option<TransactionKind>> {
    value.map(|k| k.parse()).transpose()
}

fn parse_date(value: Option<String>) -> FinanceResult<Option<chrono::NaiveDate>> {
    value.map(|d| parse_iso_date(&d)).transpose()
}

/// Handle transaction commands
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(&storage.transactions, &settings.user_id);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
            currency,
        } => {
            let date = parse_date(date)?.unwrap_or_else(|| chrono::Local::now().date_naive());
            let txn = service.create(CreateTransactionInput {
                kind: kind.parse()?,
                amount: parse_amount(&amount)?,
                category,
                date,
                description,
                currency: currency.unwrap_or_else(|| settings.base_currency.clone()),
            })?;

            println!("Added {}: {}", txn.kind.as_str(), txn);
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            kind,
            from,
            to,
            limit,
        } => {
            let mut filter =
                TransactionFilter::new().date_range(parse_date(from)?, parse_date(to)?).limit(limit);
            if let Some(kind) = parse_kind(kind)? {
                filter = filter.kind(kind);
            }

            let transactions = service.list(filter)?;
            print!("{}", format_transaction_list(&transactions));
        }

        TransactionCommands::Show { id } => {
            let txn = service.get(&id)?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            description,
            currency,
        } => {
            let existing = service.get(&id)?;
            let input = UpdateTransactionInput {
                kind: parse_kind(kind)?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date: parse_date(date)?,
                description,
                currency,
            };

            let txn = service.update(&existing.id, input)?;
            println!("Updated: {}", txn);
        }

        TransactionCommands::Delete { id } => {
            let txn = service.get(&id)?;
            let deleted = service.delete(&txn.id)?;
            println!("Deleted: {}", deleted);
        }

        TransactionCommands::Search {
            kind,
            date,
            category,
        } => {
            let mut query = TransactionQuery::new();
            if let Some(kind) = parse_kind(kind)? {
                query = query.kind(kind);
            }
            if let Some(date) = parse_date(date)? {
                query = query.on_date(date);
            } else if let Some(category) = category {
                query = query.category(category);
            }

            let found = service.search(&query)?;
            print!("{}", format_transaction_list(&found));
        }

        TransactionCommands::Categories { kind } => {
            let kinds = match parse_kind(kind)? {
                Some(kind) => vec![kind],
                None => vec![TransactionKind::Income, TransactionKind::Expense],
            };

            for kind in kinds {
                println!("{}:", kind);
                for category in default_categories(kind) {
                    println!("  {}", category);
                }
            }
        }
    }

    Ok(())
}
