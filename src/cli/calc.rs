//! CLI commands for the financial calculators
//!
//! Calculators take plain numbers and never touch stored data.

use clap::Subcommand;

use crate::calculators::{adjust_for_inflation, compute_amortization, compute_roi, split_expense};
use crate::display::{format_inflation, format_loan_schedule, format_roi, format_split};
use crate::error::FinanceResult;

/// Calculator subcommands
#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Fixed-payment loan schedule
    #[command(alias = "amortization")]
    Loan {
        /// Amount borrowed
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Term in months
        #[arg(allow_negative_numbers = true)]
        months: i64,
    },

    /// Split an expense evenly
    Split {
        /// Total amount
        #[arg(allow_negative_numbers = true)]
        total: f64,
        /// Number of people
        #[arg(allow_negative_numbers = true)]
        people: i64,
    },

    /// Return on investment
    Roi {
        /// Amount invested
        #[arg(allow_negative_numbers = true)]
        initial: f64,
        /// Amount returned
        #[arg(allow_negative_numbers = true)]
        final_return: f64,
    },

    /// Compound an amount by annual inflation
    Inflation {
        /// Amount today
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Annual inflation rate in percent
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        /// Number of years
        #[arg(allow_negative_numbers = true)]
        years: i32,
    },
}

/// Handle calculator commands
pub fn handle_calc_command(cmd: CalcCommands) -> FinanceResult<()> {
    match cmd {
        CalcCommands::Loan {
            principal,
            rate,
            months,
        } => {
            let schedule = compute_amortization(principal, rate, months)?;
            print!("{}", format_loan_schedule(&schedule));
        }
        CalcCommands::Split { total, people } => {
            let result = split_expense(total, people)?;
            print!("{}", format_split(&result, people));
        }
        CalcCommands::Roi {
            initial,
            final_return,
        } => {
            let result = compute_roi(initial, final_return)?;
            print!("{}", format_roi(&result));
        }
        CalcCommands::Inflation {
            amount,
            rate,
            years,
        } => {
            let result = adjust_for_inflation(amount, rate, years)?;
            print!("{}", format_inflation(&result));
        }
    }

    Ok(())
}
