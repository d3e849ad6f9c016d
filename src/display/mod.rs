//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, reports and calculator
//! results for terminal display.

pub mod calculator;
pub mod format;
pub mod report;
pub mod transaction;

pub use calculator::{format_inflation, format_loan_schedule, format_roi, format_split};
pub use report::{format_analytics, format_daily_balance, format_dashboard, format_goal};
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
