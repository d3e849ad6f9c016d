//! Export module for fintrack
//!
//! Spreadsheet-compatible CSV export of transactions, and the matching
//! import.

pub mod csv;

pub use self::csv::{export_transactions_csv, import_transactions_csv, CSV_HEADER};
