//! Core data models for fintrack
//!
//! This module contains the data structures of the personal finance domain:
//! transactions, money amounts, time ranges, categories and savings goals.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod range;
pub mod transaction;

pub use category::{default_categories, DefaultCategory};
pub use goal::SavingsGoal;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use range::{whole_months_between, TimeRange};
pub use transaction::{
    parse_iso_date, parse_records, Collection, Transaction, TransactionKind, TransactionRecord,
    TransactionValidationError, ISO_DATE_FORMAT,
};
