//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack
//! application: recording income and expense transactions, aggregating them
//! into analytics views and running standalone financial calculators.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, money, ranges, goals)
//! - `storage`: JSON file storage layer and the store contract
//! - `services`: Business logic layer
//! - `analytics`: Pure aggregation over transaction snapshots
//! - `calculators`: Loan, split, ROI and inflation calculators
//! - `currency`: Exchange rates for display conversion
//! - `export`: CSV export and import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::analytics::aggregate;
//! use fintrack::models::TimeRange;
//!
//! let view = aggregate(&transactions, TimeRange::Month, today);
//! println!("balance: {}", view.balance);
//! ```

pub mod analytics;
pub mod calculators;
pub mod cli;
pub mod config;
pub mod currency;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
