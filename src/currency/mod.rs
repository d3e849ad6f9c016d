//! Currency conversion for display
//!
//! Amounts are always stored in the currency they were recorded in; this
//! module only converts figures on the way to the screen.

pub mod cache;
pub mod catalog;
pub mod provider;

pub use cache::{RateCache, REFERENCE_BASE};
pub use catalog::{currency_info, currency_symbol, CurrencyInfo, MAJOR_CURRENCIES};
pub use provider::{RateProvider, RateSnapshot, SnapshotRateProvider};
