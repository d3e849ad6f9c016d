//! Rolling time ranges used to filter transactions for analytics
//!
//! Every range is a lookback window ending "today". Windows are measured in
//! whole calendar units and are exclusive of their boundary, so a transaction
//! exactly one month old is outside the `Month` window.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanceError;

/// A rolling lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Fewer than 7 days back
    Week,
    /// Less than one calendar month back
    #[default]
    Month,
    /// Less than three calendar months back
    Quarter,
    /// Less than one calendar year back
    Year,
}

impl TimeRange {
    /// All ranges, shortest first
    pub fn all() -> &'static [TimeRange] {
        &[Self::Week, Self::Month, Self::Quarter, Self::Year]
    }

    /// Check whether `date` falls inside this window relative to `today`
    ///
    /// Dates after `today` produce a non-positive span and are always inside.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Week => (today - date).num_days() < 7,
            Self::Month => whole_months_between(date, today) < 1,
            Self::Quarter => whole_months_between(date, today) < 3,
            Self::Year => whole_months_between(date, today) / 12 < 1,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last month",
            Self::Quarter => "Last 3 months",
            Self::Year => "Last year",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            "quarter" | "q" => Ok(Self::Quarter),
            "year" | "y" => Ok(Self::Year),
            other => Err(FinanceError::Validation(format!(
                "Unknown range '{}'. Use week, month, quarter or year",
                other
            ))),
        }
    }
}

/// Number of complete calendar months from `start` to `end`
///
/// Negative when `end` is before `start`. A month only counts once the
/// day-of-month of `end` has reached the day-of-month of `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_month = i64::from(start.year()) * 12 + i64::from(start.month0());
    let end_month = i64::from(end.year()) * 12 + i64::from(end.month0());
    let mut months = end_month - start_month;
    let day_delta = i64::from(end.day()) - i64::from(start.day());

    if months > 0 && day_delta < 0 {
        months -= 1;
    } else if months < 0 && day_delta > 0 {
        months += 1;
    }

    months
}
