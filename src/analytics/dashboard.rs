//! Home dashboard summary
//!
//! All-time totals plus the income and expense booked today, this month and
//! this year, and the most recent transactions.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Money, Transaction};

/// Number of transactions listed as recent
pub const RECENT_TRANSACTION_COUNT: usize = 10;

/// Income and expense over one calendar period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PeriodTotals {
    pub income: Money,
    pub expense: Money,
}

impl PeriodTotals {
    fn from_matching<F>(transactions: &[Transaction], mut keep: F) -> Self
    where
        F: FnMut(&Transaction) -> bool,
    {
        transactions
            .iter()
            .filter(|t| keep(*t))
            .fold(Self::default(), |mut acc, t| {
                if t.is_income() {
                    acc.income += t.amount;
                } else {
                    acc.expense += t.amount;
                }
                acc
            })
    }

    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Snapshot shown on the home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub all_time: PeriodTotals,
    pub day: PeriodTotals,
    pub month: PeriodTotals,
    pub year: PeriodTotals,
    /// Latest transactions, newest first
    pub recent: Vec<Transaction>,
}

impl DashboardSummary {
    /// Net balance over every transaction
    pub fn balance(&self) -> Money {
        self.all_time.balance()
    }
}

/// Build the dashboard for `today`
///
/// "This month" means the same calendar month of the same year.
pub fn dashboard(transactions: &[Transaction], today: NaiveDate) -> DashboardSummary {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_TRANSACTION_COUNT);

    DashboardSummary {
        today,
        all_time: PeriodTotals::from_matching(transactions, |_| true),
        day: PeriodTotals::from_matching(transactions, |t| t.date == today),
        month: PeriodTotals::from_matching(transactions, |t| {
            t.date.year() == today.year() && t.date.month() == today.month()
        }),
        year: PeriodTotals::from_matching(transactions, |t| t.date.year() == today.year()),
        recent,
    }
}
