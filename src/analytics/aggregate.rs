//! Aggregation of transactions into an analytics view
//!
//! [`aggregate`] filters a snapshot to a [`TimeRange`] and derives totals,
//! per-category sums, a per-day income/expense series and a running
//! balance. The input is never mutated and `today` is always supplied by the
//! caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FinanceResult;
use crate::models::{Money, TimeRange, Transaction, TransactionKind, TransactionRecord};

/// Number of expense categories reported as "top"
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Sum of one category within a partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
}

/// Income and expense booked on a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
}

impl DailyTotals {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Running balance after one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Money,
}

/// Analytics summary of the transactions inside a time range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedView {
    pub range: TimeRange,
    pub today: NaiveDate,
    pub transaction_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Share of income kept, in percent; `0` without income
    pub savings_ratio: f64,
    /// Per-category income sums, first-seen order
    pub income_by_category: Vec<CategoryTotal>,
    /// Per-category expense sums, first-seen order
    pub expense_by_category: Vec<CategoryTotal>,
    /// Largest expense categories, descending
    pub top_expense_categories: Vec<CategoryTotal>,
    /// One entry per distinct date with any activity, ascending
    pub daily_series: Vec<DailyTotals>,
    /// One point per transaction in date order
    pub balance_series: Vec<BalancePoint>,
}

impl AggregatedView {
    /// Whether no transaction fell inside the range
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Copy of this view with every amount multiplied by `rate`
    ///
    /// Used to display figures in another currency. Ratios and counts are
    /// left untouched.
    pub fn converted(&self, rate: f64) -> Self {
        let scale_categories = |totals: &[CategoryTotal]| -> Vec<CategoryTotal> {
            totals
                .iter()
                .map(|c| CategoryTotal {
                    category: c.category.clone(),
                    total: c.total.scale(rate),
                    count: c.count,
                })
                .collect()
        };

        Self {
            range: self.range,
            today: self.today,
            transaction_count: self.transaction_count,
            total_income: self.total_income.scale(rate),
            total_expense: self.total_expense.scale(rate),
            balance: self.balance.scale(rate),
            savings_ratio: self.savings_ratio,
            income_by_category: scale_categories(&self.income_by_category),
            expense_by_category: scale_categories(&self.expense_by_category),
            top_expense_categories: scale_categories(&self.top_expense_categories),
            daily_series: self
                .daily_series
                .iter()
                .map(|d| DailyTotals {
                    date: d.date,
                    income: d.income.scale(rate),
                    expense: d.expense.scale(rate),
                })
                .collect(),
            balance_series: self
                .balance_series
                .iter()
                .map(|p| BalancePoint {
                    date: p.date,
                    balance: p.balance.scale(rate),
                })
                .collect(),
        }
    }
}

/// Aggregate the transactions that fall inside `range` as seen from `today`
pub fn aggregate(transactions: &[Transaction], range: TimeRange, today: NaiveDate) -> AggregatedView {
    let filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| range.contains(t.date, today))
        .collect();

    let total_income: Money = filtered
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let total_expense: Money = filtered
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();
    let balance = total_income - total_expense;

    let income_by_category = category_totals(&filtered, TransactionKind::Income);
    let expense_by_category = category_totals(&filtered, TransactionKind::Expense);

    AggregatedView {
        range,
        today,
        transaction_count: filtered.len(),
        total_income,
        total_expense,
        balance,
        savings_ratio: savings_ratio(total_income, balance),
        top_expense_categories: top_categories(&expense_by_category, TOP_CATEGORY_COUNT),
        income_by_category,
        expense_by_category,
        daily_series: daily_series(&filtered),
        balance_series: balance_series(&filtered),
    }
}

/// Convert raw records and aggregate them
///
/// Fails with the first record whose date or kind cannot be parsed; nothing
/// is aggregated in that case.
pub fn aggregate_records(
    records: Vec<TransactionRecord>,
    range: TimeRange,
    today: NaiveDate,
) -> FinanceResult<AggregatedView> {
    let transactions = crate::models::parse_records(records)?;
    Ok(aggregate(&transactions, range, today))
}

/// `balance / income * 100`, or `0` when there is no income
pub fn savings_ratio(total_income: Money, balance: Money) -> f64 {
    if total_income.is_positive() {
        balance.as_f64() / total_income.as_f64() * 100.0
    } else {
        0.0
    }
}

fn category_totals(transactions: &[&Transaction], kind: TransactionKind) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => {
                entry.total += txn.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
                count: 1,
            }),
        }
    }

    totals
}

/// Largest categories first; equal sums keep their original order
pub fn top_categories(totals: &[CategoryTotal], limit: usize) -> Vec<CategoryTotal> {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted.truncate(limit);
    sorted
}

fn daily_series(transactions: &[&Transaction]) -> Vec<DailyTotals> {
    let mut dates: Vec<NaiveDate> = transactions.iter().map(|t| t.date).collect();
    dates.sort();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| {
            let on_date = || transactions.iter().filter(move |t| t.date == date);
            DailyTotals {
                date,
                income: on_date().filter(|t| t.is_income()).map(|t| t.amount).sum(),
                expense: on_date().filter(|t| t.is_expense()).map(|t| t.amount).sum(),
            }
        })
        .collect()
}

fn balance_series(transactions: &[&Transaction]) -> Vec<BalancePoint> {
    let mut ordered = transactions.to_vec();
    // sort_by_key is stable: same-day transactions keep input order
    ordered.sort_by_key(|t| t.date);

    let mut running = Money::zero();
    ordered
        .into_iter()
        .map(|t| {
            running += t.signed_amount();
            BalancePoint {
                date: t.date,
                balance: running,
            }
        })
        .collect()
}
