//! Transaction history search

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionKind};

/// Criterion applied after the kind filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Transactions booked on exactly this date
    Date(NaiveDate),
    /// Category contains this text, ignoring case
    Category(String),
}

/// A history search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub kind: Option<TransactionKind>,
    pub criterion: Option<SearchCriterion>,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.criterion = Some(SearchCriterion::Date(date));
        self
    }

    pub fn category(mut self, text: impl Into<String>) -> Self {
        self.criterion = Some(SearchCriterion::Category(text.into()));
        self
    }

    /// Check whether a transaction satisfies the query
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.kind.is_some_and(|kind| kind != txn.kind) {
            return false;
        }

        match &self.criterion {
            None => true,
            Some(SearchCriterion::Date(date)) => txn.date == *date,
            Some(SearchCriterion::Category(text)) => txn
                .category
                .to_lowercase()
                .contains(&text.trim().to_lowercase()),
        }
    }

    /// Transactions matching the query, in input order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Income minus expense booked on `date`
pub fn daily_balance(transactions: &[Transaction], date: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.date == date)
        .map(|t| t.signed_amount())
        .sum()
}
