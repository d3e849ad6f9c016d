//! Transaction model
//!
//! A transaction is either income or expense; its amount is always positive
//! and the polarity lives in [`TransactionKind`]. Records are replaced
//! wholesale on edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{FinanceError, FinanceResult};

/// Date format used for persisted and exported transaction dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Polarity of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The store partition this kind lives in
    pub fn collection(&self) -> Collection {
        match self {
            Self::Income => Collection::Incomes,
            Self::Expense => Collection::Expenses,
        }
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Apply this kind's sign to a positive amount
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    /// Accepts the current names plus the legacy `ingreso`/`gasto` values
    /// found in older exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" => Ok(Self::Income),
            "expense" | "gasto" => Ok(Self::Expense),
            other => Err(FinanceError::Validation(format!(
                "Unknown transaction type '{}'. Use income or expense",
                other
            ))),
        }
    }
}

/// Store partition a transaction is persisted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Incomes,
    Expenses,
}

impl Collection {
    /// Both partitions, in merge order
    pub fn all() -> [Collection; 2] {
        [Self::Incomes, Self::Expenses]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomes => "incomes",
            Self::Expenses => "expenses",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive
    pub amount: Money,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category name
    pub category: String,

    /// Calendar date (no time component)
    pub date: NaiveDate,

    /// Optional notes
    pub description: String,

    /// ISO currency code the amount was recorded in
    pub currency: String,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category: category.into(),
            date,
            description: String::new(),
            currency: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign implied by the kind
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    /// The store partition this transaction belongs to
    pub fn collection(&self) -> Collection {
        self.kind.collection()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }

    /// Convert into the persisted record shape
    pub fn to_record(&self) -> TransactionRecord {
        TransactionRecord {
            id: self.id.to_string(),
            amount: self.amount.as_f64(),
            kind: self.kind.as_str().to_string(),
            category: self.category.clone(),
            date: self.date.format(ISO_DATE_FORMAT).to_string(),
            description: self.description.clone(),
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format(ISO_DATE_FORMAT),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

impl From<TransactionValidationError> for FinanceError {
    fn from(err: TransactionValidationError) -> Self {
        FinanceError::Validation(err.to_string())
    }
}

/// Parse an ISO-8601 calendar date, reporting the offending value on failure
pub fn parse_iso_date(value: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|source| {
        FinanceError::DateParse {
            value: value.to_string(),
            source,
        }
    })
}

/// Persisted shape of a transaction
///
/// Mirrors the document layout used by the store: the amount is a plain
/// number and the date an ISO string. Converting to a [`Transaction`] is
/// where malformed dates are caught.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransactionRecord {
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub date: String,
    pub description: String,
    pub currency: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = FinanceError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let date = parse_iso_date(&record.date)?;
        let kind: TransactionKind = record.kind.parse()?;
        let id: TransactionId = record.id.parse()?;

        let txn = Transaction {
            id,
            amount: Money::from_f64(record.amount),
            kind,
            category: record.category,
            date,
            description: record.description,
            currency: record.currency,
        };
        txn.validate()?;
        Ok(txn)
    }
}

/// Parse a batch of records, failing on the first malformed one
pub fn parse_records(records: Vec<TransactionRecord>) -> FinanceResult<Vec<Transaction>> {
    records.into_iter().map(Transaction::try_from).collect()
}
