//! Transaction service
//!
//! Provides business logic for transaction management: validation, lookup
//! by (short) ID, filtering and moving records between partitions when
//! their kind changes.

use chrono::NaiveDate;

use crate::analytics::TransactionQuery;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::TransactionStore;

/// Service for transaction management
pub struct TransactionService<'a, S: TransactionStore + ?Sized> {
    store: &'a S,
    user_id: &'a str,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by date range start
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub currency: String,
}

/// Replacement values for an existing transaction; `None` keeps the old value
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionKind>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub currency: Option<String>,
}

impl<'a, S: TransactionStore + ?Sized> TransactionService<'a, S> {
    /// Create a new transaction service for one user
    pub fn new(store: &'a S, user_id: &'a str) -> Self {
        Self { store, user_id }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinanceResult<Transaction> {
        let mut txn = Transaction::new(
            input.kind,
            input.amount,
            input.category.trim(),
            input.date,
        )
        .with_currency(input.currency.trim().to_uppercase());

        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()?;
        self.store.create(self.user_id, txn.collection(), &txn)?;

        tracing::info!(
            user = self.user_id,
            id = %txn.id,
            kind = txn.kind.as_str(),
            "created transaction"
        );
        Ok(txn)
    }

    /// Store an already-built transaction (used by imports)
    pub fn insert(&self, txn: &Transaction) -> FinanceResult<()> {
        txn.validate()?;
        self.store.create(self.user_id, txn.collection(), txn)?;
        Ok(())
    }

    /// All transactions of the user in store order
    pub fn list_all(&self) -> FinanceResult<Vec<Transaction>> {
        self.store.list_transactions(self.user_id)
    }

    /// List transactions newest first, with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut transactions = self.list_all()?;

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(start) = filter.start_date {
            transactions.retain(|t| t.date >= start);
        }
        if let Some(end) = filter.end_date {
            transactions.retain(|t| t.date <= end);
        }

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Run a history search
    pub fn search(&self, query: &TransactionQuery) -> FinanceResult<Vec<Transaction>> {
        let mut found: Vec<Transaction> = self
            .list_all()?
            .into_iter()
            .filter(|t| query.matches(t))
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(found)
    }

    /// Find a transaction by full ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        let identifier = identifier.trim();
        let all = self.list_all()?;

        if let Some(exact) = all.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(Some(exact.clone()));
        }

        let mut matches = all.into_iter().filter(|t| t.id.matches_prefix(identifier));
        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(FinanceError::Validation(format!(
                "ID prefix '{}' matches more than one transaction",
                identifier
            )));
        }
        Ok(first)
    }

    /// Get a transaction by full ID or unique prefix, failing if missing
    pub fn get(&self, identifier: &str) -> FinanceResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FinanceError::transaction_not_found(identifier))
    }

    /// Replace a transaction with updated values
    ///
    /// When the kind changes the record moves to the other partition.
    pub fn update(&self, id: &TransactionId, input: UpdateTransactionInput) -> FinanceResult<Transaction> {
        let existing = self.get(id.as_str())?;
        let mut txn = existing.clone();

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(category) = input.category {
            txn.category = category.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        if let Some(currency) = input.currency {
            txn.currency = currency.trim().to_uppercase();
        }

        txn.validate()?;

        self.store.update(self.user_id, txn.collection(), &txn)?;
        if existing.collection() != txn.collection() {
            self.store
                .delete(self.user_id, existing.collection(), &existing.id)?;
        }

        tracing::info!(user = self.user_id, id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: &TransactionId) -> FinanceResult<Transaction> {
        let txn = self.get(id.as_str())?;

        if !self.store.delete(self.user_id, txn.collection(), &txn.id)? {
            return Err(FinanceError::transaction_not_found(id.to_string()));
        }

        tracing::info!(user = self.user_id, id = %txn.id, "deleted transaction");
        Ok(txn)
    }
}
