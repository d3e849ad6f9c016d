//! Transaction store
//!
//! Defines the [`TransactionStore`] contract and a JSON file implementation
//! that keeps two partitions per user, `incomes.json` and `expenses.json`.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::config::paths::FintrackPaths;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{parse_records, Collection, Transaction, TransactionId, TransactionRecord};

use super::file_io::{read_json, write_json_atomic};

/// Document-store contract for a user's transactions
///
/// Writes are last-write-wins; there is no transactional guarantee across
/// partitions.
pub trait TransactionStore {
    /// All transactions of a user, the `incomes` partition first followed by
    /// `expenses`, each in stored order
    fn list_transactions(&self, user_id: &str) -> FinanceResult<Vec<Transaction>>;

    /// Insert a new transaction and return its identifier
    fn create(
        &self,
        user_id: &str,
        collection: Collection,
        txn: &Transaction,
    ) -> FinanceResult<TransactionId>;

    /// Replace the stored record with the same ID, inserting it if missing
    fn update(&self, user_id: &str, collection: Collection, txn: &Transaction)
        -> FinanceResult<()>;

    /// Remove a record, returning whether anything was deleted
    fn delete(&self, user_id: &str, collection: Collection, id: &TransactionId)
        -> FinanceResult<bool>;
}

/// Serializable partition document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PartitionData {
    transactions: Vec<TransactionRecord>,
}

type PartitionKey = (String, Collection);

/// JSON file backed [`TransactionStore`]
///
/// Partitions are loaded lazily on first access and written through on every
/// mutation.
pub struct JsonTransactionStore {
    paths: FintrackPaths,
    partitions: RwLock<HashMap<PartitionKey, Vec<TransactionRecord>>>,
}

impl JsonTransactionStore {
    /// Create a new store rooted at the given paths
    pub fn new(paths: FintrackPaths) -> Self {
        Self {
            paths,
            partitions: RwLock::new(HashMap::new()),
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Raw records of one partition, loading it from disk if needed
    pub fn records(&self, user_id: &str, collection: Collection) -> FinanceResult<Vec<TransactionRecord>> {
        self.ensure_loaded(user_id, collection)?;

        let partitions = self.partitions.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(partitions
            .get(&(user_id.to_string(), collection))
            .cloned()
            .unwrap_or_default())
    }

    fn ensure_loaded(&self, user_id: &str, collection: Collection) -> FinanceResult<()> {
        let key = (user_id.to_string(), collection);
        {
            let partitions = self.partitions.read().map_err(|e| {
                FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            if partitions.contains_key(&key) {
                return Ok(());
            }
        }

        let path = self.paths.collection_file(user_id, collection.as_str());
        let data: PartitionData = read_json(&path)?;
        tracing::debug!(
            user = user_id,
            collection = %collection,
            count = data.transactions.len(),
            "loaded partition"
        );

        let mut partitions = self.partitions.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        partitions.entry(key).or_insert(data.transactions);
        Ok(())
    }

    /// Apply a mutation to one partition and persist it
    ///
    /// The mutation runs on a copy; the cache only sees it once the file
    /// has been written.
    fn modify<F, R>(&self, user_id: &str, collection: Collection, f: F) -> FinanceResult<R>
    where
        F: FnOnce(&mut Vec<TransactionRecord>) -> FinanceResult<R>,
    {
        self.ensure_loaded(user_id, collection)?;

        let key = (user_id.to_string(), collection);
        let mut partitions = self.partitions.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut records = partitions.get(&key).cloned().unwrap_or_default();

        let result = f(&mut records)?;

        let path = self.paths.collection_file(user_id, collection.as_str());
        let data = PartitionData {
            transactions: records,
        };
        write_json_atomic(&path, &data)?;
        tracing::debug!(
            user = user_id,
            collection = %collection,
            count = data.transactions.len(),
            "saved partition"
        );

        partitions.insert(key, data.transactions);
        Ok(result)
    }
}

impl TransactionStore for JsonTransactionStore {
    fn list_transactions(&self, user_id: &str) -> FinanceResult<Vec<Transaction>> {
        let mut all = Vec::new();
        for collection in Collection::all() {
            all.extend(parse_records(self.records(user_id, collection)?)?);
        }
        Ok(all)
    }

    fn create(
        &self,
        user_id: &str,
        collection: Collection,
        txn: &Transaction,
    ) -> FinanceResult<TransactionId> {
        let record = txn.to_record();
        self.modify(user_id, collection, |records| {
            if records.iter().any(|r| r.id == record.id) {
                return Err(FinanceError::Duplicate {
                    entity_type: "Transaction",
                    identifier: record.id.clone(),
                });
            }
            records.push(record.clone());
            Ok(())
        })?;
        Ok(txn.id.clone())
    }

    fn update(
        &self,
        user_id: &str,
        collection: Collection,
        txn: &Transaction,
    ) -> FinanceResult<()> {
        let record = txn.to_record();
        self.modify(user_id, collection, |records| {
            match records.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record.clone(),
                None => records.push(record.clone()),
            }
            Ok(())
        })
    }

    fn delete(
        &self,
        user_id: &str,
        collection: Collection,
        id: &TransactionId,
    ) -> FinanceResult<bool> {
        self.modify(user_id, collection, |records| {
            let before = records.len();
            records.retain(|r| r.id != id.as_str());
            Ok(records.len() != before)
        })
    }
}
