//! Exchange rate providers
//!
//! [`RateProvider`] is the contract for anything that can return the rates
//! of one base currency. [`SnapshotRateProvider`] serves them from a saved
//! JSON snapshot in the layout used by the Frankfurter API:
//!
//! ```json
//! { "base": "EUR", "date": "2024-05-01", "rates": { "USD": 1.07, "GBP": 0.85 } }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::storage::file_io::read_json_optional;

/// Source of exchange rates for a base currency
pub trait RateProvider {
    /// Rates from `base` to every currency the provider knows, keyed by code
    fn get_rates(&self, base: &str) -> FinanceResult<HashMap<String, f64>>;
}

/// Saved rate table for one base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub base: String,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

impl RateSnapshot {
    /// Derive the rates for `base` via cross rates
    ///
    /// The snapshot's own base is included at `1.0`.
    pub fn rates_for(&self, base: &str) -> FinanceResult<HashMap<String, f64>> {
        let base = base.trim().to_uppercase();
        let snapshot_base = self.base.to_uppercase();

        let mut table: HashMap<String, f64> = self
            .rates
            .iter()
            .map(|(code, rate)| (code.to_uppercase(), *rate))
            .collect();
        table.insert(snapshot_base.clone(), 1.0);

        let pivot = match table.get(&base) {
            Some(rate) if *rate > 0.0 && rate.is_finite() => *rate,
            _ => {
                return Err(FinanceError::RateUnavailable(format!(
                    "No rates for base currency {}",
                    base
                )))
            }
        };

        Ok(table
            .into_iter()
            .map(|(code, rate)| (code, rate / pivot))
            .collect())
    }
}

/// [`RateProvider`] backed by a JSON snapshot file
pub struct SnapshotRateProvider {
    path: PathBuf,
}

impl SnapshotRateProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, failing if it is missing
    pub fn load(&self) -> FinanceResult<RateSnapshot> {
        read_json_optional(&self.path)?.ok_or_else(|| {
            FinanceError::RateUnavailable(format!(
                "Rate snapshot not found at {}",
                self.path.display()
            ))
        })
    }
}

impl RateProvider for SnapshotRateProvider {
    fn get_rates(&self, base: &str) -> FinanceResult<HashMap<String, f64>> {
        self.load()?.rates_for(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::write_json_atomic;
    use tempfile::TempDir;

    fn snapshot() -> RateSnapshot {
        RateSnapshot {
            base: "EUR".into(),
            date: Some("2024-05-01".into()),
            rates: HashMap::from([("USD".to_string(), 1.25), ("GBP".to_string(), 0.5)]),
        }
    }

    #[test]
    fn test_rates_for_snapshot_base() {
        let rates = snapshot().rates_for("EUR").unwrap();
        assert_eq!(rates["EUR"], 1.0);
        assert_eq!(rates["USD"], 1.25);
    }

    #[test]
    fn test_cross_rates() {
        let rates = snapshot().rates_for("gbp").unwrap();
        assert_eq!(rates["GBP"], 1.0);
        assert_eq!(rates["EUR"], 2.0);
        assert_eq!(rates["USD"], 2.5);
    }

    #[test]
    fn test_unknown_base() {
        let err = snapshot().rates_for("JPY").unwrap_err();
        assert!(matches!(err, FinanceError::RateUnavailable(_)));
    }

    #[test]
    fn test_provider_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rates.json");
        write_json_atomic(&path, &snapshot()).unwrap();

        let provider = SnapshotRateProvider::new(&path);
        let rates = provider.get_rates("USD").unwrap();
        assert_eq!(rates["EUR"], 0.8);
    }

    #[test]
    fn test_missing_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let provider = SnapshotRateProvider::new(temp_dir.path().join("none.json"));
        assert!(matches!(
            provider.get_rates("EUR"),
            Err(FinanceError::RateUnavailable(_))
        ));
    }
}
