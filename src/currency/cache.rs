//! Session cache of exchange rates
//!
//! Rates are fetched once per base currency and kept for the lifetime of
//! the cache. Conversion is display-only, so a missing rate degrades to the
//! identity rate `1.0` instead of failing.

use std::collections::HashMap;
use std::sync::RwLock;

use super::catalog::MAJOR_CURRENCIES;
use super::provider::RateProvider;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Money;

/// Base whose rate table decides which currencies are offered
pub const REFERENCE_BASE: &str = "EUR";

/// Memoizing wrapper around a [`RateProvider`]
pub struct RateCache<P: RateProvider> {
    provider: P,
    rates: RwLock<HashMap<String, HashMap<String, f64>>>,
}

impl<P: RateProvider> RateCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            rates: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Rate table for `base`, fetched on first use
    ///
    /// Failed fetches are not remembered, so a later call retries.
    pub fn rates_for(&self, base: &str) -> FinanceResult<HashMap<String, f64>> {
        let base = base.trim().to_uppercase();
        {
            let rates = self.rates.read().map_err(|e| {
                FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
            })?;
            if let Some(table) = rates.get(&base) {
                return Ok(table.clone());
            }
        }

        let table = self.provider.get_rates(&base)?;
        tracing::debug!(base = %base, count = table.len(), "fetched exchange rates");

        let mut rates = self.rates.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        rates.insert(base, table.clone());
        Ok(table)
    }

    /// Rate to convert an amount in `from` into `to`
    ///
    /// Falls back to `1.0` when the rate cannot be obtained.
    pub fn get_rate(&self, from: &str, to: &str) -> f64 {
        let target = to.trim().to_uppercase();
        if from.trim().eq_ignore_ascii_case(&target) {
            return 1.0;
        }

        match self.rates_for(from) {
            Ok(table) => match table.get(&target) {
                Some(rate) => *rate,
                None => {
                    tracing::warn!(from, to, "no exchange rate for target, using 1.0");
                    1.0
                }
            },
            Err(e) => {
                tracing::warn!(from, to, error = %e, "exchange rates unavailable, using 1.0");
                1.0
            }
        }
    }

    /// Convert an amount for display
    pub fn convert(&self, amount: Money, from: &str, to: &str) -> Money {
        amount.scale(self.get_rate(from, to))
    }

    /// Allow-listed currencies the provider has rates for, in allow-list order
    ///
    /// Returns an empty list when the rates cannot be fetched.
    pub fn available_currencies(&self) -> Vec<&'static str> {
        match self.rates_for(REFERENCE_BASE) {
            Ok(table) => MAJOR_CURRENCIES
                .iter()
                .map(|c| c.code)
                .filter(|code| table.contains_key(*code))
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "could not list available currencies");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingProvider {
        calls: Cell<usize>,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl RateProvider for CountingProvider {
        fn get_rates(&self, base: &str) -> FinanceResult<HashMap<String, f64>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FinanceError::RateUnavailable("offline".into()));
            }
            let mut rates = HashMap::from([
                ("USD".to_string(), 1.1),
                ("GBP".to_string(), 0.85),
                ("XAU".to_string(), 0.0004),
                ("JPY".to_string(), 160.0),
            ]);
            rates.insert(base.to_string(), 1.0);
            Ok(rates)
        }
    }

    #[test]
    fn test_rates_are_fetched_once_per_base() {
        let cache = RateCache::new(CountingProvider::new(false));

        assert_eq!(cache.get_rate("EUR", "USD"), 1.1);
        assert_eq!(cache.get_rate("eur", "GBP"), 0.85);
        assert_eq!(cache.provider().calls.get(), 1);

        cache.get_rate("USD", "JPY");
        assert_eq!(cache.provider().calls.get(), 2);
    }

    #[test]
    fn test_missing_target_falls_back_to_identity() {
        let cache = RateCache::new(CountingProvider::new(false));
        assert_eq!(cache.get_rate("EUR", "BRL"), 1.0);
    }

    #[test]
    fn test_same_currency_skips_provider() {
        let cache = RateCache::new(CountingProvider::new(false));
        assert_eq!(cache.get_rate("USD", "usd"), 1.0);
        assert_eq!(cache.provider().calls.get(), 0);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = RateCache::new(CountingProvider::new(true));
        assert_eq!(cache.get_rate("EUR", "USD"), 1.0);
        assert_eq!(cache.get_rate("EUR", "USD"), 1.0);
        assert_eq!(cache.provider().calls.get(), 2);
    }

    #[test]
    fn test_available_currencies_intersects_allow_list() {
        let cache = RateCache::new(CountingProvider::new(false));
        assert_eq!(cache.available_currencies(), vec!["USD", "EUR", "JPY", "GBP"]);
    }

    #[test]
    fn test_available_currencies_on_failure() {
        let cache = RateCache::new(CountingProvider::new(true));
        assert!(cache.available_currencies().is_empty());
    }

    #[test]
    fn test_convert() {
        let cache = RateCache::new(CountingProvider::new(false));
        let converted = cache.convert(Money::from_cents(10000), "EUR", "USD");
        assert_eq!(converted.cents(), 11000);
    }
}
