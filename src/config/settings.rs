//! User settings for fintrack
//!
//! Manages user preferences including the active user, base currency, the
//! default analytics range and the location of the exchange rate snapshot.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FinanceError;
use crate::models::TimeRange;

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Identifier of the user whose partitions are read and written
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Currency new transactions are recorded in (ISO code)
    #[serde(default = "default_currency")]
    pub base_currency: String,

    /// Range used by reports when none is given
    #[serde(default)]
    pub default_range: TimeRange,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Override for the exchange rate snapshot location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user_id: default_user_id(),
            base_currency: default_currency(),
            default_range: TimeRange::default(),
            date_format: default_date_format(),
            rates_file: None,
        }
    }
}

impl Settings {
    /// Resolve where the exchange rate snapshot lives
    pub fn rates_path(&self, paths: &FintrackPaths) -> PathBuf {
        self.rates_file
            .clone()
            .unwrap_or_else(|| paths.rates_file())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FinanceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FinanceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FinanceError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FinanceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.user_id, "default");
        assert_eq!(settings.base_currency, "EUR");
        assert_eq!(settings.default_range, TimeRange::Month);
        assert!(settings.rates_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.base_currency = "USD".to_string();
        settings.default_range = TimeRange::Quarter;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.base_currency, "USD");
        assert_eq!(loaded.default_range, TimeRange::Quarter);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"user_id": "alice"}"#).unwrap();
        assert_eq!(settings.user_id, "alice");
        assert_eq!(settings.base_currency, "EUR");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_rates_path_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.rates_path(&paths), paths.rates_file());

        settings.rates_file = Some(PathBuf::from("/tmp/custom-rates.json"));
        assert_eq!(
            settings.rates_path(&paths),
            PathBuf::from("/tmp/custom-rates.json")
        );
    }
}
