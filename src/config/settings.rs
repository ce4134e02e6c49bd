//! User settings for Trakr
//!
//! Manages user preferences including the default currency and the
//! default report range.

use serde::{Deserialize, Serialize};

use super::paths::TrakrPaths;
use crate::error::TrakrError;

/// User settings for Trakr
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency code for new wallets (ISO 4217)
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Default report range key (e.g. "30days")
    #[serde(default = "default_range")]
    pub default_range: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_range() -> String {
    "30days".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            default_range: default_range(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrakrPaths) -> Result<Self, TrakrError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrakrError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TrakrError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk (write to temp, then rename)
    pub fn save(&self, paths: &TrakrPaths) -> Result<(), TrakrError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrakrError::Config(format!("Failed to serialize settings: {}", e)))?;

        let temp_path = settings_path.with_extension("json.tmp");
        std::fs::write(&temp_path, contents)
            .map_err(|e| TrakrError::Io(format!("Failed to write settings file: {}", e)))?;
        std::fs::rename(&temp_path, &settings_path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_path);
            TrakrError::Io(format!("Failed to rename settings file: {}", e))
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
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.default_range, "30days");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_load_missing_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency = "EUR".to_string();
        settings.default_range = "90days".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.default_range, "90days");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency": "GBP"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency, "GBP");
        assert_eq!(loaded.default_range, "30days");
        assert_eq!(loaded.schema_version, 1);
    }
}
