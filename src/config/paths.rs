//! Path management for Trakr
//!
//! Provides platform-aware path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `TRAKR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/trakr` or `~/.local/share/trakr`
//! 3. Windows: `%APPDATA%\trakr`

use std::path::PathBuf;

use crate::error::TrakrError;

/// Manages all paths used by Trakr
#[derive(Debug, Clone)]
pub struct TrakrPaths {
    /// Base directory for all Trakr data
    base_dir: PathBuf,
}

impl TrakrPaths {
    /// Create a new TrakrPaths instance
    ///
    /// Path resolution:
    /// 1. `TRAKR_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/trakr` or `~/.local/share/trakr`
    /// 3. Windows: `%APPDATA%\trakr`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrakrError> {
        let base_dir = if let Ok(custom) = std::env::var("TRAKR_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrakrPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.local/share/trakr/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.local/share/trakr/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to wallets.json
    pub fn wallets_file(&self) -> PathBuf {
        self.data_dir().join("wallets.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.local/share/trakr/)
    /// - Data directory (~/.local/share/trakr/data/)
    pub fn ensure_directories(&self) -> Result<(), TrakrError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrakrError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrakrError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Trakr has been initialized (wallet data exists)
    pub fn is_initialized(&self) -> bool {
        self.wallets_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrakrError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".local").join("share")
        });
    Ok(data_base.join("trakr"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrakrError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrakrError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("trakr"))
}
