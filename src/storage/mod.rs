//! Storage layer for Trakr
//!
//! Provides JSON file storage with atomic writes and automatic
//! directory creation, plus the activity-log hooks services use.

pub mod budgets;
pub mod file_io;
pub mod init;
pub mod transactions;
pub mod wallets;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;
pub use wallets::WalletRepository;

use serde::Serialize;

use crate::activity::{ActivityEntry, ActivityLogger, EntityKind};
use crate::config::paths::TrakrPaths;
use crate::error::TrakrError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrakrPaths,
    pub transactions: TransactionRepository,
    pub wallets: WalletRepository,
    pub budgets: BudgetRepository,
    activity: ActivityLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrakrPaths) -> Result<Self, TrakrError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            wallets: WalletRepository::new(paths.wallets_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            activity: ActivityLogger::new(paths.activity_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrakrPaths {
        &self.paths
    }

    /// Get the activity logger
    pub fn activity(&self) -> &ActivityLogger {
        &self.activity
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrakrError> {
        self.transactions.load()?;
        self.wallets.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrakrError> {
        self.transactions.save()?;
        self.wallets.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a create operation in the activity log
    pub fn log_create<T: Serialize>(
        &self,
        kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrakrError> {
        self.activity
            .log(&ActivityEntry::create(kind, entity_id, entity_name, entity))
    }

    /// Record an update operation in the activity log
    pub fn log_update<T: Serialize>(
        &self,
        kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), TrakrError> {
        self.activity.log(&ActivityEntry::update(
            kind,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation in the activity log
    pub fn log_delete<T: Serialize>(
        &self,
        kind: EntityKind,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrakrError> {
        self.activity
            .log(&ActivityEntry::delete(kind, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wallet;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_and_save_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage.wallets.upsert(Wallet::new("Cash")).unwrap();
        storage.save_all().unwrap();

        assert!(temp_dir.path().join("data").join("wallets.json").exists());
        assert!(temp_dir
            .path()
            .join("data")
            .join("transactions.json")
            .exists());
        assert!(temp_dir.path().join("data").join("budgets.json").exists());
    }

    #[test]
    fn test_log_hooks_append_to_activity_log() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let wallet = Wallet::new("Cash");
        storage
            .log_create(
                EntityKind::Wallet,
                wallet.id.to_string(),
                Some(wallet.name.clone()),
                &wallet,
            )
            .unwrap();

        let entries = storage.activity().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_kind, EntityKind::Wallet);
    }
}
