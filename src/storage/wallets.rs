//! Wallet repository for JSON storage
//!
//! Manages loading and saving wallets to wallets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrakrError;
use crate::models::{Wallet, WalletId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable wallet data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct WalletData {
    pub wallets: Vec<Wallet>,
}

/// Repository for wallet persistence
pub struct WalletRepository {
    path: PathBuf,
    data: RwLock<HashMap<WalletId, Wallet>>,
}

impl WalletRepository {
    /// Create a new wallet repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load wallets from disk
    pub fn load(&self) -> Result<(), TrakrError> {
        let file_data: WalletData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for wallet in file_data.wallets {
            data.insert(wallet.id, wallet);
        }

        Ok(())
    }

    /// Save wallets to disk
    pub fn save(&self) -> Result<(), TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut wallets: Vec<_> = data.values().cloned().collect();
        wallets.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let file_data = WalletData { wallets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a wallet by ID
    pub fn get(&self, id: WalletId) -> Result<Option<Wallet>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all wallets, default wallet first then by name
    pub fn get_all(&self) -> Result<Vec<Wallet>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut wallets: Vec<_> = data.values().cloned().collect();
        wallets.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then(a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(wallets)
    }

    /// Get a wallet by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Wallet>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|w| w.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Get the default wallet, if one is set
    pub fn get_default(&self) -> Result<Option<Wallet>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|w| w.is_default).cloned())
    }

    /// Insert or update a wallet
    pub fn upsert(&self, wallet: Wallet) -> Result<(), TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(wallet.id, wallet);
        Ok(())
    }

    /// Delete a wallet
    pub fn delete(&self, id: WalletId) -> Result<bool, TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a wallet exists
    pub fn exists(&self, id: WalletId) -> Result<bool, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Check if a wallet name is already taken
    pub fn name_exists(&self, name: &str, exclude_id: Option<WalletId>) -> Result<bool, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .any(|w| w.name.to_lowercase() == name_lower && Some(w.id) != exclude_id))
    }

    /// Count wallets
    pub fn count(&self) -> Result<usize, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
