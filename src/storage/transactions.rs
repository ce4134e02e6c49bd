//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrakrError;
use crate::models::{Transaction, TransactionId, TransactionKind, WalletId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with indexing
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: wallet_id -> transaction_ids
    by_wallet: RwLock<HashMap<WalletId, Vec<TransactionId>>>,
}

/// Newest first; id as final tiebreaker so ordering is fully deterministic
fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.date
        .cmp(&a.date)
        .then(b.created_at.cmp(&a.created_at))
        .then(a.id.as_uuid().cmp(b.id.as_uuid()))
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_wallet: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the wallet index
    pub fn load(&self) -> Result<(), TrakrError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_wallet.clear();

        for txn in file_data.transactions {
            if let Some(wallet_id) = txn.wallet_id {
                by_wallet.entry(wallet_id).or_default().push(txn.id);
            }
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(newest_first);

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// Get transactions for a wallet, newest first
    pub fn get_by_wallet(&self, wallet_id: WalletId) -> Result<Vec<Transaction>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_wallet = self
            .by_wallet
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_wallet.get(&wallet_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// Get transactions for a category key (case-insensitive), newest first
    pub fn get_by_category(&self, category: &str) -> Result<Vec<Transaction>, TrakrError> {
        let category_lower = category.to_lowercase();
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|t| t.category.to_lowercase() == category_lower)
            .collect())
    }

    /// Get transactions of a single kind, newest first
    pub fn get_by_kind(&self, kind: TransactionKind) -> Result<Vec<Transaction>, TrakrError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|t| t.kind == kind).collect())
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from old index if updating
        if let Some(old) = data.get(&txn.id) {
            if let Some(old_wallet) = old.wallet_id {
                if let Some(ids) = by_wallet.get_mut(&old_wallet) {
                    ids.retain(|&id| id != txn.id);
                }
            }
        }

        if let Some(wallet_id) = txn.wallet_id {
            by_wallet.entry(wallet_id).or_default().push(txn.id);
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_wallet = self
            .by_wallet
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(wallet_id) = txn.wallet_id {
                if let Some(ids) = by_wallet.get_mut(&wallet_id) {
                    ids.retain(|&tid| tid != id);
                }
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check if any transaction references the given wallet
    pub fn wallet_has_transactions(&self, wallet_id: WalletId) -> Result<bool, TrakrError> {
        let by_wallet = self
            .by_wallet
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_wallet
            .get(&wallet_id)
            .map(|ids| !ids.is_empty())
            .unwrap_or(false))
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
