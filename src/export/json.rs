//! JSON Export functionality
//!
//! Exports the complete data set to JSON format with schema versioning.

use crate::error::TrakrResult;
use crate::models::{Budget, Transaction, Wallet};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions
    pub transactions: Vec<Transaction>,

    /// All wallets
    pub wallets: Vec<Wallet>,

    /// All budgets
    pub budgets: Vec<Budget>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of transactions
    pub transaction_count: usize,

    /// Total number of wallets
    pub wallet_count: usize,

    /// Total number of budgets
    pub budget_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> TrakrResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let wallets = storage.wallets.get_all()?;
        let budgets = storage.budgets.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.day())
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.day())
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            wallet_count: wallets.len(),
            budget_count: budgets.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            wallets,
            budgets,
            metadata,
        })
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        // Every wallet reference must resolve inside the export
        let wallet_ids: std::collections::HashSet<_> = self.wallets.iter().map(|w| w.id).collect();

        for txn in &self.transactions {
            if let Some(wallet_id) = txn.wallet_id {
                if !wallet_ids.contains(&wallet_id) {
                    return Err(format!(
                        "Transaction {} references unknown wallet {}",
                        txn.id, wallet_id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> TrakrResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export (for verification/restore)
pub fn import_from_json(json_str: &str) -> TrakrResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)
        .map_err(|e| crate::error::TrakrError::Import(e.to_string()))?;

    export
        .validate()
        .map_err(crate::error::TrakrError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrakrPaths;
    use crate::models::{Money, TransactionKind, WalletId};
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();

        let wallet = Wallet::new("Cash");
        storage.wallets.upsert(wallet.clone()).unwrap();
        storage.wallets.save().unwrap();

        let mut txn = Transaction::new(
            Utc::now() - Duration::days(1),
            Money::from_cents(5000),
            TransactionKind::Expense,
            "food",
        );
        txn.wallet_id = Some(wallet.id);
        storage.transactions.upsert(txn).unwrap();

        let budget = Budget::new(
            "food",
            Money::from_cents(50_000),
            crate::models::BudgetPeriod::Monthly,
        );
        storage.budgets.upsert(budget).unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.wallets.len(), 1);
        assert_eq!(export.transactions.len(), 1);
        assert_eq!(export.budgets.len(), 1);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_metadata_date_range() {
        let (_temp_dir, storage) = create_test_storage();

        let early = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                late,
                Money::from_cents(1000),
                TransactionKind::Expense,
                "food",
            ))
            .unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                early,
                Money::from_cents(2000),
                TransactionKind::Expense,
                "food",
            ))
            .unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(
            export.metadata.earliest_transaction.as_deref(),
            Some("2026-01-05")
        );
        assert_eq!(
            export.metadata.latest_transaction.as_deref(),
            Some("2026-03-20")
        );
    }

    #[test]
    fn test_empty_export_metadata() {
        let (_temp_dir, storage) = create_test_storage();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.metadata.transaction_count, 0);
        assert!(export.metadata.earliest_transaction.is_none());
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();

        let wallet = Wallet::new("Cash");
        storage.wallets.upsert(wallet).unwrap();
        storage.wallets.save().unwrap();

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();

        let json_string = String::from_utf8(json_output).unwrap();
        let imported = import_from_json(&json_string).unwrap();

        assert_eq!(imported.wallets.len(), 1);
        assert_eq!(imported.wallets[0].name, "Cash");
    }

    #[test]
    fn test_validate_rejects_dangling_wallet_reference() {
        let (_temp_dir, storage) = create_test_storage();

        let mut txn = Transaction::new(
            Utc::now() - Duration::days(1),
            Money::from_cents(1000),
            TransactionKind::Expense,
            "food",
        );
        txn.wallet_id = Some(WalletId::new());
        storage.transactions.upsert(txn).unwrap();

        let export = FullExport::from_storage(&storage).unwrap();
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_import_rejects_bad_schema_version() {
        let (_temp_dir, storage) = create_test_storage();

        let mut export = FullExport::from_storage(&storage).unwrap();
        export.schema_version = "99.0.0".to_string();

        let json = serde_json::to_string(&export).unwrap();
        let result = import_from_json(&json);

        assert!(result.is_err());
    }
}
