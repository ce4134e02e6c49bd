//! Transaction service
//!
//! Business logic for recording income and expenses: validation,
//! normalization, filtered listing, and activity logging.

use chrono::{DateTime, Utc};

use crate::activity::EntityKind;
use crate::error::{TrakrError, TrakrResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind, WalletId};
use crate::reports::TimeRange;
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Filter by category key
    pub category: Option<String>,
    /// Filter by wallet
    pub wallet_id: Option<WalletId>,
    /// Keep only transactions inside this rolling window
    pub range: Option<TimeRange>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category key
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by wallet
    pub fn wallet(mut self, wallet_id: WalletId) -> Self {
        self.wallet_id = Some(wallet_id);
        self
    }

    /// Filter by rolling time window
    pub fn range(mut self, range: TimeRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub kind: TransactionKind,
    pub category: String,
    pub payment_method: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub wallet_id: Option<WalletId>,
}

/// Field updates for an existing transaction
///
/// `None` leaves a field unchanged. `wallet_id` follows the outer/inner
/// option convention: `Some(None)` detaches the wallet, `Some(Some(id))`
/// attaches one.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub date: Option<DateTime<Utc>>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub payment_method: Option<String>,
    pub description: Option<String>,
    pub wallet_id: Option<Option<WalletId>>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> TrakrResult<Transaction> {
        if !input.amount.is_positive() {
            return Err(TrakrError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        if input.date > Utc::now() {
            return Err(TrakrError::Validation(
                "Date cannot be in the future".into(),
            ));
        }

        let category = normalize_category(&input.category);
        if category.is_empty() {
            return Err(TrakrError::Validation("Category cannot be empty".into()));
        }

        // Verify wallet exists if referenced
        if let Some(wallet_id) = input.wallet_id {
            if !self.storage.wallets.exists(wallet_id)? {
                return Err(TrakrError::wallet_not_found(wallet_id.to_string()));
            }
        }

        let mut txn = Transaction::new(input.date, input.amount, input.kind, category);
        if let Some(method) = input.payment_method {
            txn.payment_method = method.trim().to_string();
        }
        if let Some(description) = input.description {
            txn.description = description;
        }
        txn.tags = input.tags;
        txn.wallet_id = input.wallet_id;

        txn.validate()
            .map_err(|e| TrakrError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityKind::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.day(), txn.category)),
            &txn,
        )?;

        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> TrakrResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by ID string
    ///
    /// Accepts the full UUID or the short `txn-xxxxxxxx` display form. A
    /// short form matching more than one transaction is rejected.
    pub fn find(&self, identifier: &str) -> TrakrResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.storage.transactions.get(id);
        }

        let fragment = identifier.strip_prefix("txn-").unwrap_or(identifier);
        let matches: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.as_uuid().to_string().starts_with(fragment))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            _ => Err(TrakrError::Validation(format!(
                "Transaction id '{}' is ambiguous, use the full id",
                identifier
            ))),
        }
    }

    /// List transactions with optional filtering
    ///
    /// Results keep the repository's newest-first order.
    pub fn list(&self, filter: TransactionFilter) -> TrakrResult<Vec<Transaction>> {
        let mut transactions = if let Some(wallet_id) = filter.wallet_id {
            self.storage.transactions.get_by_wallet(wallet_id)?
        } else if let Some(category) = &filter.category {
            self.storage
                .transactions
                .get_by_category(&normalize_category(category))?
        } else if let Some(kind) = filter.kind {
            self.storage.transactions.get_by_kind(kind)?
        } else {
            self.storage.transactions.get_all()?
        };

        // Apply additional filters
        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(category) = &filter.category {
            let category = normalize_category(category);
            transactions.retain(|t| t.category.eq_ignore_ascii_case(&category));
        }
        if let Some(range) = filter.range {
            let cutoff = range.cutoff();
            transactions.retain(|t| t.date >= cutoff);
        }

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update a transaction
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> TrakrResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TrakrError::transaction_not_found(id.to_string()))?;

        let before = txn.clone();

        if let Some(date) = input.date {
            if date > Utc::now() {
                return Err(TrakrError::Validation(
                    "Date cannot be in the future".into(),
                ));
            }
            txn.date = date;
        }

        if let Some(amount) = input.amount {
            if !amount.is_positive() {
                return Err(TrakrError::Validation(
                    "Amount must be greater than zero".into(),
                ));
            }
            txn.amount = amount;
        }

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }

        if let Some(category) = input.category {
            let category = normalize_category(&category);
            if category.is_empty() {
                return Err(TrakrError::Validation("Category cannot be empty".into()));
            }
            txn.category = category;
        }

        if let Some(method) = input.payment_method {
            txn.payment_method = method.trim().to_string();
        }

        if let Some(description) = input.description {
            txn.description = description;
        }

        if let Some(wallet_id) = input.wallet_id {
            if let Some(new_id) = wallet_id {
                if !self.storage.wallets.exists(new_id)? {
                    return Err(TrakrError::wallet_not_found(new_id.to_string()));
                }
            }
            txn.wallet_id = wallet_id;
        }

        txn.updated_at = Utc::now();

        txn.validate()
            .map_err(|e| TrakrError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        // Build diff summary
        let mut changes = Vec::new();
        if before.date != txn.date {
            changes.push(format!("date: {} -> {}", before.day(), txn.day()));
        }
        if before.amount != txn.amount {
            changes.push(format!("amount: {} -> {}", before.amount, txn.amount));
        }
        if before.kind != txn.kind {
            changes.push(format!("kind: {} -> {}", before.kind, txn.kind));
        }
        if before.category != txn.category {
            changes.push(format!(
                "category: {} -> {}",
                before.category, txn.category
            ));
        }
        if before.payment_method != txn.payment_method {
            changes.push(format!(
                "method: '{}' -> '{}'",
                before.payment_method, txn.payment_method
            ));
        }
        if before.description != txn.description {
            changes.push("description changed".to_string());
        }
        if before.wallet_id != txn.wallet_id {
            changes.push("wallet changed".to_string());
        }

        let diff = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        self.storage.log_update(
            EntityKind::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.day(), txn.category)),
            &before,
            &txn,
            diff,
        )?;

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> TrakrResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| TrakrError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityKind::Transaction,
            id.to_string(),
            Some(format!("{} {}", txn.day(), txn.category)),
            &txn,
        )?;

        Ok(txn)
    }

    /// Count transactions
    pub fn count(&self) -> TrakrResult<usize> {
        self.storage.transactions.count()
    }
}

/// Trim and lowercase a category key
fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}
