//! Wallet service
//!
//! Business logic for wallet management: creation with a unique name,
//! default-wallet handling, computed balances, and deletion guards.

use crate::activity::{ActivityEntry, EntityKind};
use crate::error::{TrakrError, TrakrResult};
use crate::models::{Money, Wallet, WalletId};
use crate::storage::Storage;

/// Service for wallet management
pub struct WalletService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new wallet
#[derive(Debug, Clone)]
pub struct CreateWalletInput {
    pub name: String,
    pub currency: Option<String>,
    pub starting_balance: Option<Money>,
    pub color: Option<String>,
}

/// A wallet together with its computed balance
#[derive(Debug, Clone)]
pub struct WalletSummary {
    pub wallet: Wallet,
    pub balance: Money,
    pub transaction_count: usize,
}

impl<'a> WalletService<'a> {
    /// Create a new wallet service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new wallet
    ///
    /// The first wallet ever created becomes the default automatically.
    pub fn create(&self, input: CreateWalletInput) -> TrakrResult<Wallet> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(TrakrError::Validation("Wallet name cannot be empty".into()));
        }

        if self.storage.wallets.name_exists(&name, None)? {
            return Err(TrakrError::Duplicate {
                entity_type: "Wallet",
                identifier: name,
            });
        }

        let mut wallet = Wallet::new(name);
        if let Some(currency) = input.currency {
            wallet.currency = currency.trim().to_uppercase();
        }
        if let Some(balance) = input.starting_balance {
            wallet.starting_balance = balance;
        }
        if let Some(color) = input.color {
            wallet.color = color;
        }
        if self.storage.wallets.count()? == 0 {
            wallet.is_default = true;
        }

        wallet
            .validate()
            .map_err(|e| TrakrError::Validation(e.to_string()))?;

        self.storage.wallets.upsert(wallet.clone())?;
        self.storage.wallets.save()?;

        self.storage.log_create(
            EntityKind::Wallet,
            wallet.id.to_string(),
            Some(wallet.name.clone()),
            &wallet,
        )?;

        Ok(wallet)
    }

    /// Get a wallet by ID
    pub fn get(&self, id: WalletId) -> TrakrResult<Option<Wallet>> {
        self.storage.wallets.get(id)
    }

    /// Find a wallet by name or ID string
    ///
    /// Names are matched case-insensitively and take precedence over IDs.
    /// Accepts the full UUID or the short `wal-xxxxxxxx` display form.
    pub fn find(&self, identifier: &str) -> TrakrResult<Option<Wallet>> {
        if let Some(wallet) = self.storage.wallets.get_by_name(identifier.trim())? {
            return Ok(Some(wallet));
        }

        if let Ok(id) = identifier.parse::<WalletId>() {
            return self.storage.wallets.get(id);
        }

        let fragment = identifier.strip_prefix("wal-").unwrap_or(identifier);
        let matches: Vec<Wallet> = self
            .storage
            .wallets
            .get_all()?
            .into_iter()
            .filter(|w| w.id.as_uuid().to_string().starts_with(fragment))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            _ => Err(TrakrError::Validation(format!(
                "Wallet id '{}' is ambiguous, use the full id",
                identifier
            ))),
        }
    }

    /// List all wallets, default first then by name
    pub fn list(&self) -> TrakrResult<Vec<Wallet>> {
        self.storage.wallets.get_all()
    }

    /// Compute the current balance of a wallet
    ///
    /// Balance = starting balance + income - expenses over the wallet's
    /// transactions.
    pub fn balance(&self, wallet_id: WalletId) -> TrakrResult<Money> {
        Ok(self.summary(wallet_id)?.balance)
    }

    /// Summarize a single wallet with its computed balance
    pub fn summary(&self, wallet_id: WalletId) -> TrakrResult<WalletSummary> {
        let wallet = self
            .storage
            .wallets
            .get(wallet_id)?
            .ok_or_else(|| TrakrError::wallet_not_found(wallet_id.to_string()))?;

        self.summarize(&wallet)
    }

    /// List all wallets with their computed balances
    pub fn list_with_balances(&self) -> TrakrResult<Vec<WalletSummary>> {
        let wallets = self.storage.wallets.get_all()?;
        let mut summaries = Vec::with_capacity(wallets.len());

        for wallet in wallets {
            summaries.push(self.summarize(&wallet)?);
        }

        Ok(summaries)
    }

    fn summarize(&self, wallet: &Wallet) -> TrakrResult<WalletSummary> {
        let transactions = self.storage.transactions.get_by_wallet(wallet.id)?;
        let mut balance = wallet.starting_balance;
        for txn in &transactions {
            balance = balance + txn.signed_amount();
        }

        Ok(WalletSummary {
            wallet: wallet.clone(),
            balance,
            transaction_count: transactions.len(),
        })
    }

    /// Rename a wallet
    pub fn rename(&self, id: WalletId, new_name: &str) -> TrakrResult<Wallet> {
        let mut wallet = self
            .storage
            .wallets
            .get(id)?
            .ok_or_else(|| TrakrError::wallet_not_found(id.to_string()))?;

        let new_name = new_name.trim().to_string();
        if new_name.is_empty() {
            return Err(TrakrError::Validation("Wallet name cannot be empty".into()));
        }

        if self.storage.wallets.name_exists(&new_name, Some(id))? {
            return Err(TrakrError::Duplicate {
                entity_type: "Wallet",
                identifier: new_name,
            });
        }

        let before = wallet.clone();
        wallet.rename(new_name);

        wallet
            .validate()
            .map_err(|e| TrakrError::Validation(e.to_string()))?;

        self.storage.wallets.upsert(wallet.clone())?;
        self.storage.wallets.save()?;

        self.storage.log_update(
            EntityKind::Wallet,
            wallet.id.to_string(),
            Some(wallet.name.clone()),
            &before,
            &wallet,
            Some(format!("name: {} -> {}", before.name, wallet.name)),
        )?;

        Ok(wallet)
    }

    /// Make a wallet the default for new transactions
    ///
    /// Clears the previous default in the same save so exactly one default
    /// exists afterwards.
    pub fn set_default(&self, id: WalletId) -> TrakrResult<Wallet> {
        let mut wallet = self
            .storage
            .wallets
            .get(id)?
            .ok_or_else(|| TrakrError::wallet_not_found(id.to_string()))?;

        if wallet.is_default {
            return Ok(wallet);
        }

        let mut entries = Vec::new();

        if let Some(mut previous) = self.storage.wallets.get_default()? {
            let before = previous.clone();
            previous.set_default(false);
            self.storage.wallets.upsert(previous.clone())?;
            entries.push(ActivityEntry::update(
                EntityKind::Wallet,
                previous.id.to_string(),
                Some(previous.name.clone()),
                &before,
                &previous,
                Some("default: true -> false".to_string()),
            ));
        }

        let before = wallet.clone();
        wallet.set_default(true);
        self.storage.wallets.upsert(wallet.clone())?;
        entries.push(ActivityEntry::update(
            EntityKind::Wallet,
            wallet.id.to_string(),
            Some(wallet.name.clone()),
            &before,
            &wallet,
            Some("default: false -> true".to_string()),
        ));

        self.storage.wallets.save()?;
        self.storage.activity().log_batch(&entries)?;

        Ok(wallet)
    }

    /// Delete a wallet
    ///
    /// Refused for the default wallet and for any wallet that still has
    /// transactions attached.
    pub fn delete(&self, id: WalletId) -> TrakrResult<Wallet> {
        let wallet = self
            .storage
            .wallets
            .get(id)?
            .ok_or_else(|| TrakrError::wallet_not_found(id.to_string()))?;

        if wallet.is_default {
            return Err(TrakrError::Validation(
                "Cannot delete the default wallet; set another default first".into(),
            ));
        }

        if self.storage.transactions.wallet_has_transactions(id)? {
            return Err(TrakrError::Validation(format!(
                "Wallet '{}' still has transactions; move or delete them first",
                wallet.name
            )));
        }

        self.storage.wallets.delete(id)?;
        self.storage.wallets.save()?;

        self.storage.log_delete(
            EntityKind::Wallet,
            id.to_string(),
            Some(wallet.name.clone()),
            &wallet,
        )?;

        Ok(wallet)
    }

    /// Count wallets
    pub fn count(&self) -> TrakrResult<usize> {
        self.storage.wallets.count()
    }
}
