//! Wallet model
//!
//! Represents the money containers transactions live in (cash, bank account,
//! savings...), each with its own currency. Exactly one wallet is the default
//! at any time; current balances are computed from transactions, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WalletId;
use super::money::Money;

/// Default currency code for new wallets
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default display color for new wallets
pub const DEFAULT_WALLET_COLOR: &str = "#4299E1";

/// A wallet holding transactions in a single currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: WalletId,

    /// Wallet name (e.g. "Cash", "Main Checking")
    pub name: String,

    /// ISO 4217 currency code
    pub currency: String,

    /// Opening balance when the wallet was created
    pub starting_balance: Money,

    /// Display color (hex)
    pub color: String,

    /// Whether this is the default wallet for new transactions
    #[serde(default)]
    pub is_default: bool,

    /// When the wallet was created
    pub created_at: DateTime<Utc>,

    /// When the wallet was last modified
    pub updated_at: DateTime<Utc>,
}

impl Wallet {
    /// Create a new wallet with default currency and color
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: WalletId::new(),
            name: name.into(),
            currency: DEFAULT_CURRENCY.to_string(),
            starting_balance: Money::zero(),
            color: DEFAULT_WALLET_COLOR.to_string(),
            is_default: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new wallet with an explicit currency and starting balance
    pub fn with_details(
        name: impl Into<String>,
        currency: impl Into<String>,
        starting_balance: Money,
    ) -> Self {
        let mut wallet = Self::new(name);
        wallet.currency = currency.into();
        wallet.starting_balance = starting_balance;
        wallet
    }

    /// Mark this wallet as the default
    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
        self.updated_at = Utc::now();
    }

    /// Rename the wallet
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the wallet
    pub fn validate(&self) -> Result<(), WalletValidationError> {
        if self.name.trim().is_empty() {
            return Err(WalletValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(WalletValidationError::NameTooLong(self.name.len()));
        }

        // ISO 4217 codes are three uppercase letters
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WalletValidationError::InvalidCurrency(
                self.currency.clone(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.currency)
    }
}

/// Validation errors for wallets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidCurrency(String),
}

impl fmt::Display for WalletValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Wallet name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Wallet name too long ({} chars, max 100)", len)
            }
            Self::InvalidCurrency(code) => {
                write!(f, "Invalid currency code '{}' (expected e.g. USD)", code)
            }
        }
    }
}

impl std::error::Error for WalletValidationError {}
