//! Transaction model
//!
//! Represents income and expense records. Amounts are always non-negative;
//! direction is carried by [`TransactionKind`], never by a sign.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TransactionId, WalletId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse a kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" | "i" => Some(Self::Income),
            "expense" | "out" | "e" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Suggested payment-method labels offered by the CLI
///
/// The field itself stays free text; these are only the common values.
pub const SUGGESTED_PAYMENT_METHODS: &[&str] = &[
    "cash",
    "credit_card",
    "debit_card",
    "bank_transfer",
    "mobile_payment",
];

/// A single income or expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction occurred
    pub date: DateTime<Utc>,

    /// Amount as a non-negative quantity; see `kind` for direction
    pub amount: Money,

    /// Direction of the transaction
    pub kind: TransactionKind,

    /// Category key referencing the category catalog (e.g. "food")
    pub category: String,

    /// How the transaction was paid (free text)
    #[serde(default)]
    pub payment_method: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Optional tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// The wallet this transaction belongs to, if any
    pub wallet_id: Option<WalletId>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: DateTime<Utc>,
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            date,
            amount,
            kind,
            category: category.into(),
            payment_method: String::new(),
            description: String::new(),
            tags: Vec::new(),
            wallet_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an income transaction
    pub fn income(date: DateTime<Utc>, amount: Money, category: impl Into<String>) -> Self {
        Self::new(date, amount, TransactionKind::Income, category)
    }

    /// Create an expense transaction
    pub fn expense(date: DateTime<Utc>, amount: Money, category: impl Into<String>) -> Self {
        Self::new(date, amount, TransactionKind::Expense, category)
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with direction applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// The calendar day this transaction falls on (UTC)
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Set the payment method
    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.payment_method = method.into();
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::AmountNotPositive(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    AmountNotPositive(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
