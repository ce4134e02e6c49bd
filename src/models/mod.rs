//! Core data models for Trakr
//!
//! This module contains all the data structures that represent the tracking
//! domain: transactions, the category catalog, wallets, and budgets.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod wallet;

pub use budget::{Budget, BudgetPeriod};
pub use category::{CategoryCatalog, CategoryDef, CategoryKind, ResolvedCategory, FALLBACK_COLOR};
pub use ids::{BudgetId, TransactionId, WalletId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, SUGGESTED_PAYMENT_METHODS};
pub use wallet::{Wallet, DEFAULT_CURRENCY, DEFAULT_WALLET_COLOR};
