//! Service layer for Trakr
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields, and activity logging.

pub mod budget;
pub mod transaction;
pub mod wallet;

pub use budget::BudgetService;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
pub use wallet::{CreateWalletInput, WalletService, WalletSummary};
