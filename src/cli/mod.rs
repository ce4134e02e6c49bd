//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod activity;
pub mod budget;
pub mod category;
pub mod export;
pub mod report;
pub mod transaction;
pub mod wallet;

pub use activity::handle_activity_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use category::handle_categories_command;
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use wallet::{handle_wallet_command, WalletCommands};
