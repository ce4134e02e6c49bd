//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, computed column widths, and totals rows.

pub mod category;
pub mod format;
pub mod transaction;
pub mod wallet;

pub use category::format_catalog;
pub use format::{
    double_separator, format_bar, format_percentage, format_with_currency, right_align, separator,
    truncate,
};
pub use transaction::{format_transaction_details, format_transaction_list};
pub use wallet::{format_wallet_details, format_wallet_list};
