//! Category CLI command
//!
//! The category catalog is fixed, so this is a single listing command
//! rather than a subcommand group.

use crate::display::format_catalog;
use crate::error::TrakrResult;
use crate::models::{CategoryCatalog, SUGGESTED_PAYMENT_METHODS};

/// Handle the categories command
pub fn handle_categories_command() -> TrakrResult<()> {
    let catalog = CategoryCatalog::default();
    print!("{}", format_catalog(&catalog));

    println!();
    println!("Suggested payment methods (txn add --method accepts any label):");
    for method in SUGGESTED_PAYMENT_METHODS {
        println!("  {}", method);
    }
    Ok(())
}
