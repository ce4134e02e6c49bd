//! Transaction display formatting
//!
//! Formats transactions for terminal output in list and detail views.

use crate::models::{CategoryCatalog, Money, Transaction};

use super::format::truncate;

/// Format a list of transactions as a table
///
/// Shows the short ID users pass to `txn show` / `txn edit`, and ends with
/// a net total over the listed rows.
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let category_width = transactions
        .iter()
        .map(|t| t.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<7}  {:<category_width$}  {:>12}  {}\n",
        "ID",
        "Date",
        "Kind",
        "Category",
        "Amount",
        "Description",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<7}  {:-<category_width$}  {:->12}  {:-<24}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    let mut net = Money::zero();
    for txn in transactions {
        net += txn.signed_amount();

        output.push_str(&format!(
            "{:<12}  {}  {:<7}  {:<category_width$}  {:>12}  {}\n",
            txn.id.to_string(),
            txn.day(),
            txn.kind.to_string(),
            txn.category,
            txn.signed_amount().to_string(),
            truncate(&txn.description, 24),
            category_width = category_width,
        ));
    }

    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<7}  {:-<category_width$}  {:->12}  {:-<24}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{} transaction(s), net {}\n",
        transactions.len(),
        net
    ));

    output
}

/// Format a single transaction's details
pub fn format_transaction_details(txn: &Transaction, catalog: &CategoryCatalog) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Date:        {}\n", txn.day()));
    output.push_str(&format!("  Kind:        {}\n", txn.kind));
    output.push_str(&format!("  Amount:      {}\n", txn.amount));
    output.push_str(&format!(
        "  Category:    {} ({})\n",
        catalog.resolve_name(&txn.category),
        txn.category
    ));

    if !txn.payment_method.is_empty() {
        output.push_str(&format!("  Method:      {}\n", txn.payment_method));
    }

    if !txn.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", txn.description));
    }

    if !txn.tags.is_empty() {
        output.push_str(&format!("  Tags:        {}\n", txn.tags.join(", ")));
    }

    if let Some(wallet_id) = txn.wallet_id {
        output.push_str(&format!("  Wallet:      {}\n", wallet_id));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        txn.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
