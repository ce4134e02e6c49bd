//! Wallet display formatting
//!
//! Formats wallets for terminal output in table and detail views.

use crate::models::Money;
use crate::services::WalletSummary;

use super::format::format_with_currency;

/// Format a list of wallets with balances as a table
///
/// A TOTAL row is shown only when every wallet shares one currency;
/// mixed-currency balances cannot be summed.
pub fn format_wallet_list(summaries: &[WalletSummary]) -> String {
    if summaries.is_empty() {
        return "No wallets found. Create one with `trakr wallet create <name>`.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.wallet.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>14}  {:>6}  {}\n",
        "Name",
        "Currency",
        "Balance",
        "Txns",
        "Default",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:->14}  {:->6}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {:>14}  {:>6}  {}\n",
            summary.wallet.name,
            summary.wallet.currency,
            format_with_currency(summary.balance, &summary.wallet.currency),
            summary.transaction_count,
            if summary.wallet.is_default { "*" } else { "" },
            name_width = name_width,
        ));
    }

    let single_currency = summaries
        .windows(2)
        .all(|pair| pair[0].wallet.currency == pair[1].wallet.currency);

    if single_currency {
        let total: Money = summaries.iter().map(|s| s.balance).sum();
        let currency = &summaries[0].wallet.currency;

        output.push_str(&format!(
            "{:-<name_width$}  {:-<8}  {:->14}  {:->6}  {:-<7}\n",
            "",
            "",
            "",
            "",
            "",
            name_width = name_width,
        ));
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {:>14}\n",
            "TOTAL",
            "",
            format_with_currency(total, currency),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single wallet's details
pub fn format_wallet_details(summary: &WalletSummary) -> String {
    let wallet = &summary.wallet;

    let mut output = String::new();

    output.push_str(&format!("Wallet: {}\n", wallet.name));
    output.push_str(&format!("  ID:           {}\n", wallet.id));
    output.push_str(&format!("  Currency:     {}\n", wallet.currency));
    output.push_str(&format!(
        "  Default:      {}\n",
        if wallet.is_default { "Yes" } else { "No" }
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Starting Balance: {}\n",
        format_with_currency(wallet.starting_balance, &wallet.currency)
    ));
    output.push_str(&format!(
        "  Current Balance:  {}\n",
        format_with_currency(summary.balance, &wallet.currency)
    ));
    output.push_str(&format!(
        "  Transactions:     {}\n",
        summary.transaction_count
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        wallet.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        wallet.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wallet;

    fn test_summary(name: &str, currency: &str, balance: i64, is_default: bool) -> WalletSummary {
        let mut wallet = Wallet::with_details(name, currency, Money::zero());
        wallet.is_default = is_default;
        WalletSummary {
            wallet,
            balance: Money::from_cents(balance),
            transaction_count: 3,
        }
    }

    #[test]
    fn test_format_wallet_list() {
        let summaries = vec![
            test_summary("Cash", "USD", 10_000, true),
            test_summary("Savings", "USD", 500_000, false),
        ];

        let output = format_wallet_list(&summaries);
        assert!(output.contains("Cash"));
        assert!(output.contains("Savings"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$5100.00"));
    }

    #[test]
    fn test_default_marker() {
        let summaries = vec![test_summary("Cash", "USD", 0, true)];
        let output = format_wallet_list(&summaries);

        let row = output.lines().nth(2).unwrap();
        assert!(row.ends_with('*'));
    }

    #[test]
    fn test_mixed_currencies_skip_total() {
        let summaries = vec![
            test_summary("Cash", "USD", 10_000, true),
            test_summary("Euro Account", "EUR", 20_000, false),
        ];

        let output = format_wallet_list(&summaries);
        assert!(output.contains("EUR 200.00"));
        assert!(!output.contains("TOTAL"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_wallet_list(&[]);
        assert!(output.contains("No wallets found"));
    }

    #[test]
    fn test_format_wallet_details() {
        let summary = test_summary("Travel Fund", "GBP", 42_000, false);
        let output = format_wallet_details(&summary);

        assert!(output.contains("Travel Fund"));
        assert!(output.contains("GBP"));
        assert!(output.contains("GBP 420.00"));
        assert!(output.contains("Transactions:     3"));
    }
}
