//! Payment Method Report
//!
//! Expense totals grouped by payment method over a transaction window.

use crate::error::TrakrResult;
use crate::models::{Money, Transaction};
use crate::reports::escape_csv;
use std::collections::HashMap;
use std::io::Write;

/// One payment method's share of spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodTotal {
    /// Raw payment method label as recorded on the transactions
    pub name: String,
    /// Summed expense amount
    pub amount: Money,
}

/// Spending breakdown by payment method
#[derive(Debug, Clone)]
pub struct PaymentMethodReport {
    /// One entry per method with expense activity, largest first
    pub entries: Vec<PaymentMethodTotal>,
    /// Total expense across all entries
    pub total: Money,
}

impl PaymentMethodReport {
    /// Build the report from a transaction window
    ///
    /// Income transactions are excluded. Methods are kept as raw strings
    /// (no catalog); ties in the descending sort keep first-seen order.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Money> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            if !totals.contains_key(&txn.payment_method) {
                order.push(txn.payment_method.clone());
            }
            *totals
                .entry(txn.payment_method.clone())
                .or_insert(Money::zero()) += txn.amount;
            total += txn.amount;
        }

        let mut entries: Vec<PaymentMethodTotal> = order
            .into_iter()
            .map(|name| {
                let amount = totals[&name];
                PaymentMethodTotal { name, amount }
            })
            .collect();

        entries.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self { entries, total }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending by Payment Method\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No expense transactions in this window.\n");
            return output;
        }

        output.push_str(&format!("{:<30} {:>14}\n", "Method", "Amount"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &self.entries {
            let name = if entry.name.is_empty() {
                "(none)"
            } else {
                &entry.name
            };
            output.push_str(&format!(
                "{:<30} {:>14}\n",
                name,
                entry.amount.to_string()
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14}\n",
            "TOTAL",
            self.total.to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrakrResult<()> {
        writeln!(writer, "Payment Method,Amount")
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{:.2}",
                escape_csv(&entry.name),
                entry.amount.cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2}",
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        Ok(())
    }
}
