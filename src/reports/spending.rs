//! Spending Report
//!
//! Expense totals grouped by category over a transaction window.

use crate::error::TrakrResult;
use crate::models::{CategoryCatalog, Money, Transaction};
use crate::reports::escape_csv;
use std::collections::HashMap;
use std::io::Write;

/// One category's share of spending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Display name resolved through the catalog
    pub name: String,
    /// Summed expense amount
    pub value: Money,
    /// Display color (hex)
    pub color: String,
}

/// Spending breakdown by category
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// One entry per category with expense activity, largest first
    pub entries: Vec<CategoryTotal>,
    /// Total expense across all entries
    pub total: Money,
}

impl SpendingReport {
    /// Build the report from a transaction window
    ///
    /// Income transactions are excluded: category totals represent spending
    /// only. Unknown category keys degrade to the raw key with the catalog's
    /// fallback color. Ties in the descending sort keep first-seen order.
    pub fn generate(transactions: &[Transaction], catalog: &CategoryCatalog) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Money> = HashMap::new();
        let mut total = Money::zero();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            if !totals.contains_key(&txn.category) {
                order.push(txn.category.clone());
            }
            *totals.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
            total += txn.amount;
        }

        let mut entries: Vec<CategoryTotal> = order
            .into_iter()
            .map(|key| {
                let resolved = catalog.resolve(&key);
                CategoryTotal {
                    name: resolved.name,
                    value: totals[&key],
                    color: resolved.color,
                }
            })
            .collect();

        // Stable sort: equal totals stay in first-seen order
        entries.sort_by(|a, b| b.value.cmp(&a.value));

        Self { entries, total }
    }

    /// Percentage of total spending for one entry
    pub fn share(&self, entry: &CategoryTotal) -> f64 {
        if self.total.is_zero() {
            0.0
        } else {
            (entry.value.cents() as f64 / self.total.cents() as f64) * 100.0
        }
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryTotal> {
        self.entries.iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No expense transactions in this window.\n");
            return output;
        }

        output.push_str(&format!("{:<30} {:>14} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<30} {:>14} {:>7.1}%\n",
                entry.name,
                entry.value.to_string(),
                self.share(entry)
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
        writeln!(writer, "Category,Amount,Percentage")
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                escape_csv(&entry.name),
                entry.value.cents() as f64 / 100.0,
                self.share(entry)
            )
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},100.00",
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn expense(cents: i64, category: &str) -> Transaction {
        Transaction::expense(
            Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
            Money::from_cents(cents),
            category,
        )
    }

    fn income(cents: i64) -> Transaction {
        Transaction::income(
            Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
            Money::from_cents(cents),
            "salary",
        )
    }

    #[test]
    fn test_groups_and_sums_by_category() {
        let txns = vec![
            expense(4000, "food"),
            expense(1000, "food"),
            expense(2500, "transport"),
        ];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].name, "Food");
        assert_eq!(report.entries[0].value, Money::from_cents(5000));
        assert_eq!(report.entries[1].name, "Transport");
        assert_eq!(report.entries[1].value, Money::from_cents(2500));
        assert_eq!(report.total, Money::from_cents(7500));
    }

    #[test]
    fn test_income_is_excluded() {
        let txns = vec![income(100_000), expense(4000, "food")];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.total, Money::from_cents(4000));
    }

    #[test]
    fn test_income_only_yields_empty() {
        let txns = vec![income(100_000), income(50_000)];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        assert!(report.entries.is_empty());
        assert!(report.total.is_zero());
    }

    #[test]
    fn test_unknown_category_falls_back_to_raw_key() {
        let txns = vec![expense(1200, "vetbills")];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        assert_eq!(report.entries[0].name, "vetbills");
        assert_eq!(report.entries[0].color, crate::models::FALLBACK_COLOR);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let txns = vec![
            expense(1000, "transport"),
            expense(1000, "food"),
            expense(1000, "shopping"),
        ];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food", "Shopping"]);
    }

    #[test]
    fn test_entry_sum_equals_total() {
        let txns = vec![
            expense(333, "food"),
            expense(667, "transport"),
            expense(1, "health"),
            income(5000),
        ];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        let sum: Money = report.entries.iter().map(|e| e.value).sum();
        assert_eq!(sum, report.total);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let txns = vec![expense(4000, "food"), expense(1000, "transport")];
        let catalog = CategoryCatalog::default();

        let first = SpendingReport::generate(&txns, &catalog);
        let second = SpendingReport::generate(&txns, &catalog);

        assert_eq!(first.entries, second.entries);
        assert_eq!(first.total, second.total);
    }

    #[test]
    fn test_top_categories_limits_entries() {
        let txns = vec![
            expense(5000, "food"),
            expense(4000, "transport"),
            expense(3000, "shopping"),
            expense(2000, "health"),
        ];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        let top = report.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Food");
        assert_eq!(top[1].name, "Transport");
    }

    #[test]
    fn test_csv_export_escapes_and_totals() {
        let txns = vec![expense(1050, "coffee, snacks")];
        let report = SpendingReport::generate(&txns, &CategoryCatalog::default());

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Category,Amount,Percentage\n"));
        assert!(csv.contains("\"coffee, snacks\",10.50,100.00"));
        assert!(csv.ends_with("TOTAL,10.50,100.00\n"));
    }

    #[test]
    fn test_terminal_format_empty_window() {
        let report = SpendingReport::generate(&[], &CategoryCatalog::default());
        let out = report.format_terminal();
        assert!(out.contains("No expense transactions"));
    }
}
