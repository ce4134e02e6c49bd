//! Summary Statistics
//!
//! Flat totals over a transaction window: income, expense, balance, average
//! daily spending, and the most expensive category.

use crate::error::TrakrResult;
use crate::models::{CategoryCatalog, Money, Transaction};
use crate::reports::escape_csv;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// A category name paired with an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAmount {
    /// Display name resolved through the catalog, or `"None"`
    pub name: String,
    /// Summed expense amount
    pub amount: Money,
}

impl CategoryAmount {
    /// The placeholder used when there are no expense transactions
    pub fn none() -> Self {
        Self {
            name: "None".to_string(),
            amount: Money::zero(),
        }
    }
}

/// Summary statistics for a transaction window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts
    pub total_expense: Money,
    /// Income minus expense, may be negative
    pub balance: Money,
    /// Expense total divided by the number of distinct days with expenses
    pub average_daily_spending: Money,
    /// Category with the largest expense sum
    pub most_expensive_category: CategoryAmount,
}

impl Statistics {
    /// Compute statistics for a transaction window
    ///
    /// All degenerate inputs produce defaults: an empty window yields zeros
    /// and a `"None"` top category, and the daily average guards its divisor
    /// instead of failing. Ties for the top category keep the first category
    /// to reach the maximum, in first-seen order.
    pub fn generate(transactions: &[Transaction], catalog: &CategoryCatalog) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut expense_days: HashSet<NaiveDate> = HashSet::new();
        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Money> = HashMap::new();

        for txn in transactions {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expense += txn.amount;
                expense_days.insert(txn.day());
                if !totals.contains_key(&txn.category) {
                    order.push(txn.category.clone());
                }
                *totals.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
            }
        }

        let average_daily_spending = total_expense.div_rounded(expense_days.len() as i64);

        // Strictly-greater comparison: the first category to reach the
        // maximum wins ties
        let mut most_expensive_category = CategoryAmount::none();
        for key in &order {
            let amount = totals[key];
            if amount > most_expensive_category.amount {
                most_expensive_category = CategoryAmount {
                    name: catalog.resolve_name(key),
                    amount,
                };
            }
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            average_daily_spending,
            most_expensive_category,
        }
    }

    /// Format the statistics for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Total Income",
            self.total_income.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Total Expense",
            self.total_expense.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Balance",
            self.balance.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Avg Daily Spending",
            self.average_daily_spending.to_string()
        ));
        output.push_str(&format!(
            "{:<24} {} ({})\n",
            "Top Category", self.most_expensive_category.name, self.most_expensive_category.amount
        ));

        output
    }

    /// Export the statistics to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrakrResult<()> {
        writeln!(writer, "Metric,Value")
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        let rows = [
            ("Total Income", self.total_income),
            ("Total Expense", self.total_expense),
            ("Balance", self.balance),
            ("Average Daily Spending", self.average_daily_spending),
        ];
        for (label, value) in rows {
            writeln!(writer, "{},{:.2}", label, value.cents() as f64 / 100.0)
                .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "Most Expensive Category,{}",
            escape_csv(&self.most_expensive_category.name)
        )
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        writeln!(
            writer,
            "Most Expensive Category Amount,{:.2}",
            self.most_expensive_category.amount.cents() as f64 / 100.0
        )
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn expense_on(date: DateTime<Utc>, cents: i64, category: &str) -> Transaction {
        Transaction::expense(date, Money::from_cents(cents), category)
    }

    #[test]
    fn test_empty_window_yields_defaults() {
        let stats = Statistics::generate(&[], &CategoryCatalog::default());

        assert!(stats.total_income.is_zero());
        assert!(stats.total_expense.is_zero());
        assert!(stats.balance.is_zero());
        assert!(stats.average_daily_spending.is_zero());
        assert_eq!(stats.most_expensive_category, CategoryAmount::none());
        assert_eq!(stats.most_expensive_category.name, "None");
    }

    #[test]
    fn test_income_expense_and_balance() {
        let day = at(2026, 3, 10);
        let txns = vec![
            Transaction::income(day, Money::from_cents(10_000), "salary"),
            expense_on(day, 4000, "food"),
            expense_on(day, 1000, "food"),
        ];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        assert_eq!(stats.total_income, Money::from_cents(10_000));
        assert_eq!(stats.total_expense, Money::from_cents(5000));
        assert_eq!(stats.balance, Money::from_cents(5000));
        assert_eq!(stats.most_expensive_category.name, "Food");
        assert_eq!(
            stats.most_expensive_category.amount,
            Money::from_cents(5000)
        );
    }

    #[test]
    fn test_balance_may_go_negative() {
        let txns = vec![expense_on(at(2026, 3, 10), 7500, "housing")];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        assert_eq!(stats.balance, Money::from_cents(-7500));
        assert!(stats.balance.is_negative());
    }

    #[test]
    fn test_average_counts_distinct_expense_days_only() {
        let txns = vec![
            expense_on(at(2026, 3, 10), 3000, "food"),
            expense_on(at(2026, 3, 10), 1000, "food"),
            expense_on(at(2026, 3, 12), 2000, "transport"),
            // Income on its own day must not add a day to the divisor
            Transaction::income(at(2026, 3, 11), Money::from_cents(50_000), "salary"),
        ];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        // 6000 cents over 2 distinct expense days
        assert_eq!(stats.average_daily_spending, Money::from_cents(3000));
    }

    #[test]
    fn test_average_rounds_to_whole_cents() {
        let txns = vec![
            expense_on(at(2026, 3, 10), 50, "food"),
            expense_on(at(2026, 3, 11), 25, "food"),
            expense_on(at(2026, 3, 12), 25, "food"),
        ];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        // 100 / 3 = 33.3, rounds down
        assert_eq!(stats.average_daily_spending, Money::from_cents(33));
    }

    #[test]
    fn test_average_is_zero_without_expense_days() {
        let txns = vec![Transaction::income(
            at(2026, 3, 10),
            Money::from_cents(10_000),
            "salary",
        )];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());
        assert!(stats.average_daily_spending.is_zero());
    }

    #[test]
    fn test_top_category_tie_keeps_first_seen() {
        let day = at(2026, 3, 10);
        let txns = vec![
            expense_on(day, 2000, "transport"),
            expense_on(day, 2000, "food"),
        ];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        assert_eq!(stats.most_expensive_category.name, "Transport");
    }

    #[test]
    fn test_top_category_resolves_unknown_key_to_raw() {
        let txns = vec![expense_on(at(2026, 3, 10), 900, "llama_rides")];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        assert_eq!(stats.most_expensive_category.name, "llama_rides");
    }

    #[test]
    fn test_csv_export_lists_metrics() {
        let txns = vec![expense_on(at(2026, 3, 10), 5000, "food")];
        let stats = Statistics::generate(&txns, &CategoryCatalog::default());

        let mut buf = Vec::new();
        stats.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Metric,Value\n"));
        assert!(csv.contains("Total Expense,50.00"));
        assert!(csv.contains("Most Expensive Category,Food"));
    }
}
