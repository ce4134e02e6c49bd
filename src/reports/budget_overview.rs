//! Budget Overview Report
//!
//! Budgeted versus actual spending per category for the period window
//! containing a reference date.

use crate::error::TrakrResult;
use crate::models::{Budget, BudgetPeriod, CategoryCatalog, Money, Transaction};
use crate::reports::escape_csv;
use chrono::NaiveDate;
use std::io::Write;

/// One budget's standing for the current window
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    /// Category display name resolved through the catalog
    pub category: String,
    /// Budget period
    pub period: BudgetPeriod,
    /// Amount budgeted for the window
    pub budgeted: Money,
    /// Expense activity inside the window
    pub spent: Money,
    /// Budgeted minus spent, may be negative
    pub remaining: Money,
    /// Spent as a percentage of budgeted, uncapped
    pub percent_used: f64,
}

impl BudgetRow {
    /// Check if this budget is overspent
    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// One row per budget, in the input budget order
    pub rows: Vec<BudgetRow>,
    /// Reference date anchoring each budget's window
    pub as_of: NaiveDate,
}

impl BudgetOverviewReport {
    /// Build the overview from budgets and a transaction history
    ///
    /// For each budget, `spent` sums the expense transactions in the
    /// budget's category whose day falls inside the period window
    /// containing `as_of`.
    pub fn generate(
        budgets: &[Budget],
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        as_of: NaiveDate,
    ) -> Self {
        let rows = budgets
            .iter()
            .map(|budget| {
                let spent: Money = transactions
                    .iter()
                    .filter(|t| {
                        t.is_expense()
                            && t.category.eq_ignore_ascii_case(&budget.category)
                            && budget.period.window_contains(as_of, t.day())
                    })
                    .map(|t| t.amount)
                    .sum();

                let percent_used = if budget.amount.is_zero() {
                    0.0
                } else {
                    (spent.cents() as f64 / budget.amount.cents() as f64) * 100.0
                };

                BudgetRow {
                    category: catalog.resolve_name(&budget.category),
                    period: budget.period,
                    budgeted: budget.amount,
                    spent,
                    remaining: budget.amount - spent,
                    percent_used,
                }
            })
            .collect();

        Self { rows, as_of }
    }

    /// Get count of overspent budgets
    pub fn overspent_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_overspent()).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Overview (as of {})\n", self.as_of));
        output.push_str(&"=".repeat(76));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set. Add one with `trakr budget set`.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:<9} {:>12} {:>12} {:>12} {:>7}\n",
            "Category", "Period", "Budgeted", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(76));
        output.push('\n');

        for row in &self.rows {
            let remaining_display = if row.is_overspent() {
                format!("{} *", row.remaining)
            } else {
                row.remaining.to_string()
            };
            output.push_str(&format!(
                "{:<20} {:<9} {:>12} {:>12} {:>12} {:>6.1}%\n",
                row.category,
                row.period.to_string(),
                row.budgeted.to_string(),
                row.spent.to_string(),
                remaining_display,
                row.percent_used
            ));
        }

        output.push_str(&"-".repeat(76));
        output.push('\n');

        let total_budgeted: Money = self.rows.iter().map(|r| r.budgeted).sum();
        let total_spent: Money = self.rows.iter().map(|r| r.spent).sum();
        output.push_str(&format!(
            "{:<20} {:<9} {:>12} {:>12}\n",
            "TOTAL",
            "",
            total_budgeted.to_string(),
            total_spent.to_string()
        ));

        if self.overspent_count() > 0 {
            output.push_str("\n* overspent\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrakrResult<()> {
        writeln!(
            writer,
            "Category,Period,Budgeted,Spent,Remaining,Percent Used"
        )
        .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2},{:.2}",
                escape_csv(&row.category),
                row.period,
                row.budgeted.cents() as f64 / 100.0,
                row.spent.cents() as f64 / 100.0,
                row.remaining.cents() as f64 / 100.0,
                row.percent_used
            )
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
