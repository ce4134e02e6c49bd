//! Cash Flow Report
//!
//! Income and expense totals bucketed over time. Bucket size is chosen from
//! the span of the data: months for long histories, week-of-month for medium
//! ones, calendar days for short ones.

use crate::error::TrakrResult;
use crate::models::{Money, Transaction};
use crate::reports::escape_csv;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use std::collections::HashMap;
use std::io::Write;

/// Bucket size for the time series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// One bucket per calendar day
    Day,
    /// One bucket per week-of-month (days 1-7, 8-14, ...)
    Week,
    /// One bucket per calendar month
    Month,
}

impl Granularity {
    /// Choose a bucket size from the whole-day span of the data
    pub fn for_span_days(days: i64) -> Self {
        if days > 60 {
            Self::Month
        } else if days > 14 {
            Self::Week
        } else {
            Self::Day
        }
    }

    /// Adjective form for report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "daily",
            Self::Week => "weekly",
            Self::Month => "monthly",
        }
    }
}

/// One bucket of the series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeriesPoint {
    /// Display label: `2026-03-10`, `Mar W2`, or `Mar 2026`
    pub label: String,
    /// First day of the bucket, used as the sort key
    pub bucket: NaiveDate,
    /// Income total for the bucket
    pub income: Money,
    /// Expense total for the bucket
    pub expense: Money,
}

impl TimeSeriesPoint {
    /// Income minus expense for the bucket
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Time-bucketed income/expense series
#[derive(Debug, Clone)]
pub struct CashFlowReport {
    /// Bucket size the data span selected
    pub granularity: Granularity,
    /// Buckets in ascending date order
    pub points: Vec<TimeSeriesPoint>,
}

/// Bucket start and display label for one transaction day
fn bucket_for(day: NaiveDate, granularity: Granularity) -> (NaiveDate, String) {
    match granularity {
        Granularity::Day => (day, day.format("%Y-%m-%d").to_string()),
        Granularity::Week => {
            // Week-of-month: days 1-7 are W1, 8-14 are W2, and so on.
            // The label resets each month; the bucket date keeps ordering
            // well-defined across month boundaries.
            let week = (day.day() + 6) / 7;
            let start = day
                .with_day((week - 1) * 7 + 1)
                .unwrap_or(day);
            (start, format!("{} W{}", day.format("%b"), week))
        }
        Granularity::Month => {
            let start = day.with_day(1).unwrap_or(day);
            (start, day.format("%b %Y").to_string())
        }
    }
}

impl CashFlowReport {
    /// Build the report from a transaction window
    pub fn generate(transactions: &[Transaction]) -> Self {
        Self::generate_at(transactions, Utc::now())
    }

    /// Build the report with an explicit reference instant
    ///
    /// The span between the earliest transaction and `now` selects the
    /// bucket size. A transaction contributes its amount to exactly one of
    /// the bucket's income/expense fields.
    pub fn generate_at(transactions: &[Transaction], now: DateTime<Utc>) -> Self {
        let earliest = match transactions.iter().map(|t| t.date).min() {
            Some(date) => date,
            None => {
                return Self {
                    granularity: Granularity::Day,
                    points: Vec::new(),
                }
            }
        };

        let span_days = (now - earliest).num_days();
        let granularity = Granularity::for_span_days(span_days);

        let mut buckets: HashMap<NaiveDate, (String, Money, Money)> = HashMap::new();
        for txn in transactions {
            let (start, label) = bucket_for(txn.day(), granularity);
            let entry = buckets
                .entry(start)
                .or_insert_with(|| (label, Money::zero(), Money::zero()));
            if txn.is_income() {
                entry.1 += txn.amount;
            } else {
                entry.2 += txn.amount;
            }
        }

        let mut points: Vec<TimeSeriesPoint> = buckets
            .into_iter()
            .map(|(bucket, (label, income, expense))| TimeSeriesPoint {
                label,
                bucket,
                income,
                expense,
            })
            .collect();
        points.sort_by_key(|p| p.bucket);

        Self {
            granularity,
            points,
        }
    }

    /// Total income across all buckets
    pub fn total_income(&self) -> Money {
        self.points.iter().map(|p| p.income).sum()
    }

    /// Total expense across all buckets
    pub fn total_expense(&self) -> Money {
        self.points.iter().map(|p| p.expense).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Cash Flow ({})\n", self.granularity.label()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No transactions in this window.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<12} {:>14} {:>14} {:>14}\n",
            "Bucket", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>14} {:>14} {:>14}\n",
                point.label,
                point.income.to_string(),
                point.expense.to_string(),
                point.net().to_string()
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            self.total_income().to_string(),
            self.total_expense().to_string(),
            (self.total_income() - self.total_expense()).to_string()
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrakrResult<()> {
        writeln!(writer, "Bucket,Start Date,Income,Expense,Net")
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{},{:.2},{:.2},{:.2}",
                escape_csv(&point.label),
                point.bucket,
                point.income.cents() as f64 / 100.0,
                point.expense.cents() as f64 / 100.0,
                point.net().cents() as f64 / 100.0
            )
            .map_err(|e| crate::error::TrakrError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn expense_on(date: DateTime<Utc>, cents: i64) -> Transaction {
        Transaction::expense(date, Money::from_cents(cents), "food")
    }

    fn income_on(date: DateTime<Utc>, cents: i64) -> Transaction {
        Transaction::income(date, Money::from_cents(cents), "salary")
    }

    #[test]
    fn test_granularity_thresholds() {
        assert_eq!(Granularity::for_span_days(0), Granularity::Day);
        assert_eq!(Granularity::for_span_days(14), Granularity::Day);
        assert_eq!(Granularity::for_span_days(15), Granularity::Week);
        assert_eq!(Granularity::for_span_days(60), Granularity::Week);
        assert_eq!(Granularity::for_span_days(61), Granularity::Month);
    }

    #[test]
    fn test_daily_buckets_use_iso_labels() {
        let txns = vec![
            expense_on(at(2026, 3, 10), 1000),
            expense_on(at(2026, 3, 12), 2000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 14));

        assert_eq!(report.granularity, Granularity::Day);
        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].label, "2026-03-10");
        assert_eq!(report.points[1].label, "2026-03-12");
    }

    #[test]
    fn test_weekly_buckets_reset_per_month() {
        // 2026-03-03 is day 3 (W1), 2026-03-10 is day 10 (W2)
        let txns = vec![
            expense_on(at(2026, 3, 3), 1000),
            expense_on(at(2026, 3, 10), 2000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 4, 2));

        assert_eq!(report.granularity, Granularity::Week);
        assert_eq!(report.points[0].label, "Mar W1");
        assert_eq!(report.points[1].label, "Mar W2");
    }

    #[test]
    fn test_weekly_order_holds_across_month_boundary() {
        // Jan 30 is W5, Feb 2 is W1; the W1 bucket must still sort after W5
        let txns = vec![
            expense_on(at(2026, 2, 2), 2000),
            expense_on(at(2026, 1, 30), 1000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 2, 20));

        assert_eq!(report.granularity, Granularity::Week);
        assert_eq!(report.points[0].label, "Jan W5");
        assert_eq!(report.points[1].label, "Feb W1");
        assert!(report.points[0].bucket < report.points[1].bucket);
    }

    #[test]
    fn test_monthly_buckets_and_labels() {
        let txns = vec![
            income_on(at(2025, 12, 5), 100_000),
            expense_on(at(2026, 1, 20), 3000),
            expense_on(at(2026, 1, 25), 2000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 15));

        assert_eq!(report.granularity, Granularity::Month);
        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].label, "Dec 2025");
        assert_eq!(report.points[0].income, Money::from_cents(100_000));
        assert_eq!(report.points[1].label, "Jan 2026");
        assert_eq!(report.points[1].expense, Money::from_cents(5000));
    }

    #[test]
    fn test_income_and_expense_split_per_bucket() {
        let txns = vec![
            income_on(at(2026, 3, 10), 50_000),
            expense_on(at(2026, 3, 10), 12_000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 11));

        assert_eq!(report.points.len(), 1);
        assert_eq!(report.points[0].income, Money::from_cents(50_000));
        assert_eq!(report.points[0].expense, Money::from_cents(12_000));
        assert_eq!(report.points[0].net(), Money::from_cents(38_000));
    }

    #[test]
    fn test_bucket_sums_match_window_totals() {
        let txns = vec![
            income_on(at(2026, 1, 5), 100_000),
            income_on(at(2026, 2, 7), 90_000),
            expense_on(at(2026, 1, 9), 40_000),
            expense_on(at(2026, 2, 11), 10_000),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 20));

        assert_eq!(report.total_income(), Money::from_cents(190_000));
        assert_eq!(report.total_expense(), Money::from_cents(50_000));
    }

    #[test]
    fn test_points_sorted_ascending() {
        let txns = vec![
            expense_on(at(2026, 3, 12), 100),
            expense_on(at(2026, 3, 8), 100),
            expense_on(at(2026, 3, 10), 100),
        ];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 14));

        let buckets: Vec<_> = report.points.iter().map(|p| p.bucket).collect();
        let mut sorted = buckets.clone();
        sorted.sort();
        assert_eq!(buckets, sorted);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let report = CashFlowReport::generate(&[]);
        assert!(report.points.is_empty());
    }

    #[test]
    fn test_csv_export_has_bucket_rows() {
        let txns = vec![expense_on(at(2026, 3, 10), 1050)];
        let report = CashFlowReport::generate_at(&txns, at(2026, 3, 11));

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Bucket,Start Date,Income,Expense,Net\n"));
        assert!(csv.contains("2026-03-10,2026-03-10,0.00,10.50,-10.50"));
    }
}
