//! Reports module for Trakr
//!
//! Pure aggregations over a transaction window: spending by category,
//! time-bucketed cash flow, payment-method totals, summary statistics, and
//! budget-versus-actual. Builders take slices and the injected category
//! catalog; none touches storage.

pub mod budget_overview;
pub mod cash_flow;
pub mod payment_method;
pub mod range;
pub mod spending;
pub mod statistics;

pub use budget_overview::{BudgetOverviewReport, BudgetRow};
pub use cash_flow::{CashFlowReport, Granularity, TimeSeriesPoint};
pub use payment_method::{PaymentMethodReport, PaymentMethodTotal};
pub use range::{filter_by_range, TimeRange};
pub use spending::{CategoryTotal, SpendingReport};
pub use statistics::{CategoryAmount, Statistics};

/// Escape a string for CSV format
pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
