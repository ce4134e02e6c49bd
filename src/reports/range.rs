//! Report Time Ranges
//!
//! The rolling windows a report can be scoped to, and the filter that
//! applies one to a transaction list.

use crate::models::Transaction;
use chrono::{DateTime, Duration, Utc};

/// Rolling time window ending at the current instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    /// Last 7 days
    SevenDays,
    /// Last 30 days
    #[default]
    ThirtyDays,
    /// Last 90 days
    NinetyDays,
    /// Last 365 days
    Year,
}

impl TimeRange {
    /// Parse a range key, falling back to thirty days for anything
    /// unrecognized
    ///
    /// Accepted keys: `seven_days` (or `7days`), `30days`, `90days`, `year`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "seven_days" | "7days" => Self::SevenDays,
            "30days" => Self::ThirtyDays,
            "90days" => Self::NinetyDays,
            "year" => Self::Year,
            _ => Self::ThirtyDays,
        }
    }

    /// Window length in whole days
    pub fn days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
            Self::Year => 365,
        }
    }

    /// The key form accepted by [`TimeRange::parse`]
    pub fn key(&self) -> &'static str {
        match self {
            Self::SevenDays => "seven_days",
            Self::ThirtyDays => "30days",
            Self::NinetyDays => "90days",
            Self::Year => "year",
        }
    }

    /// Human-readable label for report headers
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "Last 7 days",
            Self::ThirtyDays => "Last 30 days",
            Self::NinetyDays => "Last 90 days",
            Self::Year => "Last year",
        }
    }

    /// Earliest instant still inside the window
    pub fn cutoff(&self) -> DateTime<Utc> {
        Utc::now() - Duration::days(self.days())
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Keep the transactions dated inside the window, preserving input order
pub fn filter_by_range(transactions: &[Transaction], range: TimeRange) -> Vec<Transaction> {
    let cutoff = range.cutoff();
    transactions
        .iter()
        .filter(|t| t.date >= cutoff)
        .cloned()
        .collect()
}
