//! Budget model
//!
//! A budget caps spending for one category over a recurring period. Spend
//! tracking is computed against the period window containing a reference
//! date; the budget itself only stores the cap.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// Recurring period a budget applies to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// ISO week, Monday through Sunday
    Weekly,
    /// Calendar month
    #[default]
    Monthly,
    /// Calendar year
    Yearly,
}

impl BudgetPeriod {
    /// Parse a period from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" | "w" => Some(Self::Weekly),
            "monthly" | "month" | "m" => Some(Self::Monthly),
            "yearly" | "year" | "y" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Start of the period window containing `date`
    pub fn window_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => {
                let offset = date.weekday().num_days_from_monday() as i64;
                date - Duration::days(offset)
            }
            Self::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .unwrap_or(date),
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// End (inclusive) of the period window containing `date`
    pub fn window_end(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Weekly => self.window_start(date) + Duration::days(6),
            Self::Monthly => {
                let (year, month) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                NaiveDate::from_ymd_opt(year, month, 1)
                    .map(|d| d - Duration::days(1))
                    .unwrap_or(date)
            }
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
        }
    }

    /// Check whether `date` falls inside the window containing `reference`
    pub fn window_contains(&self, reference: NaiveDate, date: NaiveDate) -> bool {
        date >= self.window_start(reference) && date <= self.window_end(reference)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A spending cap for one category over a recurring period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category key this budget applies to
    pub category: String,

    /// Spending cap per period
    pub amount: Money,

    /// The recurring period
    pub period: BudgetPeriod,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, amount: Money, period: BudgetPeriod) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
            period,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the cap amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if !self.amount.is_positive() {
            return Err(BudgetValidationError::AmountNotPositive);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.category, self.amount, self.period)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    AmountNotPositive,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::AmountNotPositive => write!(f, "Budget amount must be positive"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_parse() {
        assert_eq!(BudgetPeriod::parse("weekly"), Some(BudgetPeriod::Weekly));
        assert_eq!(BudgetPeriod::parse("MONTH"), Some(BudgetPeriod::Monthly));
        assert_eq!(BudgetPeriod::parse("y"), Some(BudgetPeriod::Yearly));
        assert_eq!(BudgetPeriod::parse("fortnightly"), None);
    }

    #[test]
    fn test_weekly_window() {
        // 2025-01-15 is a Wednesday
        let wed = date(2025, 1, 15);
        assert_eq!(BudgetPeriod::Weekly.window_start(wed), date(2025, 1, 13));
        assert_eq!(BudgetPeriod::Weekly.window_end(wed), date(2025, 1, 19));

        // Monday maps to itself
        let mon = date(2025, 1, 13);
        assert_eq!(BudgetPeriod::Weekly.window_start(mon), mon);
    }

    #[test]
    fn test_monthly_window() {
        let mid = date(2025, 1, 15);
        assert_eq!(BudgetPeriod::Monthly.window_start(mid), date(2025, 1, 1));
        assert_eq!(BudgetPeriod::Monthly.window_end(mid), date(2025, 1, 31));

        // December rolls into the next year for the end computation
        let dec = date(2024, 12, 5);
        assert_eq!(BudgetPeriod::Monthly.window_end(dec), date(2024, 12, 31));
    }

    #[test]
    fn test_yearly_window() {
        let mid = date(2025, 6, 20);
        assert_eq!(BudgetPeriod::Yearly.window_start(mid), date(2025, 1, 1));
        assert_eq!(BudgetPeriod::Yearly.window_end(mid), date(2025, 12, 31));
    }

    #[test]
    fn test_window_contains() {
        let reference = date(2025, 1, 15);
        assert!(BudgetPeriod::Monthly.window_contains(reference, date(2025, 1, 1)));
        assert!(BudgetPeriod::Monthly.window_contains(reference, date(2025, 1, 31)));
        assert!(!BudgetPeriod::Monthly.window_contains(reference, date(2025, 2, 1)));
        assert!(!BudgetPeriod::Monthly.window_contains(reference, date(2024, 12, 31)));
    }

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("food", Money::from_cents(50000), BudgetPeriod::Monthly);
        assert_eq!(budget.category, "food");
        assert_eq!(budget.amount.cents(), 50000);
        assert_eq!(budget.period, BudgetPeriod::Monthly);
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new("food", Money::from_cents(50000), BudgetPeriod::Monthly);
        assert!(budget.validate().is_ok());

        budget.amount = Money::zero();
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::AmountNotPositive)
        );

        budget.amount = Money::from_cents(100);
        budget.category = String::new();
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new("food", Money::from_cents(50000), BudgetPeriod::Weekly);
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains("\"period\":\"weekly\""));

        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget.id, deserialized.id);
        assert_eq!(budget.period, deserialized.period);
    }

    #[test]
    fn test_display() {
        let budget = Budget::new("food", Money::from_cents(50000), BudgetPeriod::Monthly);
        assert_eq!(format!("{}", budget), "food: $500.00 / Monthly");
    }
}
