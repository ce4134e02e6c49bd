//! Budget service
//!
//! Business logic for spending caps: set/replace by category and period,
//! removal, and the budget status backing the overview report.

use chrono::{NaiveDate, Utc};

use crate::activity::EntityKind;
use crate::error::{TrakrError, TrakrResult};
use crate::models::{Budget, BudgetPeriod, CategoryCatalog, Money};
use crate::reports::BudgetOverviewReport;
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the spending cap for a category and period
    ///
    /// Creates the budget if the pair has none, otherwise replaces the
    /// amount on the existing one.
    pub fn set(&self, category: &str, amount: Money, period: BudgetPeriod) -> TrakrResult<Budget> {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return Err(TrakrError::Validation("Category cannot be empty".into()));
        }

        if !amount.is_positive() {
            return Err(TrakrError::Validation(
                "Budget amount must be greater than zero".into(),
            ));
        }

        let existing = self
            .storage
            .budgets
            .get_by_category_period(&category, period)?;

        let budget = match existing {
            Some(mut budget) => {
                let before = budget.clone();
                budget.set_amount(amount);

                self.storage.budgets.upsert(budget.clone())?;
                self.storage.budgets.save()?;

                self.storage.log_update(
                    EntityKind::Budget,
                    budget.id.to_string(),
                    Some(format!("{} ({})", budget.category, budget.period)),
                    &before,
                    &budget,
                    Some(format!("amount: {} -> {}", before.amount, budget.amount)),
                )?;

                budget
            }
            None => {
                let budget = Budget::new(category, amount, period);

                budget
                    .validate()
                    .map_err(|e| TrakrError::Validation(e.to_string()))?;

                self.storage.budgets.upsert(budget.clone())?;
                self.storage.budgets.save()?;

                self.storage.log_create(
                    EntityKind::Budget,
                    budget.id.to_string(),
                    Some(format!("{} ({})", budget.category, budget.period)),
                    &budget,
                )?;

                budget
            }
        };

        Ok(budget)
    }

    /// Remove the budget for a category and period
    pub fn remove(&self, category: &str, period: BudgetPeriod) -> TrakrResult<Budget> {
        let category = category.trim().to_lowercase();

        let budget = self
            .storage
            .budgets
            .get_by_category_period(&category, period)?
            .ok_or_else(|| {
                TrakrError::budget_not_found(format!("{} ({})", category, period))
            })?;

        self.storage.budgets.delete(budget.id)?;
        self.storage.budgets.save()?;

        self.storage.log_delete(
            EntityKind::Budget,
            budget.id.to_string(),
            Some(format!("{} ({})", budget.category, budget.period)),
            &budget,
        )?;

        Ok(budget)
    }

    /// List all budgets, sorted by category then period
    pub fn list(&self) -> TrakrResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Build the budget overview for the windows containing `as_of`
    pub fn status(&self, as_of: NaiveDate) -> TrakrResult<BudgetOverviewReport> {
        let budgets = self.storage.budgets.get_all()?;
        let transactions = self.storage.transactions.get_all()?;
        let catalog = CategoryCatalog::default();

        Ok(BudgetOverviewReport::generate(
            &budgets,
            &transactions,
            &catalog,
            as_of,
        ))
    }

    /// Build the budget overview for today
    pub fn status_today(&self) -> TrakrResult<BudgetOverviewReport> {
        self.status(Utc::now().date_naive())
    }

    /// Count budgets
    pub fn count(&self) -> TrakrResult<usize> {
        self.storage.budgets.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrakrPaths;
    use crate::models::{Transaction, TransactionKind};
    use chrono::Utc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrakrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_creates_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = service
            .set("Food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();

        assert_eq!(budget.category, "food");
        assert_eq!(budget.amount, Money::from_cents(50_000));
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_set_replaces_existing_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let first = service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();
        let second = service
            .set("FOOD", Money::from_cents(60_000), BudgetPeriod::Monthly)
            .unwrap();

        // Same budget, new cap
        assert_eq!(first.id, second.id);
        assert_eq!(second.amount, Money::from_cents(60_000));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_set_distinguishes_periods() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("food", Money::from_cents(10_000), BudgetPeriod::Weekly)
            .unwrap();
        service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();

        assert_eq!(service.count().unwrap(), 2);
    }

    #[test]
    fn test_set_rejects_non_positive_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.set("food", Money::zero(), BudgetPeriod::Monthly);
        assert!(matches!(result, Err(TrakrError::Validation(_))));

        let result = service.set("food", Money::from_cents(-100), BudgetPeriod::Monthly);
        assert!(matches!(result, Err(TrakrError::Validation(_))));
    }

    #[test]
    fn test_set_rejects_blank_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.set("  ", Money::from_cents(100), BudgetPeriod::Monthly);
        assert!(matches!(result, Err(TrakrError::Validation(_))));
    }

    #[test]
    fn test_remove_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();
        service.remove("Food", BudgetPeriod::Monthly).unwrap();

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_remove_missing_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.remove("food", BudgetPeriod::Monthly);
        assert!(matches!(result, Err(TrakrError::NotFound { .. })));
    }

    #[test]
    fn test_list_sorted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("transport", Money::from_cents(20_000), BudgetPeriod::Monthly)
            .unwrap();
        service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();

        let budgets = service.list().unwrap();
        assert_eq!(budgets[0].category, "food");
        assert_eq!(budgets[1].category, "transport");
    }

    #[test]
    fn test_status_counts_window_spend() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Yearly)
            .unwrap();

        let txn = Transaction::new(
            Utc::now(),
            Money::from_cents(12_500),
            TransactionKind::Expense,
            "food",
        );
        storage.transactions.upsert(txn).unwrap();

        let report = service.status_today().unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].spent, Money::from_cents(12_500));
        assert_eq!(report.rows[0].remaining, Money::from_cents(37_500));
    }

    #[test]
    fn test_mutations_write_activity_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service
            .set("food", Money::from_cents(50_000), BudgetPeriod::Monthly)
            .unwrap();
        service
            .set("food", Money::from_cents(60_000), BudgetPeriod::Monthly)
            .unwrap();
        service.remove("food", BudgetPeriod::Monthly).unwrap();

        assert_eq!(storage.activity().entry_count().unwrap(), 3);
    }
}
