//! Budget repository for JSON storage
//!
//! Manages loading and saving budgets to budgets.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrakrError;
use crate::models::{Budget, BudgetId, BudgetPeriod};

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<HashMap<BudgetId, Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), TrakrError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for budget in file_data.budgets {
            data.insert(budget.id, budget);
        }

        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category).then(a.period.cmp(&b.period)));

        let file_data = BudgetData { budgets };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a budget by ID
    pub fn get(&self, id: BudgetId) -> Result<Option<Budget>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all budgets, sorted by category then period
    pub fn get_all(&self) -> Result<Vec<Budget>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budgets: Vec<_> = data.values().cloned().collect();
        budgets.sort_by(|a, b| a.category.cmp(&b.category).then(a.period.cmp(&b.period)));
        Ok(budgets)
    }

    /// Get the budget for a category and period, if one exists
    ///
    /// Category comparison is case-insensitive. At most one budget exists
    /// per category and period pair.
    pub fn get_by_category_period(
        &self,
        category: &str,
        period: BudgetPeriod,
    ) -> Result<Option<Budget>, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let category_lower = category.to_lowercase();
        Ok(data
            .values()
            .find(|b| b.category.to_lowercase() == category_lower && b.period == period)
            .cloned())
    }

    /// Insert or update a budget
    pub fn upsert(&self, budget: Budget) -> Result<(), TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(budget.id, budget);
        Ok(())
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> Result<bool, TrakrError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, TrakrError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrakrError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
