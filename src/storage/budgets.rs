//! Budget manager
//!
//! Owns the ordered in-memory collection of monthly budgets and persists it
//! to the budgets CSV file.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Budget;
use crate::validation::{parse_number, validate_month, validate_positive_amount};

use super::file_io::{read_records, write_records_atomic};
use super::records::BudgetRecord;

/// Fields to change in [`BudgetManager::update`]
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub month: Option<String>,
    pub limit_amount: Option<f64>,
}

impl BudgetUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn limit_amount(mut self, limit_amount: f64) -> Self {
        self.limit_amount = Some(limit_amount);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.month.is_none() && self.limit_amount.is_none()
    }
}

/// In-memory owner of all budgets, in insertion order
#[derive(Debug, Clone, Default)]
pub struct BudgetManager {
    budgets: Vec<Budget>,
}

impl BudgetManager {
    /// Create an empty budget manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a budget
    pub fn create(&mut self, budget: Budget) -> FinanceResult<&Budget> {
        if self.exists(&budget.id) {
            return Err(FinanceError::duplicate("Budget", &budget.id));
        }

        if budget.id.trim().is_empty() {
            return Err(FinanceError::Validation("Budget ID cannot be empty".into()));
        }

        let month = validate_month(&budget.month, "Month")?;
        let limit_amount = validate_positive_amount(budget.limit_amount, "Limit")?;
        if budget.category.trim().is_empty() {
            return Err(FinanceError::Validation(
                "Category must be a non-empty string".into(),
            ));
        }

        let budget = Budget {
            month,
            limit_amount,
            ..budget
        };
        debug!(id = %budget.id, month = %budget.month, "created budget");

        self.budgets.push(budget);
        Ok(&self.budgets[self.budgets.len() - 1])
    }

    /// Snapshot of all budgets in insertion order
    pub fn list_all(&self) -> Vec<Budget> {
        self.budgets.clone()
    }

    /// Get a budget by id
    pub fn get(&self, id: &str) -> FinanceResult<&Budget> {
        self.get_or_none(id)
            .ok_or_else(|| FinanceError::budget_not_found(id))
    }

    /// Get a budget by id, or `None`
    pub fn get_or_none(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// Check if a budget exists
    pub fn exists(&self, id: &str) -> bool {
        self.get_or_none(id).is_some()
    }

    /// Count budgets
    pub fn count(&self) -> usize {
        self.budgets.len()
    }

    /// Update month and/or limit of a budget
    pub fn update(&mut self, id: &str, update: BudgetUpdate) -> FinanceResult<&Budget> {
        if !self.exists(id) {
            return Err(FinanceError::budget_not_found(id));
        }

        let month = update
            .month
            .as_deref()
            .map(|m| validate_month(m, "Month"))
            .transpose()?;
        let limit_amount = update
            .limit_amount
            .map(|l| validate_positive_amount(l, "Limit"))
            .transpose()?;

        let budget = self
            .budgets
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| FinanceError::budget_not_found(id))?;

        if let Some(month) = month {
            budget.month = month;
        }
        if let Some(limit_amount) = limit_amount {
            budget.limit_amount = limit_amount;
        }

        debug!(id = %budget.id, "updated budget");
        Ok(&*budget)
    }

    /// Delete a budget, returning it
    pub fn delete(&mut self, id: &str) -> FinanceResult<Budget> {
        let index = self
            .budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| FinanceError::budget_not_found(id))?;

        debug!(id, "deleted budget");
        Ok(self.budgets.remove(index))
    }

    /// Save all budgets to a CSV file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> FinanceResult<()> {
        let rows: Vec<BudgetRecord> = self.budgets.iter().map(BudgetRecord::from).collect();
        write_records_atomic(path.as_ref(), &rows)?;

        info!(count = rows.len(), path = %path.as_ref().display(), "saved budgets");
        Ok(())
    }

    /// Replace the collection with the contents of a CSV file
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> FinanceResult<()> {
        let rows: Vec<BudgetRecord> = read_records(path.as_ref())?;

        let mut loaded = Self::new();
        for row in rows {
            let limit_amount = parse_number(&row.limit_amount, "Limit")?;
            let budget = Budget::new(row.id, &row.month, row.category, limit_amount)?;
            loaded.create(budget)?;
        }

        info!(count = loaded.count(), path = %path.as_ref().display(), "loaded budgets");
        *self = loaded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn food() -> Budget {
        Budget::new("B1", "2025-01", "Food", 200.0).unwrap()
    }

    #[test]
    fn test_create_and_get() {
        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();

        let budget = manager.get("B1").unwrap();
        assert_eq!(budget.category, "Food");
        assert_eq!(budget.limit_amount, 200.0);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();

        let dup = Budget::new("B1", "2025-02", "Rent", 900.0).unwrap();
        assert!(manager.create(dup).unwrap_err().is_validation());
        assert_eq!(manager.list_all(), vec![food()]);
    }

    #[test]
    fn test_create_revalidates_fields() {
        let mut manager = BudgetManager::new();

        let mut budget = food();
        budget.month = "2025-13".into();
        assert!(manager.create(budget).is_err());

        let mut budget = food();
        budget.limit_amount = 0.0;
        assert!(manager.create(budget).is_err());

        let mut budget = food();
        budget.category = String::new();
        assert!(manager.create(budget).is_err());
    }

    #[test]
    fn test_missing_budget_is_not_found() {
        let mut manager = BudgetManager::new();
        assert!(manager.get("B404").unwrap_err().is_not_found());
        assert!(manager.delete("B404").unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_month_and_limit() {
        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();

        let updated = manager
            .update("B1", BudgetUpdate::new().month("2025-02").limit_amount(250.0))
            .unwrap();
        assert_eq!(updated.month, "2025-02");
        assert_eq!(updated.limit_amount, 250.0);
        assert_eq!(updated.category, "Food");
    }

    #[test]
    fn test_failed_update_changes_nothing() {
        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();

        let result = manager.update(
            "B1",
            BudgetUpdate::new().month("2025-03").limit_amount(-1.0),
        );
        assert!(result.is_err());
        assert_eq!(manager.get("B1").unwrap().month, "2025-01");
    }

    #[test]
    fn test_delete() {
        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();
        manager.delete("B1").unwrap();
        assert_eq!(manager.count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.csv");

        let mut manager = BudgetManager::new();
        manager.create(food()).unwrap();
        manager.save(&path).unwrap();
        assert!(path.exists());

        let mut loaded = BudgetManager::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.get("B1").unwrap().category, "Food");
        assert_eq!(loaded.get("B1").unwrap().limit_amount, 200.0);
    }

    #[test]
    fn test_load_invalid_month_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.csv");
        fs::write(
            &path,
            "id,month,category,limit_amount\nB1,2025-01,Food,200\nB2,2025-30,Rent,900\n",
        )
        .unwrap();

        let mut manager = BudgetManager::new();
        assert!(manager.load(&path).unwrap_err().is_validation());
        assert_eq!(manager.count(), 0);
    }
}
