//! Budget repository for JSON storage
//!
//! Owns the budget collection and persists it to `finance-budgets.json` as a
//! bare JSON array. Enforces one budget per category.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FintrackError;
use crate::models::{Budget, Money, Month, Transaction};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new, empty budget repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Budget>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Budget>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load budgets from disk
    ///
    /// A missing or malformed file yields an empty collection. A second
    /// budget for an already-seen category is dropped.
    pub fn load(&self) -> Result<(), FintrackError> {
        let loaded: Vec<Budget> = read_json_or_default(&self.path);

        let mut seen = HashSet::new();
        let before = loaded.len();
        let unique: Vec<Budget> = loaded
            .into_iter()
            .filter(|b| seen.insert(b.category.clone()))
            .collect();
        if unique.len() != before {
            tracing::warn!(
                dropped = before - unique.len(),
                "dropped budgets for duplicate categories"
            );
        }

        tracing::debug!(count = unique.len(), "loaded budgets");
        *self.write()? = unique;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    /// All budgets, in creation order
    pub fn list(&self) -> Result<Vec<Budget>, FintrackError> {
        Ok(self.read()?.clone())
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> Result<Option<Budget>, FintrackError> {
        Ok(self.read()?.iter().find(|b| b.category == category).cloned())
    }

    /// Create a budget for `category` with nothing spent
    ///
    /// Fails if the category already has a budget or `amount` is not positive.
    pub fn add(&self, category: &str, amount: Money) -> Result<Budget, FintrackError> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(format!(
                "Budget amount must be greater than zero (got {})",
                amount
            )));
        }

        let mut budgets = self.write()?;
        if budgets.iter().any(|b| b.category == category) {
            return Err(FintrackError::budget_exists(category));
        }

        let budget = Budget::new(category, amount);
        budgets.push(budget.clone());
        Ok(budget)
    }

    /// Remove the budget for `category`
    ///
    /// Returns the removed budget, or `None` if there was none.
    pub fn delete(&self, category: &str) -> Result<Option<Budget>, FintrackError> {
        let mut budgets = self.write()?;
        Ok(budgets
            .iter()
            .position(|b| b.category == category)
            .map(|idx| budgets.remove(idx)))
    }

    /// Recompute `spent` of every budget from the full transaction set
    pub fn recompute(&self, transactions: &[Transaction], month: Month) -> Result<(), FintrackError> {
        let mut budgets = self.write()?;
        for budget in budgets.iter_mut() {
            budget.recompute_spent(transactions, month);
        }
        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FintrackError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionData, TransactionId, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance-budgets.json");
        (temp_dir, BudgetRepository::new(path))
    }

    fn expense(cents: i64, date: &str, category: &str) -> Transaction {
        Transaction::new(
            TransactionId::new(),
            TransactionData::new(
                TransactionKind::Expense,
                Money::from_cents(cents),
                NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                category,
            ),
        )
    }

    #[test]
    fn test_add_initializes_spent() {
        let (_temp, repo) = create_test_repo();
        let budget = repo.add("food", Money::from_cents(40000)).unwrap();
        assert!(budget.spent.is_zero());
        assert_eq!(repo.get("food").unwrap(), Some(budget));
    }

    #[test]
    fn test_add_rejects_duplicate_category() {
        let (_temp, repo) = create_test_repo();
        repo.add("food", Money::from_cents(40000)).unwrap();

        let err = repo.add("food", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, FintrackError::Duplicate { .. }));
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let (_temp, repo) = create_test_repo();
        assert!(repo.add("food", Money::zero()).unwrap_err().is_validation());
        assert!(repo
            .add("food", Money::from_cents(-100))
            .unwrap_err()
            .is_validation());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let (_temp, repo) = create_test_repo();
        repo.add("food", Money::from_cents(100)).unwrap();

        assert!(repo.delete("travel").unwrap().is_none());
        assert!(repo.delete("food").unwrap().is_some());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_recompute_scenario_counts_only_current_month() {
        let (_temp, repo) = create_test_repo();
        repo.add("food", Money::from_cents(8000)).unwrap();

        let month = Month::new(2025, 6).unwrap();
        let transactions = vec![
            expense(10000, "2025-06-03", "food"),
            expense(5000, "2025-05-20", "food"),
        ];

        repo.recompute(&transactions, month).unwrap();
        let budget = repo.get("food").unwrap().unwrap();
        assert_eq!(budget.spent, Money::from_cents(10000));
        assert!(budget.is_over());

        repo.recompute(&transactions, month).unwrap();
        assert_eq!(repo.get("food").unwrap().unwrap(), budget);
    }

    #[test]
    fn test_save_and_load() {
        let (temp, repo) = create_test_repo();
        repo.add("bills", Money::from_cents(15000)).unwrap();
        repo.save().unwrap();

        let reloaded = BudgetRepository::new(temp.path().join("finance-budgets.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.list().unwrap(), repo.list().unwrap());
    }

    #[test]
    fn test_load_drops_duplicate_categories() {
        let (temp, repo) = create_test_repo();
        std::fs::write(
            temp.path().join("finance-budgets.json"),
            r#"[{"category":"food","amount":100,"spent":0},{"category":"food","amount":50,"spent":0}]"#,
        )
        .unwrap();

        repo.load().unwrap();
        let budgets = repo.list().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].amount, Money::from_cents(10000));
    }
}
