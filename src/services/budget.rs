//! Budget service
//!
//! Creates and removes per-category monthly budgets and keeps their `spent`
//! totals in step with the transaction store.

use crate::audit::EntityType;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{category, Budget, Category, Money, Month};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
    month: Month,
}

impl<'a> BudgetService<'a> {
    /// Create a budget service for the current month
    pub fn new(storage: &'a Storage) -> Self {
        Self::for_month(storage, Month::current())
    }

    /// Create a budget service that computes spending for `month`
    pub fn for_month(storage: &'a Storage, month: Month) -> Self {
        Self { storage, month }
    }

    /// Set a monthly limit for a category
    ///
    /// `category` may be a registry id or display name. Fails if the
    /// category is unknown, already budgeted, or `amount` is not positive.
    pub fn add(&self, category: &str, amount: Money) -> FintrackResult<Budget> {
        let entry = category::lookup(category)
            .ok_or_else(|| FintrackError::category_not_found(category.trim()))?;

        self.storage.budgets.add(entry.id, amount)?;
        self.storage.recompute_budgets(self.month)?;

        let budget = self
            .storage
            .budgets
            .get(entry.id)?
            .ok_or_else(|| FintrackError::budget_not_found(entry.id))?;

        self.storage.log_create(
            EntityType::Budget,
            entry.id,
            Some(entry.name.to_string()),
            &budget,
        )?;

        tracing::info!(category = entry.id, amount = %amount, "budget created");
        Ok(budget)
    }

    /// Remove the budget for a category (id or display name)
    pub fn delete(&self, category: &str) -> FintrackResult<Budget> {
        let id = category::lookup(category)
            .map(|c| c.id.to_string())
            .unwrap_or_else(|| category.trim().to_string());

        let budget = self
            .storage
            .budgets
            .delete(&id)?
            .ok_or_else(|| FintrackError::budget_not_found(id.clone()))?;
        self.storage.budgets.save()?;

        self.storage.log_delete(
            EntityType::Budget,
            id.as_str(),
            Some(category::resolve(&id).name.to_string()),
            &budget,
        )?;

        tracing::info!(category = %id, "budget deleted");
        Ok(budget)
    }

    /// All budgets with `spent` recomputed for the service's month
    pub fn list(&self) -> FintrackResult<Vec<Budget>> {
        self.storage.recompute_budgets(self.month)?;
        self.storage.budgets.list()
    }

    /// Categories that do not have a budget yet
    pub fn available_categories(&self) -> FintrackResult<Vec<&'static Category>> {
        let budgets = self.storage.budgets.list()?;
        Ok(category::all()
            .filter(|c| !budgets.iter().any(|b| b.category == c.id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{TransactionData, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn june() -> Month {
        Month::new(2025, 6).unwrap()
    }

    #[test]
    fn test_add_picks_up_existing_spending() {
        let (_temp, storage) = create_test_storage();
        storage
            .transactions
            .add(TransactionData::new(
                TransactionKind::Expense,
                Money::from_cents(2500),
                NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
                "food",
            ))
            .unwrap();

        let service = BudgetService::for_month(&storage, june());
        let budget = service.add("food", Money::from_cents(10000)).unwrap();
        assert_eq!(budget.spent, Money::from_cents(2500));
    }

    #[test]
    fn test_add_accepts_display_name() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::for_month(&storage, june());

        let budget = service.add("Bills & Utilities", Money::from_cents(100)).unwrap();
        assert_eq!(budget.category, "bills");
    }

    #[test]
    fn test_add_rejects_unknown_and_duplicate() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::for_month(&storage, june());

        assert!(service
            .add("rent", Money::from_cents(100))
            .unwrap_err()
            .is_not_found());

        service.add("food", Money::from_cents(100)).unwrap();
        let err = service.add("food", Money::from_cents(200)).unwrap_err();
        assert!(matches!(err, FintrackError::Duplicate { .. }));
    }

    #[test]
    fn test_available_categories_excludes_budgeted() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::for_month(&storage, june());
        service.add("food", Money::from_cents(100)).unwrap();
        service.add("travel", Money::from_cents(100)).unwrap();

        let available = service.available_categories().unwrap();
        assert_eq!(available.len(), 7);
        assert!(available.iter().all(|c| c.id != "food" && c.id != "travel"));
    }

    #[test]
    fn test_delete() {
        let (_temp, storage) = create_test_storage();
        let service = BudgetService::for_month(&storage, june());
        service.add("food", Money::from_cents(100)).unwrap();

        let removed = service.delete("food").unwrap();
        assert_eq!(removed.category, "food");
        assert!(service.list().unwrap().is_empty());
        assert!(service.delete("food").unwrap_err().is_not_found());
    }
}
