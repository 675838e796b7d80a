//! Transaction service
//!
//! Validates user input, applies add/edit/delete to the transaction store,
//! then recomputes budget spending, persists, and writes the audit trail.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Month, Transaction, TransactionData, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
    month: Month,
}

/// Partial changes to an existing transaction; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionPatch {
    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.kind.is_none()
    }

    /// Apply the patch on top of `data`
    pub fn apply(self, data: &TransactionData) -> TransactionData {
        TransactionData {
            amount: self.amount.unwrap_or(data.amount),
            date: self.date.unwrap_or(data.date),
            description: self.description.unwrap_or_else(|| data.description.clone()),
            category: self.category.unwrap_or_else(|| data.category.clone()),
            kind: self.kind.unwrap_or(data.kind),
        }
    }
}

impl<'a> TransactionService<'a> {
    /// Create a transaction service that keeps budgets current for this month
    pub fn new(storage: &'a Storage) -> Self {
        Self::for_month(storage, Month::current())
    }

    /// Create a transaction service that recomputes budgets for `month`
    pub fn for_month(storage: &'a Storage, month: Month) -> Self {
        Self { storage, month }
    }

    /// Record a new transaction
    pub fn add(&self, mut data: TransactionData) -> FintrackResult<Transaction> {
        data.category = data.category.trim().to_string();
        data.description = data.description.trim().to_string();
        data.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let txn = self.storage.transactions.add(data)?;
        self.after_change()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(audit_name(&txn)),
            &txn,
        )?;

        tracing::info!(id = %txn.id, kind = %txn.kind(), amount = %txn.amount(), "transaction added");
        Ok(txn)
    }

    /// Replace the data of an existing transaction, keeping its id
    pub fn edit(&self, id: &TransactionId, mut data: TransactionData) -> FintrackResult<Transaction> {
        data.category = data.category.trim().to_string();
        data.description = data.description.trim().to_string();
        data.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let before = self
            .storage
            .transactions
            .edit(id, data.clone())?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;
        let after = Transaction::new(id.clone(), data);

        self.after_change()?;

        self.storage.log_update(
            EntityType::Transaction,
            id.to_string(),
            Some(audit_name(&after)),
            &before,
            &after,
            diff_summary(&before, &after),
        )?;

        tracing::info!(id = %id, "transaction updated");
        Ok(after)
    }

    /// Apply a partial change to an existing transaction
    pub fn update(&self, id: &TransactionId, patch: TransactionPatch) -> FintrackResult<Transaction> {
        let current = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        if patch.is_empty() {
            return Ok(current);
        }

        self.edit(id, patch.apply(&current.data))
    }

    /// Delete a transaction
    pub fn delete(&self, id: &TransactionId) -> FintrackResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        self.after_change()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(audit_name(&txn)),
            &txn,
        )?;

        tracing::info!(id = %id, "transaction deleted");
        Ok(txn)
    }

    /// All transactions (no ordering guarantee)
    pub fn list(&self) -> FintrackResult<Vec<Transaction>> {
        self.storage.transactions.list()
    }

    /// Find a transaction by full id or unique id prefix
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Transaction>> {
        self.storage.transactions.find_by_prefix(identifier.trim())
    }

    /// Find a transaction by full id or unique id prefix, or fail
    pub fn resolve(&self, identifier: &str) -> FintrackResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::transaction_not_found(identifier))
    }

    fn after_change(&self) -> FintrackResult<()> {
        self.storage.recompute_budgets(self.month)?;
        self.storage.transactions.save()
    }
}

fn audit_name(txn: &Transaction) -> String {
    if txn.description().is_empty() {
        format!("{} {}", txn.date(), txn.category())
    } else {
        format!("{} {}", txn.date(), txn.description())
    }
}

fn diff_summary(before: &Transaction, after: &Transaction) -> Option<String> {
    let mut changes = Vec::new();
    if before.date() != after.date() {
        changes.push(format!("date: {} -> {}", before.date(), after.date()));
    }
    if before.amount() != after.amount() {
        changes.push(format!("amount: {} -> {}", before.amount(), after.amount()));
    }
    if before.kind() != after.kind() {
        changes.push(format!("type: {} -> {}", before.kind(), after.kind()));
    }
    if before.category() != after.category() {
        changes.push(format!(
            "category: '{}' -> '{}'",
            before.category(),
            after.category()
        ));
    }
    if before.description() != after.description() {
        changes.push("description changed".to_string());
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn march() -> Month {
        Month::new(2025, 3).unwrap()
    }

    fn expense(cents: i64, day: u32, category: &str) -> TransactionData {
        TransactionData::new(
            TransactionKind::Expense,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            category,
        )
    }

    #[test]
    fn test_add_recomputes_budgets() {
        let (_temp, storage) = create_test_storage();
        storage.budgets.add("food", Money::from_cents(8000)).unwrap();
        let service = TransactionService::for_month(&storage, march());

        service.add(expense(3000, 4, "food")).unwrap();
        service.add(expense(2000, 9, "food")).unwrap();

        let budget = storage.budgets.get("food").unwrap().unwrap();
        assert_eq!(budget.spent, Money::from_cents(5000));
    }

    #[test]
    fn test_add_rejects_invalid_input_without_touching_store() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::for_month(&storage, march());

        let err = service.add(expense(0, 1, "food")).unwrap_err();
        assert!(err.is_validation());

        let err = service.add(expense(100, 1, "   ")).unwrap_err();
        assert!(err.is_validation());

        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_edit_preserves_id_and_updates_spent() {
        let (_temp, storage) = create_test_storage();
        storage.budgets.add("food", Money::from_cents(8000)).unwrap();
        let service = TransactionService::for_month(&storage, march());

        let txn = service.add(expense(3000, 4, "food")).unwrap();
        let other = service.add(expense(500, 5, "travel")).unwrap();

        let edited = service.edit(&txn.id, expense(9000, 4, "food")).unwrap();
        assert_eq!(edited.id, txn.id);

        let budget = storage.budgets.get("food").unwrap().unwrap();
        assert_eq!(budget.spent, Money::from_cents(9000));
        assert_eq!(storage.transactions.get(&other.id).unwrap(), Some(other));
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::for_month(&storage, march());

        let err = service
            .edit(&TransactionId::from_string("nope"), expense(100, 1, "food"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_applies_patch() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::for_month(&storage, march());
        let txn = service
            .add(expense(3000, 4, "food").with_description("Dinner"))
            .unwrap();

        let patch = TransactionPatch {
            category: Some("entertainment".into()),
            ..Default::default()
        };
        let updated = service.update(&txn.id, patch).unwrap();

        assert_eq!(updated.category(), "entertainment");
        assert_eq!(updated.description(), "Dinner");
        assert_eq!(updated.amount(), Money::from_cents(3000));

        let entries = storage.audit().read_all().unwrap();
        let last = entries.last().unwrap();
        assert_eq!(last.operation, Operation::Update);
        assert_eq!(
            last.diff_summary.as_deref(),
            Some("category: 'food' -> 'entertainment'")
        );
    }

    #[test]
    fn test_delete_restores_budget_and_store() {
        let (_temp, storage) = create_test_storage();
        storage.budgets.add("food", Money::from_cents(8000)).unwrap();
        let service = TransactionService::for_month(&storage, march());
        let before = service.list().unwrap();

        let txn = service.add(expense(3000, 4, "food")).unwrap();
        service.delete(&txn.id).unwrap();

        assert_eq!(service.list().unwrap(), before);
        assert!(storage.budgets.get("food").unwrap().unwrap().spent.is_zero());
        assert!(service.delete(&txn.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve_by_prefix() {
        let (_temp, storage) = create_test_storage();
        let service = TransactionService::for_month(&storage, march());
        let txn = service.add(expense(100, 1, "food")).unwrap();

        let found = service.resolve(&txn.id.as_str()[..8]).unwrap();
        assert_eq!(found.id, txn.id);
        assert!(service.resolve("not-an-id").unwrap_err().is_not_found());
    }

    #[test]
    fn test_changes_are_persisted() {
        let (temp, storage) = create_test_storage();
        let service = TransactionService::for_month(&storage, march());
        let txn = service.add(expense(100, 1, "food")).unwrap();

        let paths = FintrackPaths::with_base_dir(temp.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        assert_eq!(reopened.transactions.list().unwrap(), vec![txn]);
    }
}
