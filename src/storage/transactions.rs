//! Transaction repository for JSON storage
//!
//! Owns the transaction collection and persists it to
//! `finance-transactions.json` as a bare JSON array.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::FintrackError;
use crate::models::{Transaction, TransactionData, TransactionId};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for transaction persistence
///
/// Records keep insertion order. Callers only ever receive clones.
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new, empty transaction repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Transaction>>, FintrackError> {
        self.data
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Transaction>>, FintrackError> {
        self.data
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load transactions from disk
    ///
    /// A missing or malformed file yields an empty collection.
    pub fn load(&self) -> Result<(), FintrackError> {
        let loaded: Vec<Transaction> = read_json_or_default(&self.path);
        let count = self.replace_all(loaded)?;
        tracing::debug!(count, "loaded transactions");
        Ok(())
    }

    /// Replace the whole collection, returning how many records were kept
    ///
    /// Records whose id repeats an earlier record are dropped.
    pub fn replace_all(&self, records: Vec<Transaction>) -> Result<usize, FintrackError> {
        let mut seen = HashSet::new();
        let before = records.len();
        let unique: Vec<Transaction> = records
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .collect();
        if unique.len() != before {
            tracing::warn!(
                dropped = before - unique.len(),
                "dropped transactions with duplicate ids"
            );
        }

        let count = unique.len();
        *self.write()? = unique;
        Ok(count)
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    /// All transactions, in insertion order
    pub fn list(&self) -> Result<Vec<Transaction>, FintrackError> {
        Ok(self.read()?.clone())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, FintrackError> {
        Ok(self.read()?.iter().find(|t| &t.id == id).cloned())
    }

    /// Find the single transaction whose id starts with `prefix`
    ///
    /// An exact id match always wins. Returns `None` when nothing or more
    /// than one transaction matches.
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<Transaction>, FintrackError> {
        let data = self.read()?;
        if let Some(exact) = data.iter().find(|t| t.id.as_str() == prefix) {
            return Ok(Some(exact.clone()));
        }
        if prefix.is_empty() {
            return Ok(None);
        }

        let mut matches = data.iter().filter(|t| t.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Some(only.clone())),
            _ => Ok(None),
        }
    }

    /// Append a new transaction under a freshly generated identifier
    pub fn add(&self, data: TransactionData) -> Result<Transaction, FintrackError> {
        let mut records = self.write()?;

        let mut id = TransactionId::new();
        while records.iter().any(|t| t.id == id) {
            id = TransactionId::new();
        }

        let txn = Transaction::new(id, data);
        records.push(txn.clone());
        Ok(txn)
    }

    /// Replace the data of the transaction matching `id`, keeping its id and
    /// position
    ///
    /// Returns the previous record, or `None` if no transaction matched.
    pub fn edit(
        &self,
        id: &TransactionId,
        data: TransactionData,
    ) -> Result<Option<Transaction>, FintrackError> {
        let mut records = self.write()?;
        Ok(records
            .iter_mut()
            .find(|t| &t.id == id)
            .map(|slot| std::mem::replace(&mut slot.data, data))
            .map(|previous| Transaction::new(id.clone(), previous)))
    }

    /// Remove the transaction matching `id`
    ///
    /// Returns the removed record, or `None` if no transaction matched.
    pub fn delete(&self, id: &TransactionId) -> Result<Option<Transaction>, FintrackError> {
        let mut records = self.write()?;
        Ok(records
            .iter()
            .position(|t| &t.id == id)
            .map(|idx| records.remove(idx)))
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FintrackError> {
        Ok(self.read()?.len())
    }
}
