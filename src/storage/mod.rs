//! Storage layer for fintrack
//!
//! Holds the transaction and budget stores, persists each one to its own JSON
//! file with atomic writes, and appends to the audit log.

pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::Month;

/// Main storage coordinator that provides access to both stores
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance (stores start empty; call `load_all`)
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load both stores from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save both stores to disk
    ///
    /// The two files are written independently.
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Recompute every budget's `spent` for `month` and persist the budgets
    ///
    /// Idempotent; safe to call at any time.
    pub fn recompute_budgets(&self, month: Month) -> Result<(), FintrackError> {
        let transactions = self.transactions.list()?;
        self.budgets.recompute(&transactions, month)?;
        self.budgets.save()?;
        tracing::debug!(%month, transactions = transactions.len(), "recomputed budget spending");
        Ok(())
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FintrackError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), FintrackError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), FintrackError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
