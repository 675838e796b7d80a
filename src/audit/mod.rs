//! Audit logging for fintrack
//!
//! Records every create, update and delete of transactions and budgets with
//! before/after values in an append-only JSONL file.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity information,
//!   and optional before/after values.
//! - `AuditLogger`: appends entries to the log and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
