//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, recomputation of derived budget spending after every
//! change, persistence, and audit logging.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{TransactionPatch, TransactionService};
