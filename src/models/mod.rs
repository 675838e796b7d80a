//! Core data models for fintrack
//!
//! This module contains the data structures of the tracker: transactions,
//! budgets, the static category registry, money amounts, and months.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use ids::TransactionId;
pub use money::Money;
pub use period::Month;
pub use transaction::{Transaction, TransactionData, TransactionKind};
