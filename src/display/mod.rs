//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, budgets, and derived
//! reports for terminal display.

pub mod budget;
pub mod category;
pub mod format;
pub mod report;
pub mod transaction;

pub use budget::{format_available_categories, format_budget_overview};
pub use category::format_category_list;
pub use report::{format_category_chart, format_dashboard, format_insights, format_monthly_chart};
pub use transaction::{format_transaction_details, format_transaction_table};
