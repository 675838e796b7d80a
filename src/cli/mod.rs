//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Month};

/// Parse a user-supplied amount such as "12", "12.5" or "$1,250.00"
pub fn parse_amount(input: &str) -> FintrackResult<Money> {
    Money::parse(input).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50'. Error: {}",
            input, e
        ))
    })
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(input: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FintrackError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse an optional YYYY-MM month, defaulting to the current month
pub fn parse_month_or_current(input: Option<&str>) -> FintrackResult<Month> {
    match input {
        Some(s) => s.parse().map_err(|_| {
            FintrackError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", s))
        }),
        None => Ok(Month::current()),
    }
}
