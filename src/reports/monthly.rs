//! Monthly expense series
//!
//! Expense totals per calendar month, oldest first, limited to the most
//! recent months that have any expenses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, Month, Transaction};

/// Number of months kept in the series
pub const MONTHLY_SERIES_LEN: usize = 6;

/// Total expenses for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: Month,
    pub amount: Money,
}

impl MonthlyTotal {
    /// Chart label, e.g. "Jan 2025"
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Group expenses by month, sum them, and keep the latest six months
/// in chronological order
pub fn monthly_expense_series(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<Month, Money> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *by_month.entry(Month::of(txn.date())).or_default() += txn.amount();
    }

    let skip = by_month.len().saturating_sub(MONTHLY_SERIES_LEN);
    by_month
        .into_iter()
        .skip(skip)
        .map(|(month, amount)| MonthlyTotal { month, amount })
        .collect()
}
