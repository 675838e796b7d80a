//! Reports module for fintrack
//!
//! Everything shown on the dashboard, charts, and insights pages is derived
//! from the transaction and budget lists. Nothing here is persisted except
//! through [`crate::storage::Storage::recompute_budgets`].

pub mod categories;
pub mod dashboard;
pub mod insights;
pub mod monthly;

pub use categories::{category_totals, CategoryTotal};
pub use dashboard::DashboardSummary;
pub use insights::{generate_insights, Insight, Tone};
pub use monthly::{monthly_expense_series, MonthlyTotal, MONTHLY_SERIES_LEN};

use serde::Serialize;

use crate::models::{Budget, Money, Month, Transaction, TransactionKind};

/// Sum of `kind` transactions dated within `month`
pub fn month_total(transactions: &[Transaction], month: Month, kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind() == kind && t.in_month(month))
        .map(|t| t.amount())
        .sum()
}

/// Sum of expenses dated within `month`
pub fn expense_total(transactions: &[Transaction], month: Month) -> Money {
    month_total(transactions, month, TransactionKind::Expense)
}

/// Sum of income dated within `month`
pub fn income_total(transactions: &[Transaction], month: Month) -> Money {
    month_total(transactions, month, TransactionKind::Income)
}

/// Sort by date descending; same-day transactions keep their stored order
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// All derived views for one month, computed together from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedState {
    pub month: Month,
    /// Budgets with `spent` recomputed for `month`
    pub budgets: Vec<Budget>,
    pub monthly: Vec<MonthlyTotal>,
    pub categories: Vec<CategoryTotal>,
    pub insights: Vec<Insight>,
    pub summary: DashboardSummary,
}

impl DerivedState {
    pub fn compute(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: Month,
        recent_count: usize,
    ) -> Self {
        let budgets: Vec<Budget> = budgets
            .iter()
            .cloned()
            .map(|mut b| {
                b.recompute_spent(transactions, month);
                b
            })
            .collect();

        Self {
            month,
            monthly: monthly_expense_series(transactions),
            categories: category_totals(transactions),
            insights: generate_insights(transactions, &budgets, month),
            summary: DashboardSummary::compute(transactions, &budgets, month, recent_count),
            budgets,
        }
    }
}
