//! Dashboard Summary
//!
//! Headline numbers for one month: income, expenses, net, overall budget
//! utilization, and the most recent transactions.

use serde::Serialize;

use crate::models::{Budget, Money, Month, Transaction, TransactionKind};

use super::{month_total, sort_newest_first};

/// Dashboard summary for a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Month the totals cover
    pub month: Month,
    /// Income dated within the month
    pub income: Money,
    /// Expenses dated within the month
    pub expenses: Money,
    /// Income minus expenses
    pub net: Money,
    /// Sum of all budget limits
    pub total_budget: Money,
    /// Month expenses as a percentage of `total_budget`; `None` with no
    /// budgeted amount to compare against
    pub budget_utilization: Option<f64>,
    /// Newest transactions across all months
    pub recent: Vec<Transaction>,
}

impl DashboardSummary {
    /// Compute the summary for `month`, keeping `recent_count` transactions
    pub fn compute(
        transactions: &[Transaction],
        budgets: &[Budget],
        month: Month,
        recent_count: usize,
    ) -> Self {
        let income = month_total(transactions, month, TransactionKind::Income);
        let expenses = month_total(transactions, month, TransactionKind::Expense);
        let total_budget: Money = budgets.iter().map(|b| b.amount).sum();

        let mut recent = transactions.to_vec();
        sort_newest_first(&mut recent);
        recent.truncate(recent_count);

        Self {
            month,
            income,
            expenses,
            net: income - expenses,
            total_budget,
            budget_utilization: expenses.percent_of(total_budget),
            recent,
        }
    }

    /// Check if the month has no income or expenses
    pub fn is_empty(&self) -> bool {
        self.income.is_zero() && self.expenses.is_zero()
    }
}
