//! Spending insights
//!
//! Short observations derived from the current month: the month-over-month
//! expense trend, the top spending category, and budgets that are over or
//! close to their limit.

use serde::Serialize;

use crate::models::{category, Budget, Category, Money, Month, Transaction};

use super::expense_total;

/// How an insight should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warning,
    Positive,
    Info,
}

/// A single generated insight
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Expenses changed compared to the previous calendar month
    SpendingTrend { change_percent: f64 },
    /// Category with the largest share of this month's expenses
    TopCategory {
        category: &'static Category,
        amount: Money,
    },
    OverBudget { count: usize },
    NearBudget { count: usize },
}

impl Insight {
    pub fn tone(&self) -> Tone {
        match self {
            Self::SpendingTrend { change_percent } if *change_percent > 0.0 => Tone::Warning,
            Self::SpendingTrend { .. } => Tone::Positive,
            Self::OverBudget { .. } => Tone::Warning,
            Self::TopCategory { .. } | Self::NearBudget { .. } => Tone::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SpendingTrend { change_percent } if *change_percent > 0.0 => {
                "Spending Increased"
            }
            Self::SpendingTrend { .. } => "Spending Decreased",
            Self::TopCategory { .. } => "Top Spending Category",
            Self::OverBudget { .. } => "Over Budget Alert",
            Self::NearBudget { .. } => "Budget Warning",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::SpendingTrend { change_percent } => format!(
                "Your expenses {} by {:.1}% compared to last month",
                if *change_percent > 0.0 {
                    "increased"
                } else {
                    "decreased"
                },
                change_percent.abs()
            ),
            Self::TopCategory { category, amount } => format!(
                "You spent the most on {} ({}) this month",
                category.name, amount
            ),
            Self::OverBudget { count } => format!(
                "You're over budget in {} {}",
                count,
                plural_category(*count)
            ),
            Self::NearBudget { count } => format!(
                "You're close to your budget limit in {} {}",
                count,
                plural_category(*count)
            ),
        }
    }
}

fn plural_category(count: usize) -> &'static str {
    if count == 1 {
        "category"
    } else {
        "categories"
    }
}

/// Generate insights for `month`
///
/// `budgets` must already have `spent` computed for `month`. Insights are
/// returned in a fixed order: trend, top category, over budget, near budget.
pub fn generate_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: Month,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    let current = expense_total(transactions, month);
    let previous = expense_total(transactions, month.prev());
    if previous.is_positive() && current != previous {
        let delta = current - previous;
        if let Some(change_percent) = delta.percent_of(previous) {
            insights.push(Insight::SpendingTrend { change_percent });
        }
    }

    if let Some((id, amount)) = top_spending_category(transactions, month) {
        insights.push(Insight::TopCategory {
            category: category::resolve(id),
            amount,
        });
    }

    let over = budgets.iter().filter(|b| b.is_over()).count();
    if over > 0 {
        insights.push(Insight::OverBudget { count: over });
    }

    let near = budgets.iter().filter(|b| b.is_near_limit()).count();
    if near > 0 {
        insights.push(Insight::NearBudget { count: near });
    }

    insights
}

/// Category id with the largest expense total in `month`
///
/// Ids are compared as stored; unknown ids are not merged. Ties go to the
/// id seen first.
fn top_spending_category(transactions: &[Transaction], month: Month) -> Option<(&str, Money)> {
    let mut totals: Vec<(&str, Money)> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(month))
    {
        match totals.iter_mut().find(|(id, _)| *id == txn.category()) {
            Some((_, amount)) => *amount += txn.amount(),
            None => totals.push((txn.category(), txn.amount())),
        }
    }

    totals
        .into_iter()
        .fold(None, |best: Option<(&str, Money)>, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        })
}
