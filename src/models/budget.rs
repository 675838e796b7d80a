//! Budget model
//!
//! A budget is a monthly spending ceiling for one category. `spent` is derived
//! from the transaction set and is only ever written by `recompute_spent`.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::Month;
use super::transaction::Transaction;

/// Fraction of the limit above which a budget counts as "near" its limit
pub const NEAR_LIMIT_RATIO: (i64, i64) = (4, 5);

/// A per-category monthly limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Category id; at most one budget per category
    pub category: String,

    /// Monthly limit
    pub amount: Money,

    /// Current-month expenses in this category as of the last recomputation
    #[serde(default)]
    pub spent: Money,
}

impl Budget {
    /// Create a budget with nothing spent
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
            spent: Money::zero(),
        }
    }

    /// Set `spent` to the sum of `month`'s expenses in this budget's category
    pub fn recompute_spent(&mut self, transactions: &[Transaction], month: Month) {
        self.spent = spent_in_month(transactions, &self.category, month);
    }

    /// Spending strictly above the limit
    pub fn is_over(&self) -> bool {
        self.spent > self.amount
    }

    /// Within the limit but above 80% of it
    pub fn is_near_limit(&self) -> bool {
        let (num, den) = NEAR_LIMIT_RATIO;
        // spent / amount > num / den, in integer cents
        self.spent <= self.amount && self.spent.cents() * den > self.amount.cents() * num
    }

    /// Percentage of the limit used; `None` for a zero limit
    pub fn utilization(&self) -> Option<f64> {
        self.spent.percent_of(self.amount)
    }

    /// Amount left before the limit (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.amount - self.spent
    }
}

/// Sum of expense amounts in `category` dated within `month`
pub fn spent_in_month(transactions: &[Transaction], category: &str, month: Month) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category() == category && t.in_month(month))
        .map(|t| t.amount())
        .sum()
}
