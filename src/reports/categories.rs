//! Expense totals by category
//!
//! Unknown category ids are counted under the catch-all category.

use serde::Serialize;

use crate::models::{category, Category, Money, Transaction};

/// Total expenses for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: &'static Category,
    pub amount: Money,
    /// Share of all expenses in the input, 0-100
    pub percentage: f64,
}

/// Group expenses by category and sort by total, largest first
///
/// Ties keep the order in which the categories first appear.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<(&'static Category, Money)> = Vec::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        let entry = category::resolve(txn.category());
        match totals.iter_mut().find(|(c, _)| c.id == entry.id) {
            Some((_, amount)) => *amount += txn.amount(),
            None => totals.push((entry, txn.amount())),
        }
    }

    let grand_total: Money = totals.iter().map(|(_, amount)| *amount).sum();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: amount.percent_of(grand_total).unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionData, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, cents: i64, category: &str) -> Transaction {
        Transaction::new(
            TransactionId::new(),
            TransactionData::new(
                kind,
                Money::from_cents(cents),
                NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
                category,
            ),
        )
    }

    #[test]
    fn test_sorted_descending_and_sums_to_total() {
        let transactions = vec![
            txn(TransactionKind::Expense, 1000, "food"),
            txn(TransactionKind::Expense, 5000, "travel"),
            txn(TransactionKind::Expense, 2500, "food"),
            txn(TransactionKind::Income, 90000, "other"),
        ];

        let totals = category_totals(&transactions);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category.id, "travel");
        assert_eq!(totals[1].category.id, "food");
        assert_eq!(totals[1].amount, Money::from_cents(3500));

        let sum: Money = totals.iter().map(|t| t.amount).sum();
        assert_eq!(sum, Money::from_cents(8500));

        let pct: f64 = totals.iter().map(|t| t.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_categories_fall_back_to_other() {
        let transactions = vec![
            txn(TransactionKind::Expense, 100, "groceries"),
            txn(TransactionKind::Expense, 200, "other"),
            txn(TransactionKind::Expense, 300, "pets"),
        ];

        let totals = category_totals(&transactions);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category.name, "Other");
        assert_eq!(totals[0].amount, Money::from_cents(600));
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let transactions = vec![
            txn(TransactionKind::Expense, 100, "shopping"),
            txn(TransactionKind::Expense, 100, "bills"),
        ];

        let totals = category_totals(&transactions);
        assert_eq!(totals[0].category.id, "shopping");
        assert_eq!(totals[1].category.id, "bills");
    }

    #[test]
    fn test_no_expenses() {
        assert!(category_totals(&[txn(TransactionKind::Income, 100, "food")]).is_empty());
    }
}
