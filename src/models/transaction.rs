//! Transaction model
//!
//! A transaction is a single income or expense record. The persisted shape is
//! `{"id", "amount", "date", "description", "category", "type"}`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::period::Month;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// Everything about a transaction except its identifier
///
/// This is what the user submits when adding or editing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    /// Positive amount; direction comes from `kind`
    pub amount: Money,

    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    /// Category id (see `models::category`); not checked against the registry
    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl TransactionData {
    /// Create transaction data with an empty description
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            date,
            description: String::new(),
            category: category.into(),
            kind,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the input rules applied before data reaches the store
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        Ok(())
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(flatten)]
    pub data: TransactionData,
}

impl Transaction {
    /// Attach an identifier to submitted data
    pub fn new(id: TransactionId, data: TransactionData) -> Self {
        Self { id, data }
    }

    pub fn amount(&self) -> Money {
        self.data.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.data.date
    }

    pub fn category(&self) -> &str {
        &self.data.category
    }

    pub fn description(&self) -> &str {
        &self.data.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.data.kind
    }

    pub fn is_expense(&self) -> bool {
        self.data.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.data.kind == TransactionKind::Income
    }

    /// Check if the transaction is dated within `month`
    pub fn in_month(&self, month: Month) -> bool {
        month.contains(self.data.date)
    }

    /// Signed amount: positive for income, negative for expenses
    pub fn signed_amount(&self) -> Money {
        match self.data.kind {
            TransactionKind::Income => self.data.amount,
            TransactionKind::Expense => -self.data.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.data.date, self.data.kind, self.data.amount, self.data.category
        )?;
        if !self.data.description.is_empty() {
            write!(f, " ({})", self.data.description)?;
        }
        Ok(())
    }
}

/// Input rules a transaction must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::MissingCategory => write!(f, "A category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
