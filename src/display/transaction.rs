//! Transaction display formatting
//!
//! Renders transaction listings as tables and single transactions as
//! detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_signed, truncate};
use crate::config::settings::Settings;
use crate::models::{category, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        let entry = category::resolve(txn.category());
        Self {
            id: txn.id.short().to_string(),
            date: txn.date().format(&settings.date_format).to_string(),
            category: format!("{} {}", entry.icon, entry.name),
            description: truncate(txn.description(), 32),
            amount: format_signed(txn, &settings.currency_symbol),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let entry = category::resolve(txn.category());
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date().format(&settings.date_format)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_signed(txn, &settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {} {}\n", entry.icon, entry.name));
    if entry.id != txn.category() {
        output.push_str(&format!("             (stored as '{}')\n", txn.category()));
    }
    if !txn.description().is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description()));
    }

    output
}
