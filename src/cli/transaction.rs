//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::settings::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_table};
use crate::error::FintrackResult;
use crate::models::{category, TransactionData, TransactionKind};
use crate::reports::sort_newest_first;
use crate::services::{TransactionPatch, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction (an expense unless --income is given)
    Add {
        /// Amount (e.g., "12", "12.50", "$12.50")
        amount: String,
        /// Category id (e.g., "food", "transport")
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Record as income
        #[arg(long)]
        income: bool,
    },
    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only transactions in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or unique prefix)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Change the type to income
        #[arg(long, conflicts_with = "expense")]
        income: bool,
        /// Change the type to expense
        #[arg(long)]
        expense: bool,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or unique prefix)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            description,
            income,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            let mut data = TransactionData::new(kind, amount, date, category);
            if let Some(description) = description {
                data = data.with_description(description);
            }

            let txn = service.add(data)?;
            let entry = category::resolve(txn.category());

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date().format(&settings.date_format));
            println!("  Type:     {}", txn.kind());
            println!(
                "  Amount:   {}",
                txn.amount().format_with_symbol(&settings.currency_symbol)
            );
            println!("  Category: {} {}", entry.icon, entry.name);
        }

        TransactionCommands::List { limit, category } => {
            let mut transactions = service.list()?;
            if let Some(filter) = category {
                let id = category::lookup(&filter)
                    .map(|c| c.id.to_string())
                    .unwrap_or(filter);
                transactions.retain(|t| t.category() == id);
            }
            sort_newest_first(&mut transactions);
            let total = transactions.len();
            transactions.truncate(limit);

            print!("{}", format_transaction_table(&transactions, settings));
            println!("Showing {} of {} transactions", transactions.len(), total);
        }

        TransactionCommands::Show { id } => {
            let txn = service.resolve(&id)?;
            print!("{}", format_transaction_details(&txn, settings));
        }

        TransactionCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
            income,
            expense,
        } => {
            let txn = service.resolve(&id)?;

            let kind = if income {
                Some(TransactionKind::Income)
            } else if expense {
                Some(TransactionKind::Expense)
            } else {
                None
            };

            let patch = TransactionPatch {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                description,
                category,
                kind,
            };

            if patch.is_empty() {
                println!("Nothing to change. Pass at least one of --amount, --category, --date, --description, --income or --expense.");
                return Ok(());
            }

            let updated = service.update(&txn.id, patch)?;
            println!("Updated transaction: {}", updated.id);
            print!("{}", format_transaction_details(&updated, settings));
        }

        TransactionCommands::Delete { id } => {
            let txn = service.resolve(&id)?;
            let deleted = service.delete(&txn.id)?;
            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.date(),
                deleted.amount().format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
