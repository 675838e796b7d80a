//! Budget CLI commands
//!
//! Implements CLI commands for setting, removing, and reviewing monthly
//! category budgets.

use clap::Subcommand;

use super::{parse_amount, parse_month_or_current};
use crate::config::settings::Settings;
use crate::display::budget::{format_available_categories, format_budget_overview};
use crate::error::FintrackResult;
use crate::models::{category, Month};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly limit for a category
    Add {
        /// Category id or name
        category: String,
        /// Monthly limit (e.g., "400" or "400.00")
        amount: String,
    },
    /// Remove the budget for a category
    Delete {
        /// Category id or name
        category: String,
    },
    /// Show every budget with its spending for the month
    List {
        /// Month to compute spending for (YYYY-MM), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List categories that do not have a budget yet
    Available,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    match cmd {
        BudgetCommands::Add { category, amount } => {
            let amount = parse_amount(&amount)?;
            let budget = BudgetService::new(storage).add(&category, amount)?;
            let entry = category::resolve(&budget.category);

            println!(
                "Set budget for {} {}: {} per month",
                entry.icon,
                entry.name,
                budget.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!(
                "  Spent this month: {}",
                budget.spent.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Delete { category } => {
            let budget = BudgetService::new(storage).delete(&category)?;
            println!(
                "Deleted budget for {}",
                category::resolve(&budget.category).name
            );
        }

        BudgetCommands::List { month } => {
            let month: Month = parse_month_or_current(month.as_deref())?;
            // A non-current month is a read-only view; keep stored `spent`
            // tied to the current month.
            let budgets = if month == Month::current() {
                BudgetService::new(storage).list()?
            } else {
                let transactions = storage.transactions.list()?;
                let mut budgets = storage.budgets.list()?;
                for b in &mut budgets {
                    b.recompute_spent(&transactions, month);
                }
                budgets
            };
            print!("{}", format_budget_overview(&budgets, month, settings));
        }

        BudgetCommands::Available => {
            let available = BudgetService::new(storage).available_categories()?;
            print!("{}", format_available_categories(&available));
        }
    }

    Ok(())
}
