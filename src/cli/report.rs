//! Report CLI commands
//!
//! Dashboard, charts, and insights for a month. Each command works on a
//! fresh snapshot of both stores.

use clap::Subcommand;

use super::parse_month_or_current;
use crate::config::settings::Settings;
use crate::display::report::{
    format_category_chart, format_dashboard, format_insights, format_monthly_chart,
};
use crate::error::FintrackResult;
use crate::reports::DerivedState;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses, net, budget utilization, and recent transactions
    Dashboard {
        /// Month (YYYY-MM), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Monthly expense chart and spending by category
    Charts {
        /// Month (YYYY-MM), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Spending trend, top category, and budget warnings
    Insights {
        /// Month (YYYY-MM), defaults to current
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let month = match &cmd {
        ReportCommands::Dashboard { month }
        | ReportCommands::Charts { month }
        | ReportCommands::Insights { month } => parse_month_or_current(month.as_deref())?,
    };

    let transactions = storage.transactions.list()?;
    let budgets = storage.budgets.list()?;
    let state = DerivedState::compute(
        &transactions,
        &budgets,
        month,
        settings.recent_transactions,
    );

    match cmd {
        ReportCommands::Dashboard { .. } => {
            print!("{}", format_dashboard(&state.summary, &state.budgets, settings));
        }
        ReportCommands::Charts { .. } => {
            print!("{}", format_monthly_chart(&state.monthly, settings));
            println!();
            print!("{}", format_category_chart(&state.categories, settings));
        }
        ReportCommands::Insights { .. } => {
            print!("{}", format_insights(&state.insights));
        }
    }

    Ok(())
}
