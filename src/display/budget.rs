//! Budget display formatting
//!
//! Renders each budget with a usage bar, the percentage used, and what is
//! left (or how far over the limit spending went).

use super::format::{format_bar, format_money, format_utilization, header};
use crate::config::settings::Settings;
use crate::models::{category, Budget, Category, Month};

const BAR_WIDTH: usize = 20;

fn status_marker(budget: &Budget) -> &'static str {
    if budget.is_over() {
        "OVER"
    } else if budget.is_near_limit() {
        "NEAR"
    } else {
        ""
    }
}

/// Format a single budget as a two-line block
pub fn format_budget_row(budget: &Budget, settings: &Settings) -> String {
    let entry = category::resolve(&budget.category);
    let symbol = &settings.currency_symbol;

    // bar is capped at full width; the percentage is not
    let pct = budget.utilization();
    let bar = format_bar(pct.unwrap_or(0.0), 100.0, BAR_WIDTH);

    let remaining = budget.remaining();
    let left = if remaining.is_negative() {
        format!("{} over", format_money(remaining.abs(), symbol))
    } else {
        format!("{} left", format_money(remaining, symbol))
    };

    format!(
        "{} {:<20} {:>12} / {:<12} {}\n   {} {:>7} used  {}\n",
        entry.icon,
        entry.name,
        format_money(budget.spent, symbol),
        format_money(budget.amount, symbol),
        status_marker(budget),
        bar,
        format_utilization(pct),
        left,
    )
}

/// Format the budget overview for a month
pub fn format_budget_overview(budgets: &[Budget], month: Month, settings: &Settings) -> String {
    let mut output = header(&format!("Budgets for {}", month.label()));

    if budgets.is_empty() {
        output.push_str("No budgets set. Use 'fintrack budget add' to create one.\n");
        return output;
    }

    for budget in budgets {
        output.push_str(&format_budget_row(budget, settings));
    }

    output
}

/// Format the categories that can still receive a budget
pub fn format_available_categories(categories: &[&'static Category]) -> String {
    if categories.is_empty() {
        return "Every category already has a budget.\n".to_string();
    }

    let mut output = String::from("Categories without a budget:\n");
    for c in categories {
        output.push_str(&format!("  {} {:<20} ({})\n", c.icon, c.name, c.id));
    }
    output
}
