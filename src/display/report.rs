//! Report formatting for terminal output
//!
//! Renders the dashboard, the chart views, and the insights list.

use super::budget::format_budget_row;
use super::format::{format_bar, format_money, format_percentage, format_utilization, header};
use super::transaction::format_transaction_table;
use crate::config::settings::Settings;
use crate::models::Budget;
use crate::reports::{CategoryTotal, DashboardSummary, Insight, MonthlyTotal, Tone};

const CHART_WIDTH: usize = 30;

/// Budgets shown on the dashboard
pub const DASHBOARD_BUDGETS: usize = 5;

/// Shown when there is nothing to derive insights from
pub const NO_INSIGHTS_MESSAGE: &str = "Add more transactions to get personalized insights";

/// Format the dashboard: summary totals, recent transactions, and the
/// first few budgets
pub fn format_dashboard(
    summary: &DashboardSummary,
    budgets: &[Budget],
    settings: &Settings,
) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = header(&format!("Dashboard for {}", summary.month.label()));

    output.push_str(&format!(
        "Income:            {:>14}\n",
        format_money(summary.income, symbol)
    ));
    output.push_str(&format!(
        "Expenses:          {:>14}\n",
        format_money(summary.expenses, symbol)
    ));
    output.push_str(&format!(
        "Net:               {:>14}\n",
        format_money(summary.net, symbol)
    ));
    output.push_str(&format!(
        "Budget utilization:{:>14}",
        format_utilization(summary.budget_utilization)
    ));
    if summary.total_budget.is_positive() {
        output.push_str(&format!(
            "  (of {})",
            format_money(summary.total_budget, symbol)
        ));
    }
    output.push_str("\n\n");

    output.push_str("Recent transactions\n");
    output.push_str(&format_transaction_table(&summary.recent, settings));

    if !budgets.is_empty() {
        output.push_str("\nBudgets\n");
        for budget in budgets.iter().take(DASHBOARD_BUDGETS) {
            output.push_str(&format_budget_row(budget, settings));
        }
    }

    output
}

/// Format the monthly expense series as a horizontal bar chart
pub fn format_monthly_chart(series: &[MonthlyTotal], settings: &Settings) -> String {
    let mut output = header("Monthly expenses");
    if series.is_empty() {
        output.push_str("No expenses recorded yet.\n");
        return output;
    }

    let max = series
        .iter()
        .map(|m| m.amount.as_decimal())
        .fold(0.0_f64, f64::max);

    for point in series {
        output.push_str(&format!(
            "{:<9} {} {:>12}\n",
            point.label(),
            format_bar(point.amount.as_decimal(), max, CHART_WIDTH),
            format_money(point.amount, &settings.currency_symbol)
        ));
    }
    output
}

/// Format expense totals by category with their share of the total
pub fn format_category_chart(totals: &[CategoryTotal], settings: &Settings) -> String {
    let mut output = header("Spending by category");
    if totals.is_empty() {
        output.push_str("No expenses recorded yet.\n");
        return output;
    }

    for total in totals {
        output.push_str(&format!(
            "{} {:<18} {} {:>12} {:>6}\n",
            total.category.icon,
            total.category.name,
            format_bar(total.percentage, 100.0, CHART_WIDTH),
            format_money(total.amount, &settings.currency_symbol),
            format_percentage(total.percentage)
        ));
    }
    output
}

fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Warning => "[!]",
        Tone::Positive => "[+]",
        Tone::Info => "[i]",
    }
}

/// Format the insights list
pub fn format_insights(insights: &[Insight]) -> String {
    let mut output = header("Insights");
    if insights.is_empty() {
        output.push_str(NO_INSIGHTS_MESSAGE);
        output.push('\n');
        return output;
    }

    for insight in insights {
        output.push_str(&format!(
            "{} {}\n    {}\n",
            tone_marker(insight.tone()),
            insight.title(),
            insight.description()
        ));
    }
    output
}
