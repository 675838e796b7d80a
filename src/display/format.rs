//! Formatting helpers shared by the terminal views

use crate::models::{Money, Transaction};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a percentage that may be undefined (no denominator)
pub fn format_utilization(pct: Option<f64>) -> String {
    match pct {
        Some(pct) if pct.is_finite() => format!("{:.1}%", pct),
        _ => "N/A".to_string(),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a transaction amount with a leading `+` for income and `-` for expenses
pub fn format_signed(txn: &Transaction, symbol: &str) -> String {
    let sign = if txn.is_income() { '+' } else { '-' };
    format!("{}{}", sign, txn.amount().abs().format_with_symbol(symbol))
}

/// Format a section header with an underline
pub fn header(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count().max(40)))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
