use assert_cmd::Command;
use chrono::{Datelike, Duration, Local, NaiveDate};
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env_remove("FINTRACK_LOG");
    cmd
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn last_month() -> NaiveDate {
    let first = today().with_day(1).unwrap();
    first - Duration::days(1)
}

fn add_transaction(dir: &TempDir, args: &[&str]) -> String {
    let output = fintrack(dir)
        .args(["transaction", "add"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .find_map(|l| l.trim().strip_prefix("ID:").map(|id| id.trim().to_string()))
        .unwrap()
}

#[test]
fn no_command_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("fintrack --help"));
}

#[test]
fn category_list_shows_registry() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("healthcare"));
}

#[test]
fn add_and_list_transactions() {
    let dir = TempDir::new().unwrap();
    let date = today().format("%Y-%m-%d").to_string();

    add_transaction(&dir, &["45.99", "--category", "food", "--date", &date, "-m", "Groceries"]);
    add_transaction(&dir, &["$2,000", "--category", "other", "--date", &date, "--income"]);

    fintrack(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$45.99"))
        .stdout(predicate::str::contains("+$2,000.00"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Showing 2 of 2 transactions"));

    let stored = std::fs::read_to_string(dir.path().join("data/finance-transactions.json")).unwrap();
    assert!(stored.contains("\"type\": \"expense\""));
    assert!(stored.contains("45.99"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "add", "0", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero").or(predicate::str::contains("positive")));

    fintrack(&dir)
        .args(["transaction", "add", "abc", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    fintrack(&dir)
        .args(["transaction", "add", "200000000000000000", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    fintrack(&dir)
        .args(["transaction", "add", "5", "--category", "food", "--date", "2025-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn budget_tracks_current_month_spending() {
    let dir = TempDir::new().unwrap();
    let this_month = today().format("%Y-%m-%d").to_string();
    let prev_month = last_month().format("%Y-%m-%d").to_string();

    add_transaction(&dir, &["100", "--category", "food", "--date", &this_month]);
    add_transaction(&dir, &["50", "--category", "food", "--date", &prev_month]);

    fintrack(&dir)
        .args(["budget", "add", "food", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spent this month: $100.00"));

    fintrack(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVER"))
        .stdout(predicate::str::contains("$20.00 over"));

    fintrack(&dir)
        .args(["report", "insights"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're over budget in 1 category"))
        .stdout(predicate::str::contains("decreased").not())
        .stdout(predicate::str::contains("increased by 100.0%"));
}

#[test]
fn recompute_keeps_stored_spent_on_current_month() {
    let dir = TempDir::new().unwrap();
    let this_month = today().format("%Y-%m-%d").to_string();
    let prev_month = last_month().format("%Y-%m-%d").to_string();

    add_transaction(&dir, &["100", "--category", "food", "--date", &this_month]);
    add_transaction(&dir, &["50", "--category", "food", "--date", &prev_month]);
    fintrack(&dir)
        .args(["budget", "add", "food", "80"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["recompute", "--month", &last_month().format("%Y-%m").to_string()])
        .assert()
        .failure();

    fintrack(&dir)
        .arg("recompute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recomputed 1 budgets"));

    let stored = std::fs::read_to_string(dir.path().join("data/finance-budgets.json")).unwrap();
    let budgets: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(budgets[0]["spent"].as_f64(), Some(100.0));
}

#[test]
fn budget_duplicates_and_unknown_categories_fail() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["budget", "add", "food", "100"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["budget", "add", "food", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fintrack(&dir)
        .args(["budget", "add", "rent", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    fintrack(&dir)
        .args(["budget", "available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Dining").not())
        .stdout(predicate::str::contains("Travel"));

    fintrack(&dir)
        .args(["budget", "delete", "food"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets set"));
}

#[test]
fn edit_and_delete_by_id_prefix() {
    let dir = TempDir::new().unwrap();
    let date = today().format("%Y-%m-%d").to_string();
    let id = add_transaction(&dir, &["30", "--category", "food", "--date", &date]);
    let prefix = &id[..8];

    fintrack(&dir)
        .args(["transaction", "edit", prefix, "--amount", "42.10", "--category", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("-$42.10"));

    fintrack(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Transaction"))
        .stdout(predicate::str::contains("category: 'food' -> 'travel'"));

    fintrack(&dir)
        .args(["transaction", "delete", prefix])
        .assert()
        .success();

    fintrack(&dir)
        .args(["transaction", "show", prefix])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn dashboard_without_budgets_shows_na() {
    let dir = TempDir::new().unwrap();
    let date = today().format("%Y-%m-%d").to_string();
    add_transaction(&dir, &["200", "--category", "bills", "--date", &date]);

    fintrack(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"))
        .stdout(predicate::str::contains("NaN").not());

    // no previous month baseline, so no trend
    fintrack(&dir)
        .args(["report", "insights"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compared to last month").not())
        .stdout(predicate::str::contains("Bills & Utilities"));
}

#[test]
fn empty_reports() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["report", "insights", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Add more transactions to get personalized insights",
        ));

    fintrack(&dir)
        .args(["report", "charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));

    fintrack(&dir)
        .args(["report", "charts", "--month", "2025-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn malformed_store_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/finance-transactions.json"), "{not json").unwrap();

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn config_save_writes_settings() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:     $"));

    assert!(dir.path().join("config.json").exists());
}

#[test]
fn unsupported_date_format_uses_default() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();
    let date = today().format("%Y-%m-%d").to_string();
    add_transaction(&dir, &["12", "--category", "food", "--date", &date]);

    fintrack(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(today().format("%b %d, %Y").to_string()));
}
