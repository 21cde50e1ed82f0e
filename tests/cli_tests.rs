//! End-to-end tests for the fintrack binary
//!
//! Each test runs against its own temporary data directory via the
//! FINTRACK_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

fn add_expense(data_dir: &TempDir, amount: &str, category: &str, description: &str) {
    fintrack(data_dir)
        .args([
            "tx",
            "add",
            "--kind",
            "expense",
            "--amount",
            amount,
            "--category",
            category,
            "--description",
            description,
        ])
        .assert()
        .success();
}

#[test]
fn add_and_list_transaction() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args([
            "tx",
            "add",
            "--kind",
            "income",
            "--amount",
            "1000",
            "--category",
            "Salary",
            "--description",
            "Paycheck",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Income"));

    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paycheck"))
        .stdout(predicate::str::contains("+$1000.00"));
}

#[test]
fn add_rejects_zero_amount() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args([
            "tx",
            "add",
            "--kind",
            "expense",
            "--amount",
            "0",
            "--category",
            "Food",
            "--description",
            "Nothing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));

    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn delete_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "12.50", "Food", "Lunch");

    fintrack(&data_dir)
        .args(["tx", "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn delete_with_confirmation_removes_transaction() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "12.50", "Food", "Lunch");

    // Recover the full ID from the JSON export
    let output = fintrack(&data_dir)
        .args(["export", "json"])
        .output()
        .unwrap();
    let exported: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let id = exported[0]["id"].as_str().unwrap().to_string();

    fintrack(&data_dir)
        .args(["tx", "delete", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn export_csv_has_fixed_header() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "50", "Food", "Groceries");

    fintrack(&data_dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Date,Type,Category,Description,Amount",
        ))
        .stdout(predicate::str::contains("Expense,Food,Groceries,50.00"));
}

#[test]
fn import_round_trip_replaces_collection() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "50", "Food", "Groceries");

    let export_path = data_dir.path().join("export.json");
    fintrack(&data_dir)
        .args(["export", "json", "--output", export_path.to_str().unwrap()])
        .assert()
        .success();

    add_expense(&data_dir, "20", "Shopping", "Socks");

    fintrack(&data_dir)
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transactions"));

    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Socks").not());
}

#[test]
fn import_rejects_non_array() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "50", "Food", "Groceries");

    let bad_path = data_dir.path().join("bad.json");
    std::fs::write(&bad_path, r#"{"transactions": []}"#).unwrap();

    fintrack(&data_dir)
        .args(["import", bad_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a JSON array"));

    // Collection untouched
    fintrack(&data_dir)
        .args(["tx", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn stats_reports_totals() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "50", "Food", "Groceries");
    add_expense(&data_dir, "150", "Housing", "Utilities");

    fintrack(&data_dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:"))
        .stdout(predicate::str::contains("$200.00"))
        .stdout(predicate::str::contains("-$200.00"))
        .stdout(predicate::str::contains("Top spending by category:"));
}

#[test]
fn goal_lifecycle() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args(["goal", "add", "Vacation", "1200", "--icon", "✈️"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added goal"));

    fintrack(&data_dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation"))
        .stdout(predicate::str::contains("$0.00 / $1200.00"));

    fintrack(&data_dir)
        .args(["goal", "delete", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn theme_toggle_persists() {
    let data_dir = TempDir::new().unwrap();

    fintrack(&data_dir)
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    fintrack(&data_dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:    dark"));
}
