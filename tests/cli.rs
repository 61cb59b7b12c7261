//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the FINDUAL_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn findual(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("findual").unwrap();
    cmd.env("FINDUAL_DATA_DIR", dir.path());
    cmd
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    findual(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Salary/Pró-labore"));
}

#[test]
fn add_and_list_transaction() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args([
            "transaction", "add", "Groceries", "350.50", "--category", "Food", "--date",
            "2025-03-06",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    findual(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("-R$ 350.50"));
}

#[test]
fn installment_purchase_expands() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args([
            "transaction",
            "installment",
            "New laptop",
            "100.00",
            "3",
            "--date",
            "2025-01-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 3 installments"))
        .stdout(predicate::str::contains("New laptop (1/3)"))
        .stdout(predicate::str::contains("R$ 33.34"));
}

#[test]
fn transfer_records_paired_rows() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args([
            "transfer", "context", "pj", "pf", "3000", "-m", "Pró-labore", "--date", "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Out: Pró-labore"))
        .stdout(predicate::str::contains("In: Pró-labore"));

    // Transfers stay out of month volume
    findual(&dir)
        .args(["report", "dashboard", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month income:   R$ 0.00"));
}

#[test]
fn bank_balance_is_derived() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args(["bank", "add", "Nubank", "--balance", "1500"])
        .assert()
        .success();

    findual(&dir)
        .args([
            "transaction", "add", "Salary", "500", "-t", "income", "--bank", "Nubank", "--date",
            "2025-03-05",
        ])
        .assert()
        .success();
    findual(&dir)
        .args([
            "transaction", "add", "Rent", "200", "--bank", "Nubank", "--date", "2025-03-06",
        ])
        .assert()
        .success();

    findual(&dir)
        .args(["bank", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1800.00"));
}

#[test]
fn recurring_template_projects_without_posting() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args([
            "transaction", "add", "Netflix", "39.90", "--recurring", "--date", "2025-01-15",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("recurring template"));

    findual(&dir)
        .args(["recurring", "project", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-15"));

    // The viewed month's volume does not include the template
    findual(&dir)
        .args(["report", "dashboard", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month expenses: R$ 0.00"));
}

#[test]
fn goal_funding_emits_transaction() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args(["goal", "add", "Emergency fund", "10000"])
        .assert()
        .success();
    findual(&dir)
        .args(["goal", "fund", "Emergency fund", "500", "--date", "2025-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribution: Emergency fund"));

    findual(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contribution: Emergency fund"));
}

#[test]
fn pj_toggle_gates_business_context() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args(["pj", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));

    findual(&dir)
        .args(["transaction", "add", "Server costs", "80", "-x", "pj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PJ support is disabled"));

    findual(&dir).args(["pj", "on"]).assert().success();
    findual(&dir)
        .args(["transaction", "add", "Server costs", "80", "-x", "pj"])
        .assert()
        .success();
}

#[test]
fn edit_replaces_fields_in_place() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args(["category", "add", "Tools"])
        .assert()
        .success();
    findual(&dir)
        .args(["category", "edit", "Tools", "--scope", "pj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated category"));

    findual(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tools"))
        .stdout(predicate::str::contains("PJ"));
}

#[test]
fn export_csv_has_signed_amounts() {
    let dir = TempDir::new().unwrap();

    findual(&dir)
        .args([
            "transaction", "add", "Consulting", "5000", "-t", "income", "-x", "pj", "--date",
            "2025-03-05",
        ])
        .assert()
        .success();

    findual(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID,Date,Description,Category,Amount,Type,Context,Method",
        ))
        .stdout(predicate::str::contains("5000.00,INCOME,PJ,DEBIT"));
}

#[test]
fn reset_wipes_everything() {
    let dir = TempDir::new().unwrap();

    findual(&dir).arg("init").assert().success();
    findual(&dir)
        .args(["transaction", "add", "Coffee", "12"])
        .assert()
        .success();

    // Without --yes nothing happens
    findual(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    findual(&dir)
        .args(["transaction", "list"])
        .assert()
        .stdout(predicate::str::contains("Coffee"));

    findual(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data deleted"));
    findual(&dir)
        .args(["transaction", "list"])
        .assert()
        .stdout(predicate::str::contains("No transactions found"));
}
