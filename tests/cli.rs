use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env_remove("FINTRACK_LOG");
    cmd
}

fn add(dir: &TempDir, kind: &str, amount: &str, category: &str, date: &str) -> String {
    let output = fintrack(dir)
        .args(["transaction", "add", kind, amount, category, "--date", date])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .unwrap()
        .to_string()
}

#[test]
fn loan_schedule() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "loan", "10000", "5", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment: 856.07"))
        .stdout(predicate::str::contains("Total interest:  272.90"))
        .stdout(predicate::str::contains("Month"));
}

#[test]
fn zero_rate_loan() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "loan", "1200", "0", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly payment: 100.00"));
}

#[test]
fn loan_rejects_zero_term() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "loan", "1000", "5", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn simple_calculators() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "split", "100", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25.00"));

    fintrack(&dir)
        .args(["calc", "roi", "1000", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("500.00"));

    fintrack(&dir)
        .args(["calc", "inflation", "1000", "3", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1060.90"))
        .stdout(predicate::str::contains("-60.90"));
}

#[test]
fn split_rejects_negative_people() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["calc", "split", "100", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Base currency: EUR"));
}

#[test]
fn analytics_report() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "1000", "salary", "2024-01-10");
    add(&dir, "expense", "250", "home", "2024-01-12");
    add(&dir, "expense", "99", "travel", "2023-06-01");

    fintrack(&dir)
        .args(["report", "analytics", "--range", "month", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€750.00"))
        .stdout(predicate::str::contains("75%"))
        .stdout(predicate::str::contains("1. home"))
        .stdout(predicate::str::contains("travel").not());
}

#[test]
fn dashboard_and_daily() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "100", "salary", "2024-01-01");
    add(&dir, "expense", "40", "pets", "2024-01-01");

    fintrack(&dir)
        .args(["report", "dashboard", "--as-of", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: €60.00"));

    fintrack(&dir)
        .args(["report", "daily", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance on 2024-01-01: €60.00"));
}

#[test]
fn edit_and_delete_by_prefix() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, "expense", "12.50", "gifts", "2024-02-01");
    let prefix = &id[..8];

    fintrack(&dir)
        .args(["transaction", "edit", prefix, "--kind", "income", "--amount", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income"));

    fintrack(&dir)
        .args(["transaction", "show", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      20.00"));

    fintrack(&dir)
        .args(["transaction", "delete", prefix])
        .assert()
        .success();

    fintrack(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn invalid_date_is_rejected() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .args(["transaction", "add", "expense", "5", "home", "--date", "2024-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn search_by_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "30", "Home rent", "2024-03-01");
    add(&dir, "expense", "5", "pets", "2024-03-02");

    fintrack(&dir)
        .args(["transaction", "search", "--category", "RENT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home rent"))
        .stdout(predicate::str::contains("pets").not());
}

#[test]
fn export_and_import_csv() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "12.5", "home", "2024-01-03");
    add(&dir, "income", "100", "salary", "2024-01-01");

    fintrack(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Type,Category,Amount,Date\nincome,salary,100.0,2024-01-01\nexpense,home,12.5,2024-01-03\n",
        ));

    let other = TempDir::new().unwrap();
    let file = other.path().join("import.csv");
    std::fs::write(
        &file,
        "Type,Category,Amount,Date\ningreso,salario,10.0,2024-01-01\ngasto,ropa,2.5,2024-01-02\n",
    )
    .unwrap();

    fintrack(&other)
        .args(["import", "csv"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transactions."));

    fintrack(&other)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ropa"))
        .stdout(predicate::str::contains("salario"));
}

#[test]
fn import_reports_bad_row() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.csv");
    std::fs::write(&file, "Type,Category,Amount,Date\nexpense,home,abc,2024-01-01\n").unwrap();

    fintrack(&dir)
        .args(["import", "csv"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 1"));
}

#[test]
fn savings_goal() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "500", "salary", "2024-01-01");

    fintrack(&dir)
        .args(["goal", "set", "1000", "2024-01-11"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["goal", "show", "--as-of", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50%"))
        .stdout(predicate::str::contains("Save €50.00 per day for 10 days"));

    fintrack(&dir).args(["goal", "clear"]).assert().success();

    fintrack(&dir)
        .args(["goal", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn currency_without_snapshot_degrades() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["currency", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exchange rates available"));

    fintrack(&dir)
        .args(["currency", "rate", "EUR", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 EUR = 1 USD"));
}

#[test]
fn currency_with_snapshot() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("rates.json"),
        r#"{"base":"EUR","date":"2024-05-01","rates":{"USD":1.5,"GBP":0.5,"XAU":0.001}}"#,
    )
    .unwrap();

    fintrack(&dir)
        .args(["currency", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"))
        .stdout(predicate::str::contains("EUR"))
        .stdout(predicate::str::contains("GBP"))
        .stdout(predicate::str::contains("XAU").not());

    fintrack(&dir)
        .args(["currency", "convert", "100", "EUR", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00 EUR = 150.00 USD"));

    add(&dir, "income", "100", "salary", "2024-01-10");
    fintrack(&dir)
        .args([
            "report", "analytics", "--range", "month", "--as-of", "2024-01-15", "--currency", "USD",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$150.00"));
}
