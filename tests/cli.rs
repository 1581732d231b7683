use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("EXPENSE_LOG");
    cmd
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "120.50", "--category", "food", "--note", "Lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Lunch"));

    let data = std::fs::read_to_string(dir.path().join("data").join("data.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["category"], "Food");
    assert_eq!(records[0]["amount"], 120.5);
}

#[test]
fn unknown_category_fails_without_writing() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "10", "--category", "Travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));

    assert!(!dir.path().join("data").join("data.json").exists());
}

#[test]
fn summary_for_current_month() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "100", "-c", "Food"])
        .assert()
        .success();
    expense(&dir)
        .args(["add", "30", "-c", "3"])
        .assert()
        .success();

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent: ₹130"))
        .stdout(predicate::str::contains("Top category: Food (₹100)"));
}

#[test]
fn summary_rejects_bad_month() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["summary", "--year", "2024", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month"));
}

#[test]
fn delete_missing_id_fails() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["delete", "12345", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 12345"));
}

#[test]
fn export_writes_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");

    expense(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to export."));
    assert!(!out.exists());

    expense(&dir)
        .args(["add", "45", "-c", "Transport", "-n", "Bus"])
        .assert()
        .success();
    expense(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV exported"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("id,date,amount,category,note\n"));
    assert!(contents.contains(",45,Transport,Bus"));
}

#[test]
fn menu_exit() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn summary_accepts_combined_period() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["summary", "1999-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses for 1999-02."));
}

#[test]
fn history_lists_mutations() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries."));

    expense(&dir)
        .args(["add", "12", "-c", "Health"])
        .assert()
        .success();
    expense(&dir)
        .args(["clear", "--force"])
        .assert()
        .success();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("removed 1 expenses"));
}
