use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "tally";

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("TALLY_DATA_DIR", data_dir.path());
    cmd.env_remove("TALLY_LOG");
    cmd
}

#[test]
fn categories_lists_both_types() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Income").and(contains("Salary")))
        .stdout(contains("Expense").and(contains("Utilities")));
}

#[test]
fn categories_filters_by_type() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["categories", "--type", "expense"])
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("Salary").not()));
}

#[test]
fn categories_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .args(["categories", "-t", "transfer"])
        .assert()
        .failure();
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains(dir.path().to_string_lossy().to_string()))
        .stdout(contains("₦").and(contains("Initialized:    no")));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    tally(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"currency_symbol\""));

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:    yes"));
}

#[test]
fn config_reads_existing_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "currency_symbol": "$", "tick_rate_ms": 100 }"#,
    )
    .unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: $").and(contains("100ms")));
}

#[test]
fn malformed_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    tally(&dir).arg("config").assert().failure();
}

#[test]
fn invalid_date_format_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "date_format": "%Q" }"#).unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("date_format"));
}
