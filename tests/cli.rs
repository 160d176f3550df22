use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn means_test(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("means-test").unwrap();
    cmd.env("MEANS_TEST_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("MEANS_TEST_STANDARDS");
    cmd
}

#[test]
fn evaluate_below_median_passes() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--household-size", "1", "--income", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Means Test: PASS"))
        .stdout(predicate::str::contains("$77,221.00"))
        .stdout(predicate::str::contains("below median income, qualifies without further test"));
}

#[test]
fn evaluate_json_output() {
    let dir = TempDir::new().unwrap();
    let output = means_test(&dir)
        .args([
            "evaluate", "--state", "CA", "--income", "8000", "--expenses", "4000", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"]["is_above_median"], true);
    assert_eq!(value["outcome"]["allowances"]["national_standards"], 106_500);
    assert_eq!(value["outcome"]["policy"], "simplified");
}

#[test]
fn evaluate_deferred_policy_from_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"disposable_income_policy": "deferred"}"#,
    )
    .unwrap();

    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "8000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Means Test: UNDETERMINED"));

    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "8000", "--policy", "simplified"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UNDETERMINED").not());
}

#[test]
fn evaluate_from_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.csv");
    fs::write(
        &ledger,
        "month,gross,net,source,payer\n\
         2025-01,3000,,employment,Acme\n\
         2025-02,3000,,employment,Acme\n\
         2025-03,3000,,employment,Acme\n",
    )
    .unwrap();

    means_test(&dir)
        .args(["evaluate", "--state", "TX", "--ledger"])
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,500.00"));
}

#[test]
fn evaluate_rejects_negative_income() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn evaluate_rejects_unrepresentable_income() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "800000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"))
        .stderr(predicate::str::contains("panicked").not());

    // parses, but twelve months of it does not fit
    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "9000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Annual income is too large"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn evaluate_rejects_malformed_amounts() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "4200.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimal places"));

    means_test(&dir)
        .args(["evaluate", "--state", "CA", "--income", "100", "--expenses=--5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));
}

#[test]
fn evaluate_above_median_with_no_debt() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args([
            "evaluate", "--state", "CA", "--income", "8000", "--expenses", "7900", "--format", "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""presumption_of_abuse": true"#))
        .stdout(predicate::str::contains(r#""passes": false"#));
}

#[test]
fn evaluate_requires_income_or_ledger() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["evaluate", "--state", "CA"])
        .assert()
        .failure();
}

#[test]
fn cmi_reports_incomplete_ledger() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.csv");
    fs::write(&ledger, "month,gross\n2025-01,4500\n2025-02,4500\n").unwrap();

    means_test(&dir)
        .arg("cmi")
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,500.00"))
        .stdout(predicate::str::contains("only 2 of 6 months"));
}

#[test]
fn cmi_bad_row_names_line() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("ledger.csv");
    fs::write(&ledger, "month,gross\n2025-01,4500\nnot-a-month,4500\n").unwrap();

    means_test(&dir)
        .arg("cmi")
        .arg(&ledger)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn allowances_for_metro_county() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args([
            "allowances", "--state", "CA", "--county", "Los Angeles", "--vehicles", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Los Angeles metro area"))
        .stdout(predicate::str::contains("$1,065.00"));
}

#[test]
fn median_lookup() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .args(["median", "--state", "California", "--household-size", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$77,221.00"));

    means_test(&dir)
        .args(["median", "--state", "GU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("national estimate"));
}

#[test]
fn tables_export_then_load() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("standards.json");

    means_test(&dir)
        .args(["tables", "export"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-04-01"));
    assert!(export.exists());

    means_test(&dir)
        .args(["tables", "show", "--standards"])
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Effective date:      2025-04-01"))
        .stdout(predicate::str::contains("standards.json"));
}

#[test]
fn relative_standards_override_uses_working_directory() {
    let config_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    means_test(&config_dir)
        .args(["tables", "export"])
        .arg(work_dir.path().join("mytables.json"))
        .assert()
        .success();

    means_test(&config_dir)
        .current_dir(work_dir.path())
        .args(["tables", "show", "--standards", "mytables.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded from:         mytables.json"));

    means_test(&config_dir)
        .current_dir(work_dir.path())
        .args(["evaluate", "--state", "CA", "--income", "3000", "--standards", "mytables.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Means Test: PASS"));

    // the same relative name is looked up in the config dir only from the settings file
    fs::write(
        config_dir.path().join("config.json"),
        r#"{"standards_file": "mytables.json"}"#,
    )
    .unwrap();
    means_test(&config_dir)
        .current_dir(work_dir.path())
        .args(["tables", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load standards tables"));
}

#[test]
fn config_and_init() {
    let dir = TempDir::new().unwrap();
    means_test(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Disposable income policy: simplified"));

    means_test(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());
}
