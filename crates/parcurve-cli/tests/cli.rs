//! End-to-end tests of the `parcurve` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn parcurve() -> Command {
    let mut cmd = Command::cargo_bin("parcurve").unwrap();
    cmd.env_remove("PARCURVE_CONFIG").env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_bootstrap_table_output() {
    parcurve()
        .args(["bootstrap", "--tenors", "1Y,5Y,10Y", "--rates", "3,4,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pillars"))
        .stdout(predicate::str::contains("10Y"))
        .stdout(predicate::str::contains("0.970553"))
        .stdout(predicate::str::contains("3/3 quotes repriced"));
}

#[test]
fn test_bootstrap_json_output() {
    let output = parcurve()
        .args(["--format", "json", "bootstrap", "-t", "1Y,5Y,10Y", "-r", "3,4,5"])
        .args(["--query", "2.5,7.5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pillars = json["pillars"].as_array().unwrap();
    assert_eq!(pillars.len(), 3);
    assert_eq!(pillars[0]["tenor"], "1Y");
    assert!((pillars[0]["discount_factor"].as_f64().unwrap() - 0.9705525611699741).abs() < 1e-12);

    let queries = json["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 2);
    assert!((queries[1]["discount_factor"].as_f64().unwrap() - 0.6949809994406267).abs() < 1e-12);
    assert_eq!(json["repricing"]["valid"], true);
}

#[test]
fn test_bootstrap_from_csv_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "tenor,rate").unwrap();
    writeln!(file, "10Y,3.8").unwrap();
    writeln!(file, "1Y,3.2").unwrap();
    writeln!(file, "2Y,3.35").unwrap();

    parcurve()
        .args(["--format", "csv", "bootstrap", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "kind,tenor,maturity,par_rate,zero_rate,discount_factor",
        ))
        .stdout(predicate::str::contains("pillar,1Y,1.0,0.032"));
}

#[test]
fn test_minimal_output() {
    parcurve()
        .args(["-f", "minimal", "bootstrap", "-t", "1", "-r", "3"])
        .assert()
        .success()
        .stdout("1 0.970553\n");
}

#[test]
fn test_strict_mode_fails_on_gap() {
    parcurve()
        .args(["bootstrap", "-t", "1Y,5Y", "-r", "3,4", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interpolation gap"))
        .stderr(predicate::str::contains("maturity 5.0000Y"));
}

#[test]
fn test_strict_mode_with_dense_quotes() {
    parcurve()
        .args(["bootstrap", "-t", "3M,6M,9M,1Y", "-r", "3,3.1,3.2,3.3", "--strict"])
        .assert()
        .success();
}

#[test]
fn test_mismatched_lengths_fail() {
    parcurve()
        .args(["bootstrap", "-t", "1Y,2Y,3Y", "-r", "3,4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same length"));
}

#[test]
fn test_invalid_tenor_fails() {
    parcurve()
        .args(["bootstrap", "-t", "1Q", "-r", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tenor"));
}

#[test]
fn test_missing_quotes_fail() {
    parcurve()
        .args(["bootstrap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument"));
}

#[test]
fn test_date_tenors_use_settlement() {
    let output = parcurve()
        .args(["-f", "json", "bootstrap", "-t", "2025-01-15", "-r", "3"])
        .args(["--settlement", "2024-01-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pillars"][0]["maturity"].as_f64().unwrap(), 366.0 / 365.0);
}

#[test]
fn test_config_file_sets_frequency_and_precision() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[bootstrap]\npayment_interval = 0.5\n\n[output]\nprecision = 10").unwrap();

    parcurve()
        .args(["-f", "minimal", "bootstrap", "-t", "1,2", "-r", "3,3.5", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("1 0.9706617486\n2 0.9327139977\n");
}

#[test]
fn test_frequency_flag_overrides_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[bootstrap]\npayment_interval = 0.25").unwrap();

    parcurve()
        .args(["-f", "minimal", "bootstrap", "-t", "1,2", "-r", "3,3.5"])
        .args(["--frequency", "semi-annual", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 0.970662\n"));
}

#[test]
fn test_show_repricing() {
    parcurve()
        .args(["bootstrap", "-t", "1Y,5Y,10Y", "-r", "3,4,5", "--show-repricing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repricing"))
        .stdout(predicate::str::contains("Par Residual"));
}

#[test]
fn test_config_command_prints_defaults() {
    parcurve()
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("payment_interval = 0.25"))
        .stdout(predicate::str::contains("compounding = \"continuous\""));
}
