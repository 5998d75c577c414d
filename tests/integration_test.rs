//! Integration tests for the sales ledger CLI.
//!
//! These tests run the actual binary against a `sprzedaz.csv` written into a
//! temporary working directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Create a temporary working directory containing a `sprzedaz.csv`.
fn working_dir(csv: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sprzedaz.csv"), csv).unwrap();
    dir
}

fn ledger_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sales-ledger").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_prints_one_line_per_record_in_file_order() {
    let dir = working_dir(
        "data,miasto,sklep,kategoria,towar,cena,sztuk\n\
         2024-01-01,Warszawa,SklepA,Spożywka,Chleb,4.50,2\n\
         2024-01-02,Kraków,SklepB,Nabiał,Mleko,3.20,1\n",
    );

    let assert = ledger_cmd(&dir).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "2024-01-01 Warszawa/SklepA [Spożywka] Chleb: 2 x 4.50 = 9.00"
    );
    assert_eq!(
        lines[1],
        "2024-01-02 Kraków/SklepB [Nabiał] Mleko: 1 x 3.20 = 3.20"
    );
}

#[test]
fn test_header_only_file_prints_nothing() {
    let dir = working_dir("data,miasto,sklep,kategoria,towar,cena,sztuk\n");

    ledger_cmd(&dir)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();

    ledger_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_malformed_row_fails_after_printing_prior_records() {
    let dir = working_dir(
        "data,miasto,sklep,kategoria,towar,cena,sztuk\n\
         2024-01-01,Warszawa,SklepA,Spożywka,Chleb,4.50,2\n\
         2024-01-02,Kraków,SklepB,Nabiał,Mleko,3.20\n",
    );

    ledger_cmd(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Chleb"))
        .stderr(predicate::str::contains("expected 7 fields"));
}

#[test]
fn test_non_numeric_price_fails() {
    let dir = working_dir(
        "data,miasto,sklep,kategoria,towar,cena,sztuk\n\
         2024-01-01,Warszawa,SklepA,Spożywka,Chleb,tanio,2\n",
    );

    ledger_cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"));
}
