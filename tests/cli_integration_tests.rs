//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{header, three_row_source, write_workbook, Blank, Number, Text};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn demand_import(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("demand-import").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("DEMAND_SOURCE")
        .env_remove("DEMAND_SHEET")
        .env_remove("DEMAND_DB")
        .env_remove("DEMAND_FLEX_DB")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    demand_import(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("demand-import"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    demand_import(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("demand-import"));
}

#[test]
fn test_import_flex_help_shows_mapping_format() {
    let dir = TempDir::new().unwrap();
    demand_import(&dir)
        .args(["import-flex", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("encaminhamento: 5"));
}

// ═══════════════════════════════════════════════════════════════════════════
// DEFAULT RUN
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_run_with_default_paths() {
    let dir = TempDir::new().unwrap();
    three_row_source(&dir.path().join("fonte.xlsx"));

    demand_import(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total columns: 6"))
        .stdout(predicate::str::contains("Column 1 (A): 'NOME'"))
        .stdout(predicate::str::contains("Top 10 demands:"))
        .stdout(predicate::str::contains("Saúde: 1"))
        .stdout(predicate::str::contains("Rows imported: 2"))
        .stdout(predicate::str::contains("Table: demandas"))
        .stderr(predicate::str::contains("Import complete"));

    assert!(dir.path().join("fonte_estruturado.db").exists());
}

#[test]
fn test_default_run_without_source() {
    let dir = TempDir::new().unwrap();

    demand_import(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error analysing spreadsheet"))
        .stdout(predicate::str::contains("No data was imported"))
        .stderr(predicate::str::contains("not found"));

    assert!(!dir.path().join("fonte_estruturado.db").exists());
}

#[test]
fn test_source_from_environment() {
    let dir = TempDir::new().unwrap();
    three_row_source(&dir.path().join("casos.xlsx"));

    demand_import(&dir)
        .env("DEMAND_SOURCE", "casos.xlsx")
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows imported: 2"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SUBCOMMANDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_does_not_create_store() {
    let dir = TempDir::new().unwrap();
    three_row_source(&dir.path().join("fonte.xlsx"));

    demand_import(&dir)
        .arg("inspect")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total rows: 4"))
        .stdout(predicate::str::contains("Row 2: ('Ana', 'Rua A', 111"));

    assert!(!dir.path().join("fonte_estruturado.db").exists());
}

#[test]
fn test_import_then_report_flex() {
    let dir = TempDir::new().unwrap();
    three_row_source(&dir.path().join("fonte.xlsx"));
    fs::write(
        dir.path().join("mapping.yaml"),
        "nome: 5\nendereco: 1\ncontato: 2\ndemanda: 3\ninformacoes: 4\nencaminhamento: 0\n",
    )
    .unwrap();

    demand_import(&dir)
        .args(["import-flex", "--mapping", "mapping.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flexible import: 2 rows"));

    demand_import(&dir)
        .args(["report", "--flex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total records: 2"))
        .stdout(predicate::str::contains("Name: Posto"));
}

#[test]
fn test_import_flex_invalid_mapping_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mapping.yaml"),
        "nome: 0\nendereco: 1\ncontato: 2\ndemanda: 20000\ninformacoes: 4\nencaminhamento: 5\n",
    )
    .unwrap();

    demand_import(&dir)
        .args(["import-flex", "--mapping", "mapping.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid column mapping"));
}

#[test]
fn test_report_without_database() {
    let dir = TempDir::new().unwrap();

    demand_import(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error querying data"));

    assert!(!dir.path().join("fonte_estruturado.db").exists());
}

#[test]
fn test_custom_db_path() {
    let dir = TempDir::new().unwrap();
    three_row_source(&dir.path().join("fonte.xlsx"));

    demand_import(&dir)
        .args(["--db", "outro.db", "import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database: outro.db"));

    assert!(dir.path().join("outro.db").exists());
    assert!(!dir.path().join("fonte_estruturado.db").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// LOG OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_logs_progress_every_fifty_rows() {
    let dir = TempDir::new().unwrap();
    let mut rows = vec![header()];
    for i in 0..120 {
        rows.push(vec![Text("Nome"), Blank, Number(i as f64)]);
    }
    write_workbook(&dir.path().join("fonte.xlsx"), &rows);

    demand_import(&dir)
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows imported: 120"))
        .stderr(predicate::str::contains("Processed 50 rows..."))
        .stderr(predicate::str::contains("Processed 100 rows..."))
        .stderr(predicate::str::contains("Processed 120").not());
}

#[test]
fn test_import_logs_each_malformed_row() {
    let dir = TempDir::new().unwrap();
    write_workbook(
        &dir.path().join("fonte.xlsx"),
        &[
            vec![Text("NOME"), Text("ENDERECO"), Text("CONTATO"), Text("DEMANDA")],
            vec![Text("Ana"), Text("Rua A"), Number(111.0), Text("Saúde")],
            vec![Text("Bia"), Blank, Number(222.0), Blank],
        ],
    );

    demand_import(&dir)
        .arg("import")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors: 2"))
        .stderr(predicate::str::contains("Error on row 2"))
        .stderr(predicate::str::contains("Error on row 3"));
}
