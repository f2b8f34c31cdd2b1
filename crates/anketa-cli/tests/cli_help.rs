use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_shows_auth_command() {
    cargo_bin_cmd!("anketa")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("log-file"));
}

#[test]
fn test_auth_help() {
    cargo_bin_cmd!("anketa")
        .args(["auth", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auth form"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("anketa")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_refuses_to_run_without_a_terminal() {
    let dir = TempDir::new().unwrap();
    let log_file = dir.path().join("anketa.log");

    // stdin/stdout are pipes in the test harness, so the TUI must bail
    // instead of entering raw mode.
    cargo_bin_cmd!("anketa")
        .env("ANKETA_LOG_FILE", &log_file)
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));

    // Logging is initialized before the terminal check, so the startup
    // breadcrumb must already be in the file.
    let log = std::fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("anketa starting"), "log was: {log}");
}
