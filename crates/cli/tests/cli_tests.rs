use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("line-bridge").unwrap()
}

#[test]
fn test_cli_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LINE webhook bot"));
}

#[test]
fn test_serve_fails_fast_without_secrets() {
    let temp_dir = TempDir::new().unwrap();
    bin()
        .arg("serve")
        .env_remove("LINE_CHANNEL_SECRET")
        .env_remove("LINE_CHANNEL_ACCESS_TOKEN")
        .env_remove("GEMINI_API_KEY")
        .env("LINE_BRIDGE_DB", temp_dir.path().join("chat.db"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("LINE_CHANNEL_SECRET"));
}

#[test]
fn test_history_prints_empty_log() {
    let temp_dir = TempDir::new().unwrap();
    bin()
        .arg("history")
        .arg("user-1")
        .env("LINE_BRIDGE_DB", temp_dir.path().join("chat.db"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_clear_reports_zero_for_unknown_user() {
    let temp_dir = TempDir::new().unwrap();
    bin()
        .arg("clear")
        .arg("user-1")
        .env("LINE_BRIDGE_DB", temp_dir.path().join("chat.db"))
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted 0 messages"));
}
