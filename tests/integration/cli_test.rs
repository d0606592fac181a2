//! CLI surface smoke tests (no TTY required).

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_binary() {
    Command::cargo_bin("folioterm")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio terminal"))
        .stdout(predicate::str::contains("--no-animation"));
}

#[test]
fn version_prints() {
    Command::cargo_bin("folioterm")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folioterm"));
}

#[test]
fn wipe_reports_missing_transcript() {
    let tmp = tempfile::tempdir().unwrap();
    let store = tmp.path().join("terminal-log-v1.json");
    Command::cargo_bin("folioterm")
        .unwrap()
        .args(["wipe", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved transcript"));
}

#[test]
fn wipe_removes_an_existing_transcript() {
    let tmp = tempfile::tempdir().unwrap();
    let store = tmp.path().join("terminal-log-v1.json");
    std::fs::write(&store, r#"[{"t":"hello"}]"#).unwrap();

    Command::cargo_bin("folioterm")
        .unwrap()
        .args(["wipe", "--store"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));
    assert!(!store.exists());
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("folioterm")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folioterm"));
}
