// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
[type-enum]
severity = 2
allowedTypes = ["feature", "feat", "fix", "chore", "docs", "style", "refactor"]

[subject-case]
severity = 1
allowedStyles = ["lower-case"]
"#;

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("conlint.toml"), CONFIG).unwrap();
    dir
}

fn conlint(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("conlint").unwrap();
    cmd.current_dir(dir.path()).env_remove("CONLINT_CONFIG");
    cmd
}

#[test]
fn check_valid_message() {
    let dir = setup();
    conlint(&dir)
        .args(["check", "feat: add login page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid"));
}

#[test]
fn check_invalid_type_fails() {
    let dir = setup();
    conlint(&dir)
        .args(["check", "update: tweak css"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn check_warning_passes_unless_strict() {
    let dir = setup();
    conlint(&dir)
        .args(["check", "docs: Update README"])
        .assert()
        .success()
        .stdout(predicate::str::contains("subject-case"));

    conlint(&dir)
        .args(["check", "--strict", "docs: Update README"])
        .assert()
        .failure();
}

#[test]
fn check_reads_stdin_by_default() {
    let dir = setup();
    conlint(&dir)
        .write_stdin("fix add login\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("header-format"));
}

#[test]
fn check_reads_file() {
    let dir = setup();
    fs::write(
        dir.path().join("COMMIT_EDITMSG"),
        "fix(parser): handle empty input\n\nCloses #12\n",
    )
    .unwrap();
    conlint(&dir)
        .args(["check", "--file", "COMMIT_EDITMSG"])
        .assert()
        .success();
}

#[test]
fn check_missing_file_is_reported() {
    let dir = setup();
    conlint(&dir)
        .args(["check", "--file", "NO_SUCH_FILE"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read message from NO_SUCH_FILE"));
}

#[test]
fn check_json_output() {
    let dir = setup();
    let output = conlint(&dir)
        .args(["--format", "json", "check", "update: tweak css"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["violations"][0]["rule"], "type-enum");
    assert_eq!(json["violations"][0]["actual"], "update");
}

#[test]
fn bad_config_fails_before_checking() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("conlint.toml"),
        "[type-enum]\nseverity = \"fatal\"\nallowedTypes = [\"feat\"]\n",
    )
    .unwrap();
    conlint(&dir)
        .args(["check", "feat: fine"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown severity"));
}

#[test]
fn missing_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    conlint(&dir)
        .args(["check", "feat: fine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn init_writes_example_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    conlint(&dir).arg("init").assert().success();
    assert!(dir.path().join("conlint.toml").exists());

    conlint(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    conlint(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn rules_lists_in_evaluation_order() {
    let dir = setup();
    let output = conlint(&dir).arg("rules").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let subject = stdout.find("subject-case").unwrap();
    let types = stdout.find("type-enum").unwrap();
    assert!(subject < types);
}
