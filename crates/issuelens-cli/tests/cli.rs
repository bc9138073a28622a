use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("issuelens"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("labels"))
        .stdout(predicate::str::contains("priority"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_no_args_shows_help() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.assert().failure().code(predicate::eq(2));
}

#[test]
fn test_invalid_command() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("invalidcmd")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_analyze_requires_issue_number() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("analyze")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_analyze_rejects_non_numeric_issue() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("analyze")
        .arg("not-a-number")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_invalid_repo_format_is_rejected() {
    let mut cmd = cargo_bin_cmd!("issuelens");
    cmd.arg("--repo")
        .arg("not-a-repo")
        .arg("analyze")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("owner/repo"));
}
