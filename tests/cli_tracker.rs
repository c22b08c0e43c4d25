// End-to-end tests for the local application tracker, driven through the CLI.
// The tracker file lives under $HOME/.fundlens/, so each test gets its own
// temp home.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fundlens(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("fundlens").expect("binary should exist");
    cmd.env("HOME", home);
    cmd.env("FUNDLENS_BACKEND_URL", "http://127.0.0.1:9");
    cmd
}

fn add(home: &std::path::Path, repo: &str, funding: &str) -> String {
    let output = fundlens(home)
        .args(["track", "add", repo, funding])
        .output()
        .expect("track add should run");
    assert!(output.status.success(), "track add should succeed");
    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf-8");
    stdout
        .trim()
        .strip_prefix("added: ")
        .expect("add should print the new id")
        .to_string()
}

#[test]
fn add_persists_entry_across_invocations() {
    let home = TempDir::new().expect("temp home should be created");
    add(home.path(), "repo-1", "nlnet");

    fundlens(home.path())
        .args(["track", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-1 -> nlnet"))
        .stdout(predicate::str::contains("[saved]"));
}

#[test]
fn duplicate_pair_is_not_added_twice() {
    let home = TempDir::new().expect("temp home should be created");
    let id = add(home.path(), "repo-1", "nlnet");

    fundlens(home.path())
        .args(["track", "add", "repo-1", "nlnet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not added"))
        .stdout(predicate::str::contains(&id));

    let output = fundlens(home.path())
        .args(["track", "list", "--format", "json"])
        .output()
        .expect("track list should run");
    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output should be json");
    assert_eq!(entries.as_array().map(Vec::len), Some(1));
}

#[test]
fn pipeline_transition_stamps_date_applied() {
    let home = TempDir::new().expect("temp home should be created");
    let id = add(home.path(), "repo-1", "moss");

    fundlens(home.path())
        .args(["track", "set-status", &id, "applied"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"));

    let output = fundlens(home.path())
        .args(["track", "list", "--format", "json"])
        .output()
        .expect("track list should run");
    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output should be json");
    let entry = &entries[0];
    assert_eq!(entry["status"], "applied");
    assert!(entry["date_applied"].is_string());
}

#[test]
fn list_filters_by_status() {
    let home = TempDir::new().expect("temp home should be created");
    let first = add(home.path(), "repo-1", "nlnet");
    add(home.path(), "repo-2", "moss");

    fundlens(home.path())
        .args(["track", "set-status", &first, "won"])
        .assert()
        .success();

    fundlens(home.path())
        .args(["track", "list", "--status", "won"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repo-1"))
        .stdout(predicate::str::contains("repo-2").not());
}

#[test]
fn remove_unknown_id_warns() {
    let home = TempDir::new().expect("temp home should be created");
    fundlens(home.path())
        .args(["track", "remove", "missing-id"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no tracked application"));
}

#[test]
fn notes_show_up_in_listing() {
    let home = TempDir::new().expect("temp home should be created");
    let id = add(home.path(), "repo-1", "stf");

    fundlens(home.path())
        .args(["track", "note", &id, "deadline 2026-10-01"])
        .assert()
        .success();

    fundlens(home.path())
        .args(["track", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deadline 2026-10-01"));
}
