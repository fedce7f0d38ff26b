//! Integration tests for the `cadence` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise expansion and the
//! event-store subcommands through the actual binary, including the
//! non-zero exits for rejected rules.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn cadence() -> Command {
    Command::cargo_bin("cadence").unwrap()
}

/// Helper: run `add` against the given store and return the new event's id
/// parsed from stdout.
fn add_event(store_path: &str, extra: &[&str]) -> String {
    let mut args = vec![
        "--store",
        store_path,
        "add",
        "--freq",
        "daily",
        "--start",
        "2024-01-01",
        "--end",
        "2024-01-05",
    ];
    args.extend_from_slice(extra);

    let output = cadence().args(&args).output().expect("add should run");
    assert!(
        output.status.success(),
        "add must succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");

    // "Added event <id> ..." — the id is the third token.
    stdout
        .split_whitespace()
        .nth(2)
        .expect("add output carries the id")
        .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Expand subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn expand_daily_prints_one_date_per_line() {
    let output = cadence()
        .args([
            "expand",
            "--freq",
            "daily",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-05",
        ])
        .output()
        .expect("expand should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]
    );
}

#[test]
fn expand_weekly_with_weekday_set() {
    let output = cadence()
        .args([
            "expand",
            "--freq",
            "weekly",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-14",
            "--weekdays",
            "mon,wed",
        ])
        .output()
        .expect("expand should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10"]
    );
}

#[test]
fn expand_monthly_nth_weekday() {
    let output = cadence()
        .args([
            "expand",
            "--freq",
            "monthly",
            "--start",
            "2024-01-01",
            "--end",
            "2024-04-30",
            "--nth",
            "2",
            "--on",
            "tue",
        ])
        .output()
        .expect("expand should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["2024-01-09", "2024-02-13", "2024-03-12", "2024-04-09"]
    );
}

#[test]
fn expand_end_before_start_fails() {
    cadence()
        .args([
            "expand",
            "--freq",
            "daily",
            "--start",
            "2024-01-10",
            "--end",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("end date precedes start date"));
}

#[test]
fn expand_zero_interval_fails() {
    cadence()
        .args([
            "expand",
            "--freq",
            "daily",
            "--interval",
            "0",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval must be at least 1"));
}

#[test]
fn expand_bad_occurrence_index_fails() {
    cadence()
        .args([
            "expand",
            "--freq",
            "monthly",
            "--start",
            "2024-01-01",
            "--end",
            "2024-06-30",
            "--nth",
            "6",
            "--on",
            "fri",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("occurrence index"));
}

#[test]
fn expand_nth_without_on_is_rejected_by_the_parser() {
    cadence()
        .args([
            "expand",
            "--freq",
            "monthly",
            "--start",
            "2024-01-01",
            "--end",
            "2024-06-30",
            "--nth",
            "2",
        ])
        .assert()
        .failure();
}

#[test]
fn expand_unknown_weekday_fails() {
    cadence()
        .args([
            "expand",
            "--freq",
            "weekly",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-14",
            "--weekdays",
            "mon,noday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown weekday"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Store subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_then_list_shows_the_event() {
    let store_path = "/tmp/cadence-test-cli-add-list.json";
    let _ = std::fs::remove_file(store_path);

    let id = add_event(store_path, &["--title", "Standup"]);

    cadence()
        .args(["--store", store_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Standup"))
        .stdout(predicate::str::contains("Daily"))
        .stdout(predicate::str::contains("5 occurrences"))
        .stdout(predicate::str::contains('#'));

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn add_without_title_uses_frequency_default() {
    let store_path = "/tmp/cadence-test-cli-default-title.json";
    let _ = std::fs::remove_file(store_path);

    add_event(store_path, &[]);

    cadence()
        .args(["--store", store_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily Event"));

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn show_prints_the_stored_occurrences() {
    let store_path = "/tmp/cadence-test-cli-show.json";
    let _ = std::fs::remove_file(store_path);

    let id = add_event(store_path, &[]);

    let output = cadence()
        .args(["--store", store_path, "show", id.as_str()])
        .output()
        .expect("show should run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]
    );

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn rename_changes_the_listed_title() {
    let store_path = "/tmp/cadence-test-cli-rename.json";
    let _ = std::fs::remove_file(store_path);

    let id = add_event(store_path, &["--title", "Before"]);

    cadence()
        .args(["--store", store_path, "rename", id.as_str(), "After"])
        .assert()
        .success();

    cadence()
        .args(["--store", store_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After"))
        .stdout(predicate::str::contains("Before").not());

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn remove_deletes_only_the_target() {
    let store_path = "/tmp/cadence-test-cli-remove.json";
    let _ = std::fs::remove_file(store_path);

    let doomed = add_event(store_path, &["--title", "Doomed"]);
    add_event(store_path, &["--title", "Spared"]);

    cadence()
        .args(["--store", store_path, "remove", doomed.as_str()])
        .assert()
        .success();

    cadence()
        .args(["--store", store_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spared"))
        .stdout(predicate::str::contains("Doomed").not());

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn clear_empties_the_store() {
    let store_path = "/tmp/cadence-test-cli-clear.json";
    let _ = std::fs::remove_file(store_path);

    add_event(store_path, &["--title", "One"]);
    add_event(store_path, &["--title", "Two"]);

    cadence()
        .args(["--store", store_path, "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 events"));

    let output = cadence()
        .args(["--store", store_path, "list"])
        .output()
        .expect("list should run");
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "cleared store lists nothing");

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn removing_unknown_id_fails() {
    let store_path = "/tmp/cadence-test-cli-remove-missing.json";
    let _ = std::fs::remove_file(store_path);

    cadence()
        .args([
            "--store",
            store_path,
            "remove",
            "00000000-0000-0000-0000-000000000000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no event with id"));

    let _ = std::fs::remove_file(store_path);
}

#[test]
fn expand_does_not_create_a_store_file() {
    let store_path = "/tmp/cadence-test-cli-expand-pure.json";
    let _ = std::fs::remove_file(store_path);

    cadence()
        .args([
            "--store",
            store_path,
            "expand",
            "--freq",
            "daily",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-02",
        ])
        .assert()
        .success();

    assert!(
        !std::path::Path::new(store_path).exists(),
        "expand must not touch the store"
    );
}

#[test]
fn help_flag_shows_usage() {
    cadence()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("clear"));
}

#[test]
fn unknown_subcommand_fails() {
    cadence()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}
