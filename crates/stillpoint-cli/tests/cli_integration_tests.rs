//! CLI integration tests for stillpoint
//!
//! Tests the stillpoint CLI commands end-to-end using assert_cmd, each
//! against its own database file in a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command pointed at a database inside `dir`
fn stillpoint_cmd(dir: &TempDir) -> Command {
    let db_path = dir.path().join("stillpoint.db");
    let mut cmd = Command::cargo_bin("stillpoint").unwrap();
    cmd.env("STILLPOINT_CONFIG_DIR", dir.path());
    cmd.args(["--database", db_path.to_str().unwrap()]);
    cmd
}

#[test]
fn test_seed_populates_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded sample meditation sessions"));

    // Second run is a no-op
    stillpoint_cmd(&temp_dir)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn test_list_seeds_and_shows_sample_sessions() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Breathing Meditation"))
        .stdout(predicate::str::contains("Present Moment Awareness"))
        .stdout(predicate::str::contains("Full Body Relaxation"));
}

#[test]
fn test_list_filters_by_type() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    stillpoint_cmd(&temp_dir)
        .args(["list", "--type", "breathing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Breathing Meditation"))
        .stdout(predicate::str::contains("Full Body Relaxation").not());
}

#[test]
fn test_list_rejects_unknown_type() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .args(["list", "--type", "juggling"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown meditation type"))
        .stderr(predicate::str::contains("breathing"));
}

#[test]
fn test_list_json_output() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    stillpoint_cmd(&temp_dir)
        .args(["--format", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Basic Breathing Meditation\""))
        .stdout(predicate::str::contains("\"meditation_type\": \"breathing\""));
}

#[test]
fn test_show_displays_instructions_in_order() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    // Sample sessions are inserted in order, so id 1 is the breathing one
    stillpoint_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basic Breathing Meditation"))
        .stdout(predicate::str::contains("Find a comfortable seated position"));
}

#[test]
fn test_show_missing_session_fails() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    stillpoint_cmd(&temp_dir)
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn test_delete_then_show_fails() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    stillpoint_cmd(&temp_dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted session 1"));

    stillpoint_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn test_delete_missing_session_fails() {
    let temp_dir = TempDir::new().unwrap();
    stillpoint_cmd(&temp_dir).arg("seed").assert().success();

    stillpoint_cmd(&temp_dir)
        .args(["delete", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn test_categories_empty() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories defined"));
}

#[test]
fn test_doctor_reports_healthy_database() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health check: ok"));
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();

    stillpoint_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("doctor"));
}
