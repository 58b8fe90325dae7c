//! End-to-end tests running the `exprtree` binary.
//!
//! Each run gets an empty `XDG_CONFIG_HOME` and no `EXPRTREE_*` variables, so
//! only compiled defaults and the given arguments apply.

use std::process::{Command, Output};

use tempfile::TempDir;

use exprtree::exitcode;

fn run(args: &[&str]) -> Output {
    let config_home = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_exprtree"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("EXPRTREE_CONFIG")
        .env_remove("EXPRTREE_SCENARIO")
        .env_remove("EXPRTREE_SHOW_TREE")
        .env_remove("EXPRTREE_PRECISION")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run exprtree")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("invalid utf8 string")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("invalid utf8 string")
}

// ============================================================
// Default run
// ============================================================

#[test]
fn given_no_arguments_when_running_then_prints_default_result() {
    // Act
    let output = run(&[]);

    // Assert
    assert_eq!(stdout(&output), "Result: 24\n");
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn given_flat_scenario_when_running_eval_then_prints_its_result() {
    let output = run(&["eval", "--scenario", "flat"]);

    assert_eq!(stdout(&output), "Result: 10\n");
    assert_eq!(output.status.code(), Some(0));
}

// ============================================================
// Failures
// ============================================================

#[test]
fn given_modulo_scenario_when_running_eval_then_reports_invalid_operator() {
    // Act
    let output = run(&["eval", "-s", "modulo"]);

    // Assert
    assert!(stderr(&output).contains("invalid operator: '%'"));
    assert!(stdout(&output).is_empty());
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}

#[test]
fn given_unknown_scenario_when_running_eval_then_exits_with_usage_code() {
    let output = run(&["eval", "-s", "nope"]);

    assert!(stderr(&output).contains("unknown scenario: nope"));
    assert_eq!(output.status.code(), Some(exitcode::USAGE));
}

#[test]
fn given_missing_config_file_when_running_then_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = run(&["--config", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
}

// ============================================================
// Config subcommands
// ============================================================

#[test]
fn given_config_template_when_running_then_prints_commented_template() {
    let output = run(&["config", "template"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("# exprtree configuration"));
    assert!(out.contains("# scenario = \"nested\""));
}

#[test]
fn given_no_config_when_running_config_show_then_prints_defaults() {
    let output = run(&["config", "show"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("scenario = \"nested\""));
}
