//! End-to-end tests for the demo driver binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn demo_binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rulehub-demo"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn named_group_runs_only_that_group() {
    let output = demo_binary()
        .arg("basic")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Basic: simple conditions"));
    assert!(stdout.contains("Basic: comparison operators"));
    assert!(!stdout.contains("E-commerce"));
    assert!(!stdout.contains("Migration"));
    // Single-group runs never pause.
    assert!(!stdout.contains("Press Enter"));
    assert!(!stdout.contains("All demo groups completed."));
}

#[test]
fn unknown_group_lists_valid_names_and_fails() {
    let output = demo_binary()
        .arg("bogus")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("bogus"));
    assert!(stdout.contains("basic, ecommerce, datetime, migration"));
    // No demo output before the diagnostic.
    assert!(!stdout.contains("==="));
}

#[test]
fn full_run_paces_between_groups_in_catalog_order() {
    let mut child = demo_binary()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"\n\n\n")
        .expect("failed to write acknowledgments");

    let output = child.wait_with_output().expect("failed to wait on binary");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("Press Enter to continue").count(), 3);

    let basic = stdout.find("Basic: simple conditions").unwrap();
    let ecommerce = stdout.find("E-commerce: discount rules").unwrap();
    let datetime = stdout.find("Datetime: temporal operators").unwrap();
    let migration = stdout.find("Migration: legacy vs current").unwrap();
    assert!(basic < ecommerce);
    assert!(ecommerce < datetime);
    assert!(datetime < migration);

    assert!(stdout.ends_with("✓ All demo groups completed.\n"));
}

#[test]
fn empty_lines_are_sufficient_acknowledgment() {
    let mut child = demo_binary()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // Content is never validated, only the line break matters.
    child
        .stdin
        .as_mut()
        .expect("stdin should be piped")
        .write_all(b"yes\n\nanything at all\n")
        .expect("failed to write acknowledgments");

    let output = child.wait_with_output().expect("failed to wait on binary");
    assert!(output.status.success());
}

#[test]
fn surplus_tokens_are_ignored() {
    let output = demo_binary()
        .args(["datetime", "extra", "tokens"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Datetime: temporal operators"));
    assert!(!stdout.contains("Press Enter"));
}

#[test]
fn closed_stdin_during_pacing_aborts() {
    let output = demo_binary()
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert!(!output.status.success());
    let stdout = stdout_of(&output);
    // The first group ran before the pacing read hit end of input.
    assert!(stdout.contains("Basic: simple conditions"));
    assert!(!stdout.contains("All demo groups completed."));
}

#[test]
fn repeated_named_runs_are_identical() {
    let run = || {
        let output = demo_binary()
            .arg("ecommerce")
            .stdin(Stdio::null())
            .output()
            .expect("failed to run binary");
        assert!(output.status.success());
        stdout_of(&output)
    };

    assert_eq!(run(), run());
}
