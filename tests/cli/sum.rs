//! Tests for `arrsum sum`.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::{run_arrsum, stderr, stdout, ARRSUM_BIN};

#[test]
fn test_sum_from_arguments() {
    let output = run_arrsum(&["sum", "1", "2", "3", "4", "5"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "15");
}

#[test]
fn test_sum_negative_arguments() {
    let output = run_arrsum(&["sum", "-10", "10", "-10", "10"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0");
}

#[test]
fn test_sum_comma_separated_argument() {
    let output = run_arrsum(&["sum", "1,2,3"]);
    assert_eq!(stdout(&output), "6");
}

#[test]
fn test_sum_wraps_by_default() {
    let output = run_arrsum(&["sum", "2147483647", "2147483647"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-2");
}

#[test]
fn test_sum_checked_reports_overflow() {
    let output = run_arrsum(&["sum", "--checked", "2147483647", "1"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("sum overflows at index 1"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn test_sum_width_8() {
    let output = run_arrsum(&["sum", "--width", "8", "127", "1"]);
    assert_eq!(stdout(&output), "-128");
}

#[test]
fn test_sum_width_64_holds_large_values() {
    let output = run_arrsum(&["sum", "-w", "64", "2147483647", "2147483647"]);
    assert_eq!(stdout(&output), "4294967294");
}

#[test]
fn test_sum_rejects_out_of_range_literal() {
    let output = run_arrsum(&["sum", "--width", "8", "300"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("'300' is not a valid 8-bit signed integer"));
}

#[test]
fn test_sum_rejects_unsupported_width_at_parse_time() {
    let output = run_arrsum(&["sum", "--width", "12", "1"]);
    // clap usage error, before any input is read
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("invalid value '12'"), "{}", err);
    assert!(err.contains("possible values: 8, 16, 32, 64"), "{}", err);
}

#[test]
fn test_sum_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.txt");
    std::fs::write(&path, "1 2 3\n4, 5\n").unwrap();

    let output = run_arrsum(&["sum", "--file", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "15");
}

#[test]
fn test_sum_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let output = run_arrsum(&["sum", "--file", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read"));
}

#[test]
fn test_sum_from_stdin() {
    let mut child = Command::new(ARRSUM_BIN)
        .arg("sum")
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"10 20 30")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "60");
}

#[test]
fn test_sum_empty_stdin_is_zero() {
    let output = Command::new(ARRSUM_BIN)
        .arg("sum")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0");
}

#[cfg(feature = "serde_json")]
#[test]
fn test_sum_json_output() {
    let output = run_arrsum(&["sum", "--json", "2147483647", "2147483647"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["len"], 2);
    assert_eq!(value["width"], 32);
    assert_eq!(value["sum"], -2);
    assert_eq!(value["wrapped"], true);
}

/// At `debug`, one summation logs exactly one "summed sequence" event.
fn summed_events(args: &[&str]) -> usize {
    let output = Command::new(ARRSUM_BIN)
        .args(args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    stderr(&output).matches("summed sequence").count()
}

#[test]
fn test_sum_logs_one_event_per_summation() {
    assert_eq!(summed_events(&["sum", "1", "2", "3"]), 1);

    // Long enough to take the parallel path when it is enabled.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ones.txt");
    std::fs::write(&path, "1 ".repeat(70_000)).unwrap();
    assert_eq!(summed_events(&["sum", "--file", path.to_str().unwrap()]), 1);
}
