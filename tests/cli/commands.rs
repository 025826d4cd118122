//! Tests for `arrsum zeros`, `arrsum bounds`, `arrsum limits` and
//! `arrsum passenger`.

use crate::common::{run_arrsum, stderr, stdout};

#[test]
fn test_zeros() {
    let output = run_arrsum(&["zeros", "--len", "100000"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0");
}

#[test]
fn test_zeros_empty() {
    let output = run_arrsum(&["zeros", "--len", "0"]);
    assert_eq!(stdout(&output), "0");
}

#[test]
fn test_zeros_unallocatable_length_is_an_error() {
    let output = run_arrsum(&["zeros", "--len", "18446744073709551615"]);
    assert_eq!(output.status.code(), Some(1), "{}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("❌"), "{}", err);
    assert!(
        err.contains("cannot allocate a sequence of 18446744073709551615 32-bit elements"),
        "{}",
        err
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_bounds_unallocatable_length_is_an_error() {
    let output = run_arrsum(&["bounds", "--len", "18446744073709551615"]);
    assert_eq!(output.status.code(), Some(1), "{}", stderr(&output));
    assert!(stderr(&output).contains("cannot allocate a sequence"));
}

#[test]
fn test_limits_all_widths() {
    let output = run_arrsum(&["limits"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "i8: [-128, 127]\n\
         i16: [-32768, 32767]\n\
         i32: [-2147483648, 2147483647]\n\
         i64: [-9223372036854775808, 9223372036854775807]"
    );
}

#[test]
fn test_limits_single_width() {
    let output = run_arrsum(&["limits", "--width", "16"]);
    assert_eq!(stdout(&output), "i16: [-32768, 32767]");
}

#[test]
fn test_bounds_reports_rejected_index() {
    let output = run_arrsum(&["bounds", "--len", "1000", "--progress-every", "0"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Written:    1000"), "{}", out);
    assert!(
        out.contains("index 1000 out of bounds for sequence of length 1000"),
        "{}",
        out
    );
}

#[test]
fn test_bounds_logs_progress_at_info() {
    let output = std::process::Command::new(crate::common::ARRSUM_BIN)
        .args(["bounds", "--len", "25", "--progress-every", "10"])
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    let err = stderr(&output);
    assert!(err.contains("Overwriting element 0"), "{}", err);
    assert!(err.contains("Overwriting element 20"), "{}", err);
    assert!(!err.contains("Overwriting element 25"), "{}", err);
}

#[test]
fn test_passenger_display() {
    let output = run_arrsum(&[
        "passenger",
        "--flight",
        "UAL1345",
        "--name",
        "Jane Smith",
        "--seat",
        "32A",
        "--meal",
        "1",
        "--reseat",
        "1B",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Flight: UAL1345\nPassenger: Jane Smith\nSeat: 1B\nMeal preference code: 1"
    );
}

#[cfg(feature = "serde_json")]
#[test]
fn test_passenger_json() {
    let output = run_arrsum(&[
        "passenger", "--flight", "SWA5462", "--name", "James Johnson", "--seat", "25C",
        "--meal", "2", "--json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["flightNumber"], "SWA5462");
    assert_eq!(value["seat"], "25C");
    assert_eq!(value["mealPreference"], 2);
}
