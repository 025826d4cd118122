//! Tests for the inclusive overwrite loop.

use arrsum::{overwrite_inclusive, NumericSequence, SequenceError, DEFAULT_PROGRESS_EVERY};

#[test]
fn test_classroom_sized_overwrite() {
    let len = 100_000;
    let mut seq = NumericSequence::filled(len, 1i32);
    let report = overwrite_inclusive(&mut seq, DEFAULT_PROGRESS_EVERY, |_| 2);

    assert_eq!(report.written, len);
    assert_eq!(
        report.rejected,
        Some(SequenceError::OutOfBounds { index: len, len })
    );
    assert_eq!(seq.len(), len);
    assert_eq!(seq.sum(), 2 * len as i32);
}

#[test]
fn test_value_fn_sees_every_index_including_the_rejected_one() {
    let mut seen = Vec::new();
    let mut seq = NumericSequence::<i8>::zeroed(3);
    overwrite_inclusive(&mut seq, 0, |i| {
        seen.push(i);
        i as i8
    });
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(seq.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_index_values_in_a_wide_sequence() {
    let len = 70_000;
    let mut seq = NumericSequence::<i64>::try_filled(len, 1).unwrap();
    let report = overwrite_inclusive(&mut seq, 0, |i| i64::try_from(i).unwrap());

    assert_eq!(report.written, len);
    assert_eq!(seq[len - 1], len as i64 - 1);
    // 0 + 1 + ... + (len - 1)
    assert_eq!(seq.sum(), (len as i64 - 1) * len as i64 / 2);
}
