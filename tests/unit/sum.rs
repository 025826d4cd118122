//! Tests for wrapping and checked summation.

use crate::common::{make_counting_sequence, triangular};
use arrsum::{checked_sum, range_of, sum, wide_sum, NumericSequence, SignedInt, SumError};

#[test]
fn test_sum_one_to_five() {
    assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
}

#[test]
fn test_sum_cancelling_values() {
    assert_eq!(sum(&[-10, 10, -10, 10]), 0);
}

#[test]
fn test_sum_empty() {
    let empty: [i32; 0] = [];
    assert_eq!(sum(&empty), 0);
    assert_eq!(checked_sum(&empty), Ok(0));
}

#[test]
fn test_sum_single_element() {
    assert_eq!(sum(&[i32::MIN]), i32::MIN);
    assert_eq!(sum(&[42i16]), 42);
}

#[test]
fn test_sum_max_plus_max_wraps_for_every_width() {
    // Two's complement: MAX + MAX = 2^w - 2, which reads back as -2.
    assert_eq!(sum(&[i8::MAX, i8::MAX]), -2);
    assert_eq!(sum(&[i16::MAX, i16::MAX]), -2);
    assert_eq!(sum(&[i32::MAX, i32::MAX]), -2);
    assert_eq!(sum(&[i64::MAX, i64::MAX]), -2);
    assert_eq!(sum(&[i128::MAX, i128::MAX]), -2);
}

#[test]
fn test_sum_wraps_instead_of_panicking() {
    let seq = NumericSequence::filled(3, i32::MAX);
    assert_eq!(seq.sum(), i32::MAX.wrapping_mul(3));
    assert_eq!(
        checked_sum(&seq),
        Err(SumError::Overflow { index: 1 })
    );
}

#[test]
fn test_sum_does_not_mutate_input() {
    let seq = make_counting_sequence(10);
    let before = seq.clone();
    let _ = seq.sum();
    assert_eq!(seq, before);
}

#[test]
fn test_sum_large_counting_sequence() {
    // Same size as the classroom example.
    let seq = make_counting_sequence(100_000);
    let exact = triangular(100_000);
    assert_eq!(wide_sum(&seq), exact as i128);
    assert_eq!(seq.sum(), i32::truncate_i128(exact as i128));
}

#[cfg(feature = "parallel")]
#[test]
fn test_sum_parallel_large_counting_sequence() {
    let seq = make_counting_sequence(arrsum::PARALLEL_THRESHOLD * 4 + 3);
    assert_eq!(arrsum::sum_parallel(&seq), seq.sum());
}

fn assert_wraps_at_both_ends<T: SignedInt>() {
    let range = range_of::<T>();
    assert_eq!(sum(&[T::MAX, T::truncate_i128(1)]).to_i128(), *range.start());
    assert_eq!(sum(&[T::MIN, T::truncate_i128(-1)]).to_i128(), *range.end());
}

#[test]
fn test_sum_wraps_at_both_ends_for_every_width() {
    assert_wraps_at_both_ends::<i8>();
    assert_wraps_at_both_ends::<i16>();
    assert_wraps_at_both_ends::<i32>();
    assert_wraps_at_both_ends::<i64>();
}
