//! Runtime contracts for sequences and sums.
//!
//! Debug-mode assertions for the properties the rest of the crate relies on.
//! They compile to nothing in release builds.
//!
//! | Contract Function          | Property                                      |
//! |----------------------------|-----------------------------------------------|
//! | `check_index_in_bounds`    | every landed write has `index < len`          |
//! | `check_length_preserved`   | a sequence never changes length               |
//! | `check_sum_matches_oracle` | wrapping sum == exact sum reduced mod 2^width |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Two's-complement wraparound for the default width.
const _: () = {
    // INVARIANT: i32::MAX + i32::MAX wraps to -2
    assert!(i32::MAX.wrapping_add(i32::MAX) == -2);
    // INVARIANT: MAX + 1 wraps to MIN
    assert!(i32::MAX.wrapping_add(1) == i32::MIN);
};

use crate::sum::{wide_sum, SignedInt};

// ============================================================================
// SEQUENCE CONTRACTS
// ============================================================================

/// Check that `index` addresses an element of a sequence of length `len`.
///
/// # Panics (debug builds only)
/// Panics if `index >= len`.
#[inline]
pub fn check_index_in_bounds(index: usize, len: usize) {
    debug_assert!(
        index < len,
        "Contract violation: index {} >= len {}",
        index,
        len
    );
}

/// Check that a sequence still has the length it was created with.
#[inline]
pub fn check_length_preserved(before: usize, after: usize) {
    debug_assert_eq!(
        before, after,
        "Contract violation: sequence length changed from {} to {}",
        before, after
    );
}

// ============================================================================
// SUM CONTRACTS
// ============================================================================

/// Check that a wrapping total agrees with the exact 128-bit sum.
///
/// # Panics (debug builds only)
/// Panics if `result != truncate(wide_sum(values))`.
#[inline]
pub fn check_sum_matches_oracle<T: SignedInt>(values: &[T], result: T) {
    if cfg!(debug_assertions) {
        let expected = T::truncate_i128(wide_sum(values));
        debug_assert_eq!(
            result,
            expected,
            "Contract violation: sum of {} elements is {}, expected {}",
            values.len(),
            result,
            expected
        );
    }
}
