//! Kani model checking proofs for arrsum summation.
//!
//! This standalone crate extracts the `i32` summation and bounds-checked write
//! and proves their behavior for every input up to a small length.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `sum` never panics, even on overflow
//! 2. **Wraparound**: `sum` equals the 64-bit exact sum truncated to 32 bits
//! 3. **Order independence**: `sum` of a reversed array is unchanged
//! 4. **Bounds**: `try_set` refuses `index >= len` and leaves the data intact

/// Largest array length the proofs explore.
pub const MAX_LEN: usize = 4;

// ============================================================================
// SUMMATION (copied from src/sum.rs, specialized to i32)
// ============================================================================

/// Wrapping sum, visiting each element once in order.
pub fn sum(values: &[i32]) -> i32 {
    let mut total: i32 = 0;
    for &value in values {
        total = total.wrapping_add(value);
    }
    total
}

/// Exact sum. Cannot overflow for fewer than 2^32 elements.
pub fn wide_sum(values: &[i32]) -> i64 {
    let mut total: i64 = 0;
    for &value in values {
        total += value as i64;
    }
    total
}

// ============================================================================
// BOUNDS-CHECKED WRITE (copied from src/sequence.rs)
// ============================================================================

/// Returns `Err(index)` if the write falls outside the slice.
pub fn try_set(values: &mut [i32], index: usize, value: i32) -> Result<(), usize> {
    match values.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(index),
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_array() -> ([i32; MAX_LEN], usize) {
        let values: [i32; MAX_LEN] = kani::any();
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        (values, len)
    }

    /// Verify sum never panics and matches the exact sum mod 2^32.
    #[kani::proof]
    #[kani::unwind(5)] // MAX_LEN + 1
    fn verify_sum_wraps_exactly() {
        let (values, len) = any_array();
        let slice = &values[..len];

        let total = sum(slice);
        kani::assert(
            total == wide_sum(slice) as i32,
            "Wrapping sum must equal exact sum truncated to 32 bits",
        );
    }

    /// Verify the empty sum is zero.
    #[kani::proof]
    fn verify_empty_sum_is_zero() {
        let empty: &[i32] = &[];
        kani::assert(sum(empty) == 0, "Empty sum must be 0");
    }

    /// Verify reversing does not change the sum.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_sum_reverse_invariant() {
        let (values, len) = any_array();
        let mut reversed = values;
        reversed[..len].reverse();

        kani::assert(
            sum(&values[..len]) == sum(&reversed[..len]),
            "Sum must not depend on order",
        );
    }

    /// Verify MAX + MAX wraps to -2.
    #[kani::proof]
    fn verify_max_plus_max() {
        kani::assert(sum(&[i32::MAX, i32::MAX]) == -2, "MAX + MAX must wrap to -2");
    }

    /// Verify out-of-range writes are refused and in-range writes land.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_try_set_bounds() {
        let (mut values, len) = any_array();
        let before = values;
        let index: usize = kani::any();
        let value: i32 = kani::any();

        let result = try_set(&mut values[..len], index, value);
        if index < len {
            kani::assert(result.is_ok(), "In-range write must succeed");
            kani::assert(values[index] == value, "In-range write must land");
        } else {
            kani::assert(result == Err(index), "Out-of-range write must be refused");
            kani::assert(values == before, "Refused write must not change data");
        }
    }
}
