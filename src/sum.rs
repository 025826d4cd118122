//! Fixed-width integer summation.
//!
//! The sum keeps the element width. It never widens and it never fails: a
//! total that leaves the representable range wraps modulo 2^width, exactly
//! like two's-complement hardware addition. That is a documented property of
//! [`sum`], not an error. Callers that need to know about overflow use
//! [`checked_sum`] instead.
//!
//! ```
//! use arrsum::sum;
//!
//! assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
//! assert_eq!(sum::<i32>(&[]), 0);
//! assert_eq!(sum(&[i32::MAX, i32::MAX]), -2);
//! ```

use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::error::SumError;

/// Fixed-width signed integers that can be summed.
///
/// Sealed to the primitive signed types so that wraparound always means
/// two's-complement reduction modulo 2^[`BITS`](SignedInt::BITS).
pub trait SignedInt:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Debug
    + Display
    + FromStr
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;
    const BITS: u32;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Exact value as an `i128`.
    fn to_i128(self) -> i128;

    /// Reduce an `i128` modulo 2^BITS into this width.
    fn truncate_i128(value: i128) -> Self;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl SignedInt for $t {
                const ZERO: Self = 0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn truncate_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64, i128, isize);

/// Below this many elements the parallel sum just runs sequentially.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1 << 16;

/// Sum every element, wrapping on overflow.
///
/// Visits `values` once, in index order. The empty slice sums to zero.
/// The input is only borrowed.
#[inline]
pub fn sum<T: SignedInt>(values: &[T]) -> T {
    let mut total = T::ZERO;
    for &value in values {
        total = total.wrapping_add(value);
    }
    total
}

/// Sum every element, reporting the first addition that overflows.
///
/// Returns `Ok` exactly when no running total leaves the range, and the value
/// is then equal to [`sum`]. An overflowing prefix is an error even if later
/// elements would bring the total back into range.
pub fn checked_sum<T: SignedInt>(values: &[T]) -> Result<T, SumError> {
    values
        .iter()
        .enumerate()
        .try_fold(T::ZERO, |total, (index, &value)| {
            total
                .checked_add(value)
                .ok_or(SumError::Overflow { index })
        })
}

/// Exact sum in 128 bits.
///
/// For widths up to 64 bits this cannot overflow for any slice that fits in
/// memory, so `T::truncate_i128(wide_sum(v)) == sum(v)`. For `i128` itself
/// the accumulator wraps and the result equals [`sum`].
pub fn wide_sum<T: SignedInt>(values: &[T]) -> i128 {
    values
        .iter()
        .fold(0i128, |total, &value| total.wrapping_add(value.to_i128()))
}

/// Data-parallel wrapping sum.
///
/// Wrapping addition is associative and commutative modulo 2^width, so the
/// split rayon chooses cannot change the result: this always equals [`sum`].
#[cfg(feature = "parallel")]
pub fn sum_parallel<T: SignedInt>(values: &[T]) -> T {
    use rayon::prelude::*;

    if values.len() < PARALLEL_THRESHOLD {
        return sum(values);
    }

    let total = values
        .par_iter()
        .copied()
        .reduce(|| T::ZERO, T::wrapping_add);

    crate::contracts::check_sum_matches_oracle(values, total);
    total
}
