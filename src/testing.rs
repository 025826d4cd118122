//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::passenger::{AirlinePassenger, MealPreferenceCode};
use crate::sequence::NumericSequence;

/// The first passenger from the course example.
pub fn make_passenger() -> AirlinePassenger {
    AirlinePassenger::new("UAL1345", "Jane Smith", "32A", MealPreferenceCode(1))
}

/// A passenger with the given seat and meal code.
pub fn make_passenger_in(seat: &str, meal: i32) -> AirlinePassenger {
    AirlinePassenger::new("SWA5462", "James Johnson", seat, MealPreferenceCode(meal))
}

/// `1, 2, ..., len` as an `i32` sequence.
pub fn make_counting_sequence(len: usize) -> NumericSequence<i32> {
    NumericSequence::from_fn(len, |i| i as i32 + 1)
}

/// `1 + 2 + ... + n`, computed in closed form.
pub fn triangular(n: i64) -> i64 {
    n * (n + 1) / 2
}
