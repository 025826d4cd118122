//! Fuzz target comparing the wrapping and checked sums against the 128-bit oracle.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use arrsum::{checked_sum, sum, wide_sum, SignedInt};

#[derive(Arbitrary, Debug)]
enum Input {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
}

fn check<T: SignedInt>(values: &[T]) {
    let total = sum(values);

    // Property 1: the wrapping sum is the exact sum reduced to the width
    assert_eq!(total, T::truncate_i128(wide_sum(values)));

    // Property 2: checked_sum either agrees or names an index inside the input
    match checked_sum(values) {
        Ok(checked) => assert_eq!(checked, total),
        Err(arrsum::SumError::Overflow { index }) => assert!(index < values.len()),
    }

    // Property 3: order does not matter
    let reversed: Vec<T> = values.iter().rev().copied().collect();
    assert_eq!(sum(&reversed), total);
}

fuzz_target!(|input: Input| {
    match input {
        Input::I8(v) => check(&v),
        Input::I16(v) => check(&v),
        Input::I32(v) => check(&v),
        Input::I64(v) => check(&v),
    }
});
