//! Fuzz target for bounds-checked writes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use arrsum::{NumericSequence, SequenceError};

#[derive(Arbitrary, Debug)]
struct Input {
    len: u16,
    writes: Vec<(u32, i32)>,
}

fuzz_target!(|input: Input| {
    let len = input.len as usize;
    let mut seq = NumericSequence::<i32>::zeroed(len);
    let mut shadow = vec![0i32; len];

    for (index, value) in input.writes {
        let index = index as usize;
        match seq.try_set(index, value) {
            Ok(()) => shadow[index] = value,
            Err(SequenceError::OutOfBounds { index: i, len: l }) => {
                assert_eq!(i, index);
                assert_eq!(l, len);
                assert!(index >= len);
            }
        }
    }

    // The length never changes and contents match the shadow copy
    assert_eq!(seq.len(), len);
    assert_eq!(seq.as_slice(), shadow.as_slice());
});
