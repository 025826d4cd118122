//! Fuzz target for text input parsing.
//!
//! Arbitrary text must parse or return an error, never panic. Whatever does
//! parse must print back to tokens that parse to the same sequence.

#![no_main]

use libfuzzer_sys::fuzz_target;
use arrsum::parse_sequence;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(seq) = parse_sequence::<i32>(text) {
        let printed: Vec<String> = seq.iter().map(ToString::to_string).collect();
        let reparsed = parse_sequence::<i32>(&printed.join(" "))
            .expect("Printed sequence should always parse");
        assert_eq!(reparsed, seq);
    }
});
