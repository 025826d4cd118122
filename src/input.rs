//! Reading integer sequences from text.
//!
//! Tokens are separated by whitespace, commas, or both. Each token must parse
//! as an integer of the requested width; out-of-range literals are an error,
//! never silently truncated.

use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{InputError, Result};
use crate::sequence::NumericSequence;
use crate::sum::SignedInt;

/// Supported element widths for text input, named by bit count on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Width {
    #[value(name = "8")]
    W8,
    #[value(name = "16")]
    W16,
    #[default]
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

impl Width {
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => i8::BITS,
            Width::W16 => i16::BITS,
            Width::W32 => i32::BITS,
            Width::W64 => i64::BITS,
        }
    }

    /// The closed range `[MIN, MAX]` an element of this width can hold.
    pub fn range(self) -> RangeInclusive<i128> {
        match self {
            Width::W8 => range_of::<i8>(),
            Width::W16 => range_of::<i16>(),
            Width::W32 => range_of::<i32>(),
            Width::W64 => range_of::<i64>(),
        }
    }
}

/// `[T::MIN, T::MAX]`, widened so every width shares one type.
pub fn range_of<T: SignedInt>() -> RangeInclusive<i128> {
    T::MIN.to_i128()..=T::MAX.to_i128()
}

/// Split `text` into integer tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// Parse every token of `text` as a `T`.
pub fn parse_sequence<T: SignedInt>(text: &str) -> Result<NumericSequence<T>> {
    parse_tokens(tokens(text))
}

/// Parse already-split tokens as a `T`.
pub fn parse_tokens<'a, T, I>(tokens: I) -> Result<NumericSequence<T>>
where
    T: SignedInt,
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| {
            token
                .trim()
                .parse::<T>()
                .map_err(|_| InputError::InvalidInteger {
                    token: token.to_string(),
                    width: T::BITS,
                })
        })
        .collect::<std::result::Result<Vec<T>, _>>()
        .map(NumericSequence::from)
        .map_err(Into::into)
}

/// Read the whole of a file, or stdin when `path` is `None`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(InputError::from)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::from)?;
            text
        }
    };
    Ok(text)
}
