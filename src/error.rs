//! Error types.
//!
//! Plain summation has no error path. These exist for the edges around it:
//! writes past the end of a sequence, the opt-in overflow check, and parsing
//! integers off the command line.

use thiserror::Error;

/// Result alias for fallible arrsum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A write or read outside `[0, len)`, or a length that cannot be allocated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("cannot allocate a sequence of {len} {width}-bit elements")]
    TooLong { len: usize, width: u32 },
}

/// Raised only by [`checked_sum`](crate::checked_sum).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumError {
    /// Adding the element at `index` left the representable range.
    #[error("sum overflows at index {index}")]
    Overflow { index: usize },
}

/// Failures turning text into a sequence.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{token}' is not a valid {width}-bit signed integer")]
    InvalidInteger { token: String, width: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Umbrella error returned by the crate's fallible entry points.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Sum(#[from] SumError),

    #[error(transparent)]
    Input(#[from] InputError),
}
