//! Bounds-checked, fixed-width integer summation.
//!
//! The core is one operation: [`sum`] over a slice of signed integers. It keeps
//! the element width, treats the empty slice as zero, and wraps modulo
//! 2^width on overflow. Around it sit a fixed-length container that refuses
//! out-of-range writes, a replay of the classic off-by-one overwrite loop, and
//! a plain passenger record.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ sequence.rs  │────▶│   sum.rs     │◀────│ contracts.rs │
//! │ (Numeric-    │     │ (sum,        │     │ (debug-only  │
//! │  Sequence)   │     │  checked_sum)│     │  checks)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  bounds.rs   │     │ passenger.rs │
//! │ (overwrite_  │     │ (Airline-    │
//! │  inclusive)  │     │  Passenger)  │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use arrsum::{sum, NumericSequence};
//!
//! let seq: NumericSequence<i32> = vec![-10, 10, -10, 10].into();
//! assert_eq!(seq.sum(), 0);
//! assert_eq!(sum(&[i32::MAX, i32::MAX]), -2);
//! ```

// Module declarations
pub mod bounds;
pub mod contracts;
pub mod error;
pub mod input;
pub mod passenger;
pub mod sequence;
mod sum;
pub mod testing;

// Re-exports for public API
pub use bounds::{overwrite_inclusive, OverwriteReport, DEFAULT_PROGRESS_EVERY};
pub use error::{Error, InputError, Result, SequenceError, SumError};
pub use input::{parse_sequence, range_of, Width};
pub use passenger::{AirlinePassenger, MealPreferenceCode};
pub use sequence::NumericSequence;
pub use sum::{checked_sum, sum, wide_sum, SignedInt};

#[cfg(feature = "parallel")]
pub use sum::{sum_parallel, PARALLEL_THRESHOLD};
