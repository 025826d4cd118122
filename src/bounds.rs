//! The off-by-one overwrite, made safe.
//!
//! The classic mistake is a loop `for i in 0..=len` writing `values[i]`. The
//! last iteration is one past the end. Against a [`NumericSequence`] that write
//! is rejected: the first `len` writes land, index `len` comes back as
//! [`SequenceError::OutOfBounds`], and the sequence is left intact.

use tracing::{debug, info};

use crate::contracts::{check_index_in_bounds, check_length_preserved};
use crate::error::SequenceError;
use crate::sequence::NumericSequence;
use crate::sum::SignedInt;

/// Default interval between progress log lines.
pub const DEFAULT_PROGRESS_EVERY: usize = 10_000;

/// What happened during [`overwrite_inclusive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverwriteReport {
    /// Writes that landed inside the sequence.
    pub written: usize,
    /// The write that was refused, if any.
    pub rejected: Option<SequenceError>,
}

/// Write `value(i)` to every index in `0..=seq.len()`.
///
/// Stops at the first rejected write. Logs progress at `info` level every
/// `progress_every` indices (0 disables it).
pub fn overwrite_inclusive<T, F>(
    seq: &mut NumericSequence<T>,
    progress_every: usize,
    mut value: F,
) -> OverwriteReport
where
    T: SignedInt,
    F: FnMut(usize) -> T,
{
    let len = seq.len();
    let mut written = 0;
    let mut rejected = None;

    for i in 0..=len {
        if let Err(err) = seq.try_set(i, value(i)) {
            debug!(index = i, len, "write rejected");
            rejected = Some(err);
            break;
        }
        check_index_in_bounds(i, len);
        written += 1;

        if progress_every != 0 && i % progress_every == 0 {
            info!("Overwriting element {}", i);
        }
    }

    check_length_preserved(len, seq.len());
    OverwriteReport { written, rejected }
}
