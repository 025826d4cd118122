//! Fixed-length, bounds-checked integer sequences.
//!
//! A [`NumericSequence`] is allocated once with its final length. Elements can
//! be overwritten but never added or removed, and every access is checked
//! against `[0, len)`. Writing one past the end is not undefined behavior
//! here: [`try_set`](NumericSequence::try_set) returns an error and indexing
//! panics, the same way a slice does.

use std::ops::{Deref, Index};

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::sum::{sum, SignedInt};

/// An ordered, fixed-length sequence of signed integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericSequence<T> {
    // INVARIANT: boxed slice, so the length cannot change after construction.
    values: Box<[T]>,
}

impl<T: SignedInt> NumericSequence<T> {
    /// A sequence of `len` zeros.
    pub fn zeroed(len: usize) -> Self {
        Self::filled(len, T::ZERO)
    }

    /// A sequence of `len` copies of `value`.
    ///
    /// Panics if the allocation fails. Use [`try_filled`](Self::try_filled)
    /// for lengths that come from outside the program.
    pub fn filled(len: usize, value: T) -> Self {
        Self {
            values: vec![value; len].into_boxed_slice(),
        }
    }

    /// Like [`zeroed`](Self::zeroed), but a length that cannot be allocated
    /// is an error instead of an abort.
    pub fn try_zeroed(len: usize) -> Result<Self, SequenceError> {
        Self::try_filled(len, T::ZERO)
    }

    /// Like [`filled`](Self::filled), but reserves up front and reports
    /// [`SequenceError::TooLong`] when the reservation fails.
    pub fn try_filled(len: usize, value: T) -> Result<Self, SequenceError> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| SequenceError::TooLong { len, width: T::BITS })?;
        values.resize(len, value);
        Ok(Self {
            values: values.into_boxed_slice(),
        })
    }

    /// A sequence whose element `i` is `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            values: (0..len).map(f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Overwrite the element at `index`.
    ///
    /// Out-of-range writes are rejected and leave the sequence untouched.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SequenceError::OutOfBounds { index, len }),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// A new sequence with the elements in reverse order.
    pub fn reversed(&self) -> Self {
        self.values.iter().rev().copied().collect()
    }

    /// Wrapping sum of the elements. See [`sum`].
    pub fn sum(&self) -> T {
        sum(&self.values)
    }
}

impl<T> Deref for NumericSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T> Index<usize> for NumericSequence<T> {
    type Output = T;

    /// Panics when `index >= len`.
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> From<Vec<T>> for NumericSequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for NumericSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a NumericSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
