//! A generic array-like object: a declared length plus integer-keyed entries.
//!
//! Unlike a dense buffer, not every index below `len` needs a value. Reading
//! an index that holds nothing yields `None` instead of failing, so kernels
//! driven over it see silent "absent" reads rather than panics.

use std::collections::BTreeMap;

use crate::array_like::{ArrayLike, ArrayLikeMut};

/// Sparse, length-reporting container keyed by element index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLikeObject<T> {
    len: usize,
    entries: BTreeMap<usize, T>,
}

impl<T> ArrayLikeObject<T> {
    /// An object of declared length `len` with no entries.
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            entries: BTreeMap::new(),
        }
    }

    /// Borrow the entry at `index`, if present.
    pub fn entry(&self, index: usize) -> Option<&T> {
        self.entries.get(&index)
    }

    /// Store `value` at `index`, returning the previous entry.
    ///
    /// The declared length is left unchanged.
    pub fn insert(&mut self, index: usize, value: T) -> Option<T> {
        self.entries.insert(index, value)
    }

    /// Remove the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.entries.remove(&index)
    }

    /// Iterate over present entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.entries.iter().map(|(&i, v)| (i, v))
    }
}

impl<T: Clone> ArrayLikeObject<T> {
    /// Build a fully populated object from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for ArrayLikeObject<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let entries: BTreeMap<usize, T> = iter.into_iter().enumerate().collect();
        Self {
            len: entries.len(),
            entries,
        }
    }
}

impl<T: Clone> ArrayLike for ArrayLikeObject<T> {
    type Elem = Option<T>;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<T> {
        self.entries.get(&index).cloned()
    }
}

impl<T: Clone> ArrayLikeMut for ArrayLikeObject<T> {
    /// `Some` stores the value, `None` clears the slot.
    fn set(&mut self, index: usize, value: Option<T>) {
        match value {
            Some(v) => {
                self.entries.insert(index, v);
            }
            None => {
                self.entries.remove(&index);
            }
        }
    }
}
