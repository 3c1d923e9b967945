//! Aliasable view over interior-mutable storage.
//!
//! Borrowing rules forbid passing one `Vec` as both `&` input and `&mut`
//! output of the same call. [`SharedView`] lifts that restriction by going
//! through [`Cell`]: it is `Copy`, every copy reads and writes the same
//! slots, and writes become visible to later reads immediately.

use std::cell::Cell;
use std::fmt;

use crate::array_like::{ArrayLike, ArrayLikeMut};

/// Copyable, aliasable view over a slice of cells.
pub struct SharedView<'a, T> {
    cells: &'a [Cell<T>],
}

impl<'a, T> SharedView<'a, T> {
    /// View existing cells.
    pub fn new(cells: &'a [Cell<T>]) -> Self {
        Self { cells }
    }

    /// View an exclusively borrowed slice as shared cells.
    pub fn from_mut(data: &'a mut [T]) -> Self {
        Self {
            cells: Cell::from_mut(data).as_slice_of_cells(),
        }
    }

    /// The underlying cells, for direct reads and writes.
    pub fn cells(&self) -> &'a [Cell<T>] {
        self.cells
    }
}

impl<T: Copy> SharedView<'_, T> {
    /// Copy the current contents out.
    pub fn to_vec(&self) -> Vec<T> {
        self.cells.iter().map(Cell::get).collect()
    }
}

impl<T> Clone for SharedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SharedView<'_, T> {}

impl<T: Copy + fmt::Debug> fmt::Debug for SharedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().map(Cell::get))
            .finish()
    }
}

impl<T: Copy> ArrayLike for SharedView<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self.cells[index].get()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> T {
        self.cells.get_unchecked(index).get()
    }
}

impl<T: Copy> ArrayLikeMut for SharedView<'_, T> {
    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.cells[index].set(value)
    }

    #[inline(always)]
    unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        self.cells.get_unchecked(index).set(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_share_storage() {
        let mut data = [1.0, 2.0, 3.0];
        let view = SharedView::from_mut(&mut data);
        let mut writer = view;
        writer.set(1, 20.0);
        assert_eq!(view.get(1), 20.0);
        assert_eq!(view.to_vec(), vec![1.0, 20.0, 3.0]);
        assert_eq!(data, [1.0, 20.0, 3.0]);
    }

    #[test]
    fn test_new_over_cells() {
        let cells = [Cell::new(1u32), Cell::new(2)];
        let view = SharedView::new(&cells);
        assert_eq!(view.len(), 2);
        assert_eq!(view.cells()[1].get(), 2);
        assert_eq!(format!("{view:?}"), "[1, 2]");
        assert!(view.as_slice().is_none());
    }
}
