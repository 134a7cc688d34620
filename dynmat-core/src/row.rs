//! Fixed-width view of a grid row
//!
//! [`Row`] is an unsized wrapper over `[T]`. It is what grid row indexing
//! hands out: elements can be read and written, but the row itself can
//! never be swapped for one of another width. Column indexing follows the
//! same checked contract as [`Sequence`](crate::Sequence).

use core::ops::{Deref, DerefMut, Index, IndexMut};

use bytemuck::TransparentWrapper;

use crate::validation::validate_index;
use crate::Result;

/// Borrowed row of a [`Grid`](crate::Grid)
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Row<T>([T]);

// SAFETY: `Row<T>` is `repr(transparent)` over `[T]`.
unsafe impl<T> TransparentWrapper<[T]> for Row<T> {}

impl<T> Row<T> {
    pub(crate) fn new(cells: &[T]) -> &Self {
        Self::wrap_ref(cells)
    }

    pub(crate) fn new_mut(cells: &mut [T]) -> &mut Self {
        Self::wrap_mut(cells)
    }

    /// Number of columns
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Checked read access; `OutOfRange` when `col >= size()`
    pub fn at(&self, col: usize) -> Result<&T> {
        let col = validate_index(col, self.size())?;
        Ok(&self.0[col])
    }

    /// Checked write access; `OutOfRange` when `col >= size()`
    pub fn at_mut(&mut self, col: usize) -> Result<&mut T> {
        let col = validate_index(col, self.size())?;
        Ok(&mut self.0[col])
    }
}

impl<T> Deref for Row<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> DerefMut for Row<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> Index<usize> for Row<T> {
    type Output = T;

    fn index(&self, col: usize) -> &Self::Output {
        match self.at(col) {
            Ok(value) => value,
            Err(err) => panic!("{err}: column {col} for row of size {}", self.size()),
        }
    }
}

impl<T> IndexMut<usize> for Row<T> {
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        let size = self.size();
        match self.at_mut(col) {
            Ok(value) => value,
            Err(err) => panic!("{err}: column {col} for row of size {size}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynmatError;

    #[test]
    fn test_checked_access() {
        let mut cells = [1, 2, 3];
        let row = Row::new_mut(&mut cells);
        assert_eq!(row.size(), 3);
        assert_eq!(row.at(2), Ok(&3));
        assert_eq!(row.at(3), Err(DynmatError::OutOfRange));

        *row.at_mut(0).unwrap() = 10;
        row[1] = 20;
        assert_eq!(&**row, &[10, 20, 3]);
        assert_eq!(cells, [10, 20, 3]);
    }

    #[test]
    fn test_slice_methods_through_deref() {
        let cells = [4, 5];
        let row = Row::new(&cells);
        assert_eq!(row.iter().sum::<i32>(), 9);
        assert_eq!(row.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_panics_past_last_column() {
        let cells = [0; 4];
        let _ = Row::new(&cells)[4];
    }
}
