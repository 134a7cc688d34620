//! Square matrix built as a sequence of row sequences
//!
//! [`Grid`] wraps a `Sequence<Sequence<T>>` and delegates storage,
//! copying, comparison and element-wise work to it. The wrapper only
//! adds what is specific to a square matrix: the dimension ceiling,
//! row width initialization and matrix products.
//!
//! Row indexing hands out a [`Row`] view so a row can never be replaced
//! by one of another width; [`Grid::row`] returns the row [`Sequence`]
//! itself for reading.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Sub};
use core::str::FromStr;

use crate::limits::MAX_GRID_DIMENSION;
use crate::row::Row;
use crate::sequence::Sequence;
use crate::traits::{Element, ReadTokens};
use crate::validation::{validate_length, validate_same_length};
use crate::{DynmatError, Result};

/// Square container of row sequences
#[derive(Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: Sequence<Sequence<T>>,
}

impl<T: Default> Grid<T> {
    /// Create a `dimension` x `dimension` grid of default values
    ///
    /// Fails with `InvalidSize` for zero and `SizeExceeded` above
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(dimension: usize) -> Result<Self> {
        validate_length(dimension, MAX_GRID_DIMENSION)?;
        // Outer sequence holds length-1 default rows until widened
        let mut rows = Sequence::<Sequence<T>>::new(dimension)?;
        for row in rows.iter_mut() {
            *row = Sequence::new(dimension)?;
        }
        Ok(Self { rows })
    }
}

impl<T: Element> Grid<T> {
    /// Create a grid with `T::one()` on the diagonal
    pub fn identity(dimension: usize) -> Result<Self> {
        let mut grid = Self::new(dimension)?;
        for (i, row) in grid.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        Ok(grid)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut rows = self.rows.clone();
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[j][i].clone();
            }
        }
        Self { rows }
    }
}

impl<T> Grid<T> {
    /// Build a grid from nested rows
    ///
    /// Every row must have as many elements as there are rows, otherwise
    /// `SizeMismatch` is returned.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let dimension = validate_length(rows.len(), MAX_GRID_DIMENSION)?;
        let rows = rows
            .into_iter()
            .map(|row| {
                validate_same_length(row.len(), dimension)?;
                Sequence::try_from(row)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: Sequence::try_from(rows)?,
        })
    }

    /// Row and column count
    pub fn size(&self) -> usize {
        self.rows.size()
    }

    /// Checked row access
    pub fn row(&self, index: usize) -> Result<&Sequence<T>> {
        self.rows.at(index)
    }

    /// Checked mutable row access; the row width cannot change through it
    pub fn row_mut(&mut self, index: usize) -> Result<&mut Row<T>> {
        Ok(Row::new_mut(self.rows.at_mut(index)?.as_mut_slice()))
    }

    /// Checked cell access, composing the row and column checks
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.rows.at(row)?.at(col)
    }

    /// Checked mutable cell access
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.rows.at_mut(row)?.at_mut(col)
    }

    pub fn rows(&self) -> &Sequence<Sequence<T>> {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows.into_vec().into_iter().map(Sequence::into_vec).collect()
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T: Default> Default for Grid<T> {
    fn default() -> Self {
        Self {
            rows: Sequence::default(),
        }
    }
}

/// Row check here, column check in [`Row`]; both panic with `OutOfRange`
impl<T> Index<usize> for Grid<T> {
    type Output = Row<T>;

    fn index(&self, index: usize) -> &Self::Output {
        Row::new(self.rows[index].as_slice())
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        Row::new_mut(self.rows[index].as_mut_slice())
    }
}

// Matrix-scalar operations

impl<T: Element> Add<T> for &Grid<T> {
    type Output = Grid<T>;

    fn add(self, val: T) -> Self::Output {
        Grid {
            rows: self.rows.map(|row| row + val.clone()),
        }
    }
}

impl<T: Element> Sub<T> for &Grid<T> {
    type Output = Grid<T>;

    fn sub(self, val: T) -> Self::Output {
        Grid {
            rows: self.rows.map(|row| row - val.clone()),
        }
    }
}

impl<T: Element> Mul<T> for &Grid<T> {
    type Output = Grid<T>;

    fn mul(self, val: T) -> Self::Output {
        Grid {
            rows: self.rows.map(|row| row * val.clone()),
        }
    }
}

// Matrix-vector operations

/// One dot product per row
impl<T: Element> Mul<&Sequence<T>> for &Grid<T> {
    type Output = Result<Sequence<T>>;

    fn mul(self, v: &Sequence<T>) -> Self::Output {
        validate_same_length(self.size(), v.size())?;
        self.rows.try_map(|row| row * v)
    }
}

// Matrix-matrix operations

impl<T: Element> Add<&Grid<T>> for &Grid<T> {
    type Output = Result<Grid<T>>;

    fn add(self, rhs: &Grid<T>) -> Self::Output {
        Ok(Grid {
            rows: self.rows.try_zip_with(&rhs.rows, |a, b| a + b)?,
        })
    }
}

impl<T: Element> Sub<&Grid<T>> for &Grid<T> {
    type Output = Result<Grid<T>>;

    fn sub(self, rhs: &Grid<T>) -> Self::Output {
        Ok(Grid {
            rows: self.rows.try_zip_with(&rhs.rows, |a, b| a - b)?,
        })
    }
}

impl<T: Element> Mul<&Grid<T>> for &Grid<T> {
    type Output = Result<Grid<T>>;

    fn mul(self, rhs: &Grid<T>) -> Self::Output {
        validate_same_length(self.size(), rhs.size())?;
        let mut result = Grid::new(self.size())?;
        for (lhs_row, out_row) in self.rows.iter().zip(result.rows.iter_mut()) {
            for (j, cell) in out_row.iter_mut().enumerate() {
                for (k, a) in lhs_row.iter().enumerate() {
                    *cell += a.clone() * rhs.rows[k][j].clone();
                }
            }
        }
        Ok(result)
    }
}

// Text input/output

/// One row per line, elements separated by a single space
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            fmt::Display::fmt(row, f)?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T: ReadTokens> ReadTokens for Grid<T> {
    fn token_count(&self) -> usize {
        self.rows.token_count()
    }

    fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        I: Iterator<Item = &'a str>,
    {
        self.rows.read_tokens(tokens)
    }
}

/// One row per non-empty line; the line count becomes the dimension.
impl<T: Default + ReadTokens> FromStr for Grid<T> {
    type Err = DynmatError;

    fn from_str(s: &str) -> Result<Self> {
        let lines = || s.lines().filter(|line| !line.trim().is_empty());
        let mut grid = Self::new(lines().count())?;
        let dimension = grid.size();
        for (row, line) in grid.rows.iter_mut().zip(lines()) {
            validate_same_length(line.split_whitespace().count(), dimension)?;
            row.read_tokens(&mut line.split_whitespace())?;
        }
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.rows, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = <Vec<Vec<T>> as serde::Deserialize>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn grid(rows: &[&[i32]]) -> Grid<i32> {
        Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_new() {
        let m = Grid::<i32>::new(5).unwrap();
        assert_eq!(m.size(), 5);
        for row in m.rows().iter() {
            assert_eq!(row.size(), 5);
            assert!(row.iter().all(|x| *x == 0));
        }
        assert_eq!(Grid::<i32>::default().size(), 1);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert_eq!(Grid::<i32>::new(0), Err(DynmatError::InvalidSize));
        assert_eq!(
            Grid::<i32>::new(MAX_GRID_DIMENSION + 1),
            Err(DynmatError::SizeExceeded)
        );
        assert_eq!(
            Grid::<i32>::new(-5isize as usize),
            Err(DynmatError::SizeExceeded)
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert_eq!(
            Grid::from_rows(vec![vec![1, 2], vec![3]]),
            Err(DynmatError::SizeMismatch)
        );
        assert_eq!(
            Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]),
            Err(DynmatError::SizeMismatch)
        );
        assert_eq!(
            Grid::<i32>::from_rows(Vec::new()),
            Err(DynmatError::InvalidSize)
        );
    }

    #[test]
    fn test_copy_has_its_own_memory() {
        let original = grid(&[&[1, 2], &[3, 4]]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy[1][1] = 40;
        assert_eq!(original[1][1], 4);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_set_and_get_element() {
        let mut m = Grid::<i32>::new(5).unwrap();
        m[0][1] = 3;
        *m.at_mut(4, 4).unwrap() = 7;
        m.row_mut(2).unwrap()[0] = 1;

        assert_eq!(m[0][1], 3);
        assert_eq!(m.at(4, 4), Ok(&7));
        assert_eq!(m.row(2).unwrap()[0], 1);
    }

    #[test]
    fn test_checked_access_out_of_range() {
        let mut m = Grid::<i32>::new(5).unwrap();
        assert_eq!(m.at(5, 0), Err(DynmatError::OutOfRange));
        assert_eq!(m.at(0, 5), Err(DynmatError::OutOfRange));
        assert_eq!(m.at(-1isize as usize, 0), Err(DynmatError::OutOfRange));
        assert_eq!(m.row(6).err(), Some(DynmatError::OutOfRange));
        assert_eq!(m.row_mut(5).err(), Some(DynmatError::OutOfRange));
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_panics_on_too_large_row() {
        let mut m = Grid::<i32>::new(5).unwrap();
        m[6][0] = 3;
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_panics_on_negative_row() {
        let mut m = Grid::<i32>::new(5).unwrap();
        m[-1isize as usize][0] = 3;
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_panics_on_too_large_column() {
        let mut m = Grid::<i32>::new(5).unwrap();
        m[0][5] = 3;
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn test_index_read_panics_on_too_large_column() {
        let m = Grid::<i32>::new(5).unwrap();
        let _ = m[4][5];
    }

    #[test]
    fn test_self_assignment_keeps_state() {
        let mut m = grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let expected = m.clone();

        m = m.clone();
        assert_eq!(m, expected);

        // `m.clone_from(&m)` does not borrow-check; go through an alias
        let alias = m.clone();
        m.clone_from(&alias);
        assert_eq!(m.size(), 3);
        for (i, row) in expected.rows().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                assert_eq!(m.at(i, j), Ok(cell));
            }
        }
    }

    #[test]
    fn test_clone_from_changes_size() {
        let mut m1 = Grid::<i32>::new(3).unwrap();
        let mut m2 = Grid::<i32>::new(4).unwrap();
        m1[1][2] = 5;
        m2.clone_from(&m1);
        assert_eq!(m2.size(), 3);
        assert_eq!(m2, m1);
    }

    #[test]
    fn test_equality() {
        let mut m1 = Grid::<i32>::new(3).unwrap();
        let mut m2 = Grid::<i32>::new(3).unwrap();
        m1[1][2] = 5;
        m2[1][2] = 5;
        assert_eq!(m1, m1);
        assert_eq!(m1, m2);

        let mut m3 = Grid::<i32>::new(4).unwrap();
        m3[1][2] = 5;
        assert_ne!(m1, m3);
    }

    #[test]
    fn test_add_sub_matrices() {
        let mut m1 = Grid::<i32>::new(3).unwrap();
        let mut m2 = Grid::<i32>::new(3).unwrap();
        m1[1][2] = 5;
        m1[0][0] = 1;
        m2[1][2] = 3;
        m2[2][2] = 5;

        let sum = (&m1 + &m2).unwrap();
        assert_eq!(sum, grid(&[&[1, 0, 0], &[0, 0, 8], &[0, 0, 5]]));

        let diff = (&m1 - &m2).unwrap();
        assert_eq!(diff, grid(&[&[1, 0, 0], &[0, 0, 2], &[0, 0, -5]]));
    }

    #[test]
    fn test_add_sub_mismatched_dimensions() {
        let m1 = Grid::<i32>::new(3).unwrap();
        let m2 = Grid::<i32>::new(4).unwrap();
        assert_eq!(&m1 + &m2, Err(DynmatError::SizeMismatch));
        assert_eq!(&m1 - &m2, Err(DynmatError::SizeMismatch));
        assert_eq!(&m2 + &m1, Err(DynmatError::SizeMismatch));
    }

    #[test]
    fn test_scalar_ops() {
        let m = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(&m * 2, grid(&[&[2, 4], &[6, 8]]));
        assert_eq!(&m + 1, grid(&[&[2, 3], &[4, 5]]));
        assert_eq!(&m - 1, grid(&[&[0, 1], &[2, 3]]));
    }

    #[test]
    fn test_matrix_vector() {
        let m = grid(&[&[1, 2], &[3, 4]]);
        let v = Sequence::from_slice(&[5, 6]).unwrap();
        assert_eq!(&m * &v, Ok(Sequence::from_slice(&[17, 39]).unwrap()));

        let w = Sequence::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(&m * &w, Err(DynmatError::SizeMismatch));
    }

    #[test]
    fn test_matrix_multiply() {
        let a = grid(&[&[1, 0], &[0, 1]]);
        let b = grid(&[&[5, 6], &[7, 8]]);
        assert_eq!(&a * &b, Ok(b.clone()));

        let c = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(&c * &b, Ok(grid(&[&[19, 22], &[43, 50]])));
        assert_eq!(&b * &c, Ok(grid(&[&[23, 34], &[31, 46]])));

        let d = Grid::<i32>::new(3).unwrap();
        assert_eq!(&c * &d, Err(DynmatError::SizeMismatch));
    }

    #[test]
    fn test_identity_and_transpose() {
        let id = Grid::<i32>::identity(3).unwrap();
        assert_eq!(id, grid(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]));

        let m = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.transpose(), grid(&[&[1, 3], &[2, 4]]));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_display() {
        let m = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }

    #[test]
    fn test_read_tokens_row_major() {
        let mut m = Grid::<i32>::new(2).unwrap();
        m.read_tokens(&mut "1 2 3 4".split_whitespace()).unwrap();
        assert_eq!(m, grid(&[&[1, 2], &[3, 4]]));
        assert_eq!(m.token_count(), 4);

        assert_eq!(
            m.read_tokens(&mut "1 2 3".split_whitespace()),
            Err(DynmatError::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn test_from_str() {
        let m: Grid<i32> = "1 2\n\n3 4\n".parse().unwrap();
        assert_eq!(m, grid(&[&[1, 2], &[3, 4]]));

        assert_eq!("1 2\n3\n".parse::<Grid<i32>>(), Err(DynmatError::SizeMismatch));
        assert_eq!("".parse::<Grid<i32>>(), Err(DynmatError::InvalidSize));
    }

    #[test]
    fn test_into_rows() {
        let m = grid(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.into_rows(), vec![vec![1, 2], vec![3, 4]]);
    }
}
