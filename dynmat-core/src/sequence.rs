//! Owning fixed-length sequence with value semantics
//!
//! A [`Sequence`] owns a boxed slice whose capacity equals its length.
//! Cloning deep-copies every element; moving transfers the box. Checked
//! access, element-wise arithmetic and the dot product all validate
//! before any result storage is built.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Sub};
use core::slice::{Iter, IterMut};
use core::str::FromStr;

use crate::limits::MAX_SEQUENCE_LENGTH;
use crate::traits::{Element, ReadTokens};
use crate::validation::{validate_index, validate_length, validate_same_length};
use crate::{DynmatError, Result};

/// Fixed-length, owning, contiguous container
#[derive(Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    data: Box<[T]>,
}

impl<T: Default> Sequence<T> {
    /// Create a sequence of `length` default-valued elements
    ///
    /// Fails with `InvalidSize` for zero and `SizeExceeded` above
    /// [`MAX_SEQUENCE_LENGTH`].
    pub fn new(length: usize) -> Result<Self> {
        validate_length(length, MAX_SEQUENCE_LENGTH)?;
        Ok(Self {
            data: (0..length).map(|_| T::default()).collect(),
        })
    }

    /// Move the contents out, leaving the default length-1 sequence behind
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a sequence by copying an existing buffer
    pub fn from_slice(buffer: &[T]) -> Result<Self> {
        validate_length(buffer.len(), MAX_SEQUENCE_LENGTH)?;
        Ok(Self {
            data: Box::from(buffer),
        })
    }
}

impl<T> Sequence<T> {
    /// Number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Checked read access; `OutOfRange` when `index >= size()`
    pub fn at(&self, index: usize) -> Result<&T> {
        let index = validate_index(index, self.size())?;
        Ok(&self.data[index])
    }

    /// Checked write access; `OutOfRange` when `index >= size()`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let index = validate_index(index, self.size())?;
        Ok(&mut self.data[index])
    }

    /// Apply `f` to every element, producing a sequence of the same length
    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence {
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Fallible [`map`](Self::map); stops at the first error
    pub fn try_map<U, F>(&self, f: F) -> Result<Sequence<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        Ok(Sequence {
            data: self.data.iter().map(f).collect::<Result<_>>()?,
        })
    }

    /// Combine two sequences element by element
    ///
    /// Fails with `SizeMismatch` before calling `f` if the lengths differ.
    /// An error from `f` itself aborts the whole operation.
    pub fn try_zip_with<U, V, F>(&self, other: &Sequence<U>, mut f: F) -> Result<Sequence<V>>
    where
        F: FnMut(&T, &U) -> Result<V>,
    {
        validate_same_length(self.size(), other.size())?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(lhs, rhs)| f(lhs, rhs))
            .collect::<Result<_>>()?;
        Ok(Sequence { data })
    }

    /// Infallible-element variant of [`try_zip_with`](Self::try_zip_with)
    pub fn zip_with<U, V, F>(&self, other: &Sequence<U>, mut f: F) -> Result<Sequence<V>>
    where
        F: FnMut(&T, &U) -> V,
    {
        self.try_zip_with(other, |lhs, rhs| Ok(f(lhs, rhs)))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: bytemuck::Pod> Sequence<T> {
    /// Create a sequence from a raw byte buffer holding `T` values
    ///
    /// The buffer is copied. It must be aligned for `T` and hold a whole
    /// number of elements, otherwise `InvalidBuffer` is returned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let elements: &[T] =
            bytemuck::try_cast_slice(bytes).map_err(|_| DynmatError::InvalidBuffer)?;
        Self::from_slice(elements)
    }

    /// View the storage as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice::<T, u8>(self.as_slice())
    }
}

impl<T: Default> Default for Sequence<T> {
    fn default() -> Self {
        Self {
            data: alloc::vec![T::default()].into_boxed_slice(),
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    /// Reuses the existing storage when lengths match. Otherwise the new
    /// buffer is allocated before the old one is released.
    fn clone_from(&mut self, source: &Self) {
        if self.size() == source.size() {
            self.data.clone_from_slice(&source.data);
        } else {
            self.data = source.data.clone();
        }
    }
}

impl<T> TryFrom<Vec<T>> for Sequence<T> {
    type Error = DynmatError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        validate_length(data.len(), MAX_SEQUENCE_LENGTH)?;
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(value: Sequence<T>) -> Self {
        value.into_vec()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}: index {index} for sequence of size {}", self.size()),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let size = self.size();
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}: index {index} for sequence of size {size}"),
        }
    }
}

// Scalar operations

impl<T: Element> Add<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn add(self, val: T) -> Self::Output {
        self.map(|x| x.clone() + val.clone())
    }
}

impl<T: Element> Sub<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn sub(self, val: T) -> Self::Output {
        self.map(|x| x.clone() - val.clone())
    }
}

impl<T: Element> Mul<T> for &Sequence<T> {
    type Output = Sequence<T>;

    fn mul(self, val: T) -> Self::Output {
        self.map(|x| x.clone() * val.clone())
    }
}

// Vector operations

impl<T: Element> Add<&Sequence<T>> for &Sequence<T> {
    type Output = Result<Sequence<T>>;

    fn add(self, rhs: &Sequence<T>) -> Self::Output {
        self.zip_with(rhs, |a, b| a.clone() + b.clone())
    }
}

impl<T: Element> Sub<&Sequence<T>> for &Sequence<T> {
    type Output = Result<Sequence<T>>;

    fn sub(self, rhs: &Sequence<T>) -> Self::Output {
        self.zip_with(rhs, |a, b| a.clone() - b.clone())
    }
}

/// Dot product
impl<T: Element> Mul<&Sequence<T>> for &Sequence<T> {
    type Output = Result<T>;

    fn mul(self, rhs: &Sequence<T>) -> Self::Output {
        validate_same_length(self.size(), rhs.size())?;
        let mut acc = T::zero();
        for (a, b) in self.iter().zip(rhs.iter()) {
            acc += a.clone() * b.clone();
        }
        Ok(acc)
    }
}

// Text input/output

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.data.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

impl<S: ReadTokens> ReadTokens for Sequence<S> {
    fn token_count(&self) -> usize {
        self.iter().map(ReadTokens::token_count).sum()
    }

    fn read_tokens<'a, I>(&mut self, tokens: &mut I) -> Result<()>
    where
        I: Iterator<Item = &'a str>,
    {
        for element in self.iter_mut() {
            element.read_tokens(tokens)?;
        }
        Ok(())
    }
}

/// Parses every whitespace-separated token; the token count becomes the length.
impl<T: Default + ReadTokens> FromStr for Sequence<T> {
    type Err = DynmatError;

    fn from_str(s: &str) -> Result<Self> {
        let mut sequence = Self::new(s.split_whitespace().count())?;
        sequence.read_tokens(&mut s.split_whitespace())?;
        Ok(sequence)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Sequence::try_from(data).map_err(serde::de::Error::custom)
    }
}
