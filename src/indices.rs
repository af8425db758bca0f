//! Data structures to hold indices that may be either `u16` or `u32` to save space.

use crate::error::{KdbushError, Result};

/// Owned storage for the tree-position → input-position mapping of an index.
///
/// Indexes of fewer than 65536 points store their ids as `u16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ids {
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl Default for Ids {
    fn default() -> Self {
        Self::U16(vec![])
    }
}

impl Ids {
    /// The identity permutation `0..num_items`.
    pub fn identity(num_items: usize) -> Result<Self> {
        if num_items < 65536 {
            Ok(Self::U16((0..num_items as u16).collect()))
        } else if num_items <= u32::MAX as usize {
            Ok(Self::U32((0..num_items as u32).collect()))
        } else {
            Err(KdbushError::TooManyPoints(num_items))
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::U16(arr) => arr.len(),
            Self::U32(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        match self {
            Self::U16(arr) => arr.swap(a, b),
            Self::U32(arr) => arr.swap(a, b),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> usize {
        match self {
            Self::U16(arr) => arr[index] as usize,
            Self::U32(arr) => arr[index] as usize,
        }
    }

    /// Borrow these ids as a read-only [`Indices`] view.
    pub fn as_indices(&self) -> Indices<'_> {
        match self {
            Self::U16(arr) => Indices::U16(arr),
            Self::U32(arr) => Indices::U32(arr),
        }
    }
}

/// A slice of indices that may be either `u16` or `u32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Indices<'a> {
    U16(&'a [u16]),
    U32(&'a [u32]),
}

impl Indices<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::U16(arr) => arr.len(),
            Self::U32(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> usize {
        match self {
            Self::U16(arr) => arr[index] as usize,
            Self::U32(arr) => arr[index] as usize,
        }
    }

    /// Copy the ids out into a `Vec<usize>`.
    pub fn to_vec(&self) -> Vec<usize> {
        match self {
            Self::U16(arr) => arr.iter().map(|&id| id as usize).collect(),
            Self::U32(arr) => arr.iter().map(|&id| id as usize).collect(),
        }
    }
}
