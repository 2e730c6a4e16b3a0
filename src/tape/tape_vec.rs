//! `TapeVec` — the tape's own bookkeeping vector.
//!
//! A deliberately small owned sequence used inside the AD runtime: the node
//! list of a [`Tape`](super::recorder::Tape), the registered independent
//! variables of a [`Recording`](super::Recording), and the adjoint buffer of
//! the reverse sweep. It exposes only what that bookkeeping needs (sizing,
//! appending, indexing, iteration). Model code works with
//! [`DualVector`](crate::vector::DualVector) and converts explicitly with
//! `DualVector::from_tape_vec` / `DualVector::to_tape_vec`.
use std::ops::{Index, IndexMut};

/// Owned, resizable bookkeeping vector of the AD tape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TapeVec<T> {
    items: Vec<T>,
}

impl<T> TapeVec<T> {
    /// Empty vector.
    pub fn new() -> Self {
        TapeVec { items: Vec::new() }
    }

    /// Empty vector with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        TapeVec { items: Vec::with_capacity(cap) }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one element and return its index.
    pub fn push(&mut self, value: T) -> usize {
        self.items.push(value);
        self.items.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone + Default> TapeVec<T> {
    /// Vector of `len` default elements.
    pub fn with_len(len: usize) -> Self {
        TapeVec { items: vec![T::default(); len] }
    }

    /// Resize to exactly `len`, truncating or filling with `T::default()`.
    pub fn resize(&mut self, len: usize) {
        self.items.resize(len, T::default());
    }
}

impl<T> Index<usize> for TapeVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for TapeVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for TapeVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TapeVec { items: iter.into_iter().collect() }
    }
}

impl<'a, T> IntoIterator for &'a TapeVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
