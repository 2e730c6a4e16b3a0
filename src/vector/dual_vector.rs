//! `DualVector` — owned sequence container shared by both scalar backends.
//!
//! Purpose
//! -------
//! Hold ages, sizes, categories, observed counts, or predicted proportions
//! as an ordered, resizable sequence of a generic scalar, and move that data
//! across the three representations a model evaluation touches: plain
//! `Vec<T>` storage, the gradient-evaluation vector (`ndarray::Array1<T>`),
//! and the AD runtime's bookkeeping vector ([`TapeVec<T>`]).
//!
//! Key behaviors
//! -------------
//! - Value semantics: `Clone` duplicates storage; there is no shared mutable
//!   aliasing between two `DualVector`s.
//! - Checked access ([`DualVector::at`], [`DualVector::at_mut`]) returns
//!   [`VectorError::OutOfRange`]; `Index`/`IndexMut` are the unchecked path
//!   for loops whose bound is already established.
//! - Conversions are explicit and named. Each one sizes the destination to
//!   the source length and then copies element by element; the result is
//!   independently owned, never a view.
//! - Equality compares full contents (lengths and every element).
//!
//! Invariants & assumptions
//! ------------------------
//! - `len()` always equals the number of addressable elements.
//! - Positional mutators (`insert*`, `erase*`) validate their positions and
//!   report violations instead of panicking.
//! - `front`/`back` return `Option`, making the empty case explicit.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; category `i` of an observation lines up with
//!   category `i` of its prediction.
//! - Methods keep the sequence-container names the model code is written
//!   against (`push_back`, `erase`, `resize`, …) alongside the Rust
//!   iterator and slice surface.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction, checked access, mutators, `swap`, and
//!   round trips through every external representation for lengths 0, 1 and
//!   100.
use crate::numeric::{primitives::sum, scalar::Scalar};
use crate::tape::TapeVec;
use crate::vector::errors::{VectorError, VectorResult};
use ndarray::Array1;
use std::ops::{Index, IndexMut, Range};

/// Owned, resizable, index-addressable sequence of scalars.
///
/// Fields
/// ------
/// - `values`: `Vec<T>`
///   Backing storage. Private so that every mutation goes through the
///   documented operations.
///
/// Invariants
/// ----------
/// - Single owner; clones are deep copies.
/// - `len()` equals `values.len()`.
///
/// Performance
/// -----------
/// - `insert`/`erase` are O(n) in the number of shifted elements.
/// - `swap` is O(1) and never reallocates.
/// - Conversions allocate exactly one destination buffer of the source
///   length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DualVector<T> {
    values: Vec<T>,
}

impl<T> DualVector<T> {
    /// Empty vector.
    pub fn new() -> Self {
        DualVector { values: Vec::new() }
    }

    /// Empty vector with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        DualVector { values: Vec::with_capacity(cap) }
    }

    /// Take ownership of an existing `Vec<T>`.
    pub fn from_vec(values: Vec<T>) -> Self {
        DualVector { values }
    }

    // ---- Element access ----

    /// Checked access.
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> VectorResult<&T> {
        let len = self.values.len();
        self.values.get(index).ok_or(VectorError::OutOfRange { index, len })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> VectorResult<&mut T> {
        let len = self.values.len();
        self.values.get_mut(index).ok_or(VectorError::OutOfRange { index, len })
    }

    /// First element, `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.values.first_mut()
    }

    /// Last element, `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.values.last_mut()
    }

    /// Contiguous view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.values.iter_mut()
    }

    // ---- Capacity ----

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Upper bound on the number of elements the container can address.
    pub fn max_size(&self) -> usize {
        let elem = std::mem::size_of::<T>().max(1);
        isize::MAX as usize / elem
    }

    pub fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.values.shrink_to_fit();
    }

    // ---- Modifiers ----

    /// Remove every element; capacity is kept.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Append `value` at the end.
    pub fn push_back(&mut self, value: T) {
        self.values.push(value);
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.values.pop()
    }

    /// Insert `value` before position `pos` (`pos == len()` appends).
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: T) -> VectorResult<()> {
        self.check_insert_pos(pos)?;
        self.values.insert(pos, value);
        Ok(())
    }

    /// Remove and return the element at `pos`, shifting the tail left.
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `pos >= len()`.
    pub fn erase(&mut self, pos: usize) -> VectorResult<T> {
        let len = self.values.len();
        if pos >= len {
            return Err(VectorError::OutOfRange { index: pos, len });
        }
        Ok(self.values.remove(pos))
    }

    /// Remove the elements in `range`, shifting the tail left.
    ///
    /// # Errors
    /// [`VectorError::InvalidRange`] when `range.start > range.end` or
    /// `range.end > len()`.
    pub fn erase_range(&mut self, range: Range<usize>) -> VectorResult<()> {
        let len = self.values.len();
        if range.start > range.end || range.end > len {
            return Err(VectorError::InvalidRange { start: range.start, end: range.end, len });
        }
        self.values.drain(range);
        Ok(())
    }

    /// Exchange storage with `other` in O(1) without reallocation.
    pub fn swap(&mut self, other: &mut DualVector<T>) {
        std::mem::swap(&mut self.values, &mut other.values);
    }

    /// Unwrap into the backing `Vec<T>` without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    fn check_insert_pos(&self, pos: usize) -> VectorResult<()> {
        let len = self.values.len();
        if pos > len {
            return Err(VectorError::OutOfRange { index: pos, len });
        }
        Ok(())
    }
}

impl<T: Clone> DualVector<T> {
    /// `count` copies of `fill`.
    pub fn from_elem(count: usize, fill: T) -> Self {
        DualVector { values: vec![fill; count] }
    }

    /// Copy a slice.
    pub fn from_slice(values: &[T]) -> Self {
        DualVector { values: values.to_vec() }
    }

    /// Copy from the gradient-evaluation vector.
    pub fn from_array1(other: &Array1<T>) -> Self {
        let mut values = Vec::with_capacity(other.len());
        for v in other.iter() {
            values.push(v.clone());
        }
        DualVector { values }
    }

    /// Copy from the tape bookkeeping vector.
    pub fn from_tape_vec(other: &TapeVec<T>) -> Self {
        let mut values = Vec::with_capacity(other.len());
        for i in 0..other.len() {
            values.push(other[i].clone());
        }
        DualVector { values }
    }

    /// Resize to `len`, filling new trailing slots with `value`.
    pub fn resize_with_value(&mut self, len: usize, value: T) {
        self.values.resize(len, value);
    }

    /// Insert `count` copies of `value` before `pos`.
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `pos > len()`.
    pub fn insert_n(&mut self, pos: usize, count: usize, value: T) -> VectorResult<()> {
        self.check_insert_pos(pos)?;
        self.values.splice(pos..pos, std::iter::repeat(value).take(count));
        Ok(())
    }

    /// Insert a copy of `items` before `pos`.
    ///
    /// # Errors
    /// [`VectorError::OutOfRange`] when `pos > len()`.
    pub fn insert_slice(&mut self, pos: usize, items: &[T]) -> VectorResult<()> {
        self.check_insert_pos(pos)?;
        self.values.splice(pos..pos, items.iter().cloned());
        Ok(())
    }

    /// Copy into a plain `Vec<T>`.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Copy into the gradient-evaluation vector.
    pub fn to_array1(&self) -> Array1<T> {
        Array1::from_vec(self.values.clone())
    }
}

impl<T: Clone + Default> DualVector<T> {
    /// Resize to `len`; shrinking drops trailing elements, growing appends
    /// `T::default()`.
    pub fn resize(&mut self, len: usize) {
        self.values.resize(len, T::default());
    }

    /// Copy into the tape bookkeeping vector.
    ///
    /// The destination is sized to `len()` first, then filled index by
    /// index.
    pub fn to_tape_vec(&self) -> TapeVec<T> {
        let mut out = TapeVec::new();
        out.resize(self.values.len());
        for (i, v) in self.values.iter().enumerate() {
            out[i] = v.clone();
        }
        out
    }
}

impl<T: Scalar> DualVector<T> {
    /// Sum of all elements (zero when empty).
    pub fn sum(&self) -> T {
        sum(self)
    }
}

impl<T> Index<usize> for DualVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for DualVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T> FromIterator<T> for DualVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DualVector { values: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for DualVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DualVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DualVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter_mut()
    }
}
