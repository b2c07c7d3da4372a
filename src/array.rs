//!
//! `NumericArray`, a resizable one-dimensional numeric container
//!
//! A contiguous buffer of `len` elements with value semantics: `clone()`
//! always deep-copies, so no two arrays ever share storage. Element-wise
//! arithmetic lives in [`ops`]; comparison helpers for float elements in
//! [`approx`].
//!
//! All accessors index 0-based.
//!
use itertools::Itertools;
use log::trace;
use num_traits::Zero;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

pub mod approx;
pub mod ops;

/// One-dimensional numeric array
///
/// * `len` elements of type `T` in one contiguous allocation
/// * deep copy on `clone()`
/// * compound assignment operators with scalars and same-length arrays
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericArray<T> {
    /// backing storage; its length is the logical length
    buf: Vec<T>,
}

impl<T: Copy> NumericArray<T> {
    /// Create an array of `len` elements, each initialized to `fill`.
    pub fn new(len: usize, fill: T) -> NumericArray<T> {
        NumericArray {
            buf: vec![fill; len],
        }
    }
    /// Create an array by copying all elements of the slice.
    pub fn from_slice(elements: &[T]) -> NumericArray<T> {
        NumericArray {
            buf: elements.to_vec(),
        }
    }
    /// Set every element to `x`. Length is unchanged.
    ///
    /// On an empty array this iterates zero times and does nothing.
    pub fn fill(&mut self, x: T) {
        for v in self.buf.iter_mut() {
            *v = x;
        }
    }
    /// Copy the length and elements of `other` into `self`.
    ///
    /// If the lengths already match, elements are copied in place and the
    /// buffer is not reallocated (pointers from [`NumericArray::as_ptr`]
    /// stay valid). Otherwise the current buffer is dropped and a fresh
    /// one of `other.len()` elements is allocated.
    ///
    /// Self-assignment cannot occur: `self` and `other` cannot alias under
    /// the borrow rules.
    pub fn assign(&mut self, other: &NumericArray<T>) {
        if self.len() == other.len() {
            self.buf.copy_from_slice(&other.buf);
        } else {
            trace!("assign: reallocating {} -> {}", self.len(), other.len());
            self.buf = other.buf.clone();
        }
    }
}

impl<T: Copy + Zero> NumericArray<T> {
    /// Create an array of `len` zero elements.
    pub fn zeros(len: usize) -> NumericArray<T> {
        NumericArray::new(len, T::zero())
    }
    /// Resize to `new_len` elements.
    ///
    /// Resizing to the current length is a no-op and preserves all
    /// contents. Resizing to any other length (growing or shrinking)
    /// discards the whole buffer and allocates a fresh one: previous
    /// element values are lost. Post-resize contents are unspecified
    /// (currently zero) and must not be relied on.
    pub fn resize(&mut self, new_len: usize) {
        if self.len() == new_len {
            return;
        }
        trace!(
            "resize: discarding buffer {} -> {}",
            self.len(),
            new_len
        );
        self.buf = vec![T::zero(); new_len];
    }
}

impl<T> NumericArray<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }
    /// Alias of [`NumericArray::len`], kept for compatibility with the
    /// `dim()` spelling.
    #[inline]
    pub fn dim(&self) -> usize {
        self.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    /// Get the reference to the element at `index`, or `None` if out of
    /// range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }
    /// Get the mutable reference to the element at `index`, or `None` if
    /// out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }
    /// View the whole buffer as a slice, for routines that take a flat
    /// contiguous array.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }
    /// Raw pointer to the first element.
    ///
    /// Invalidated by any reallocating operation (a length-changing
    /// [`NumericArray::resize`] or [`NumericArray::assign`], or drop).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }
    /// Raw mutable pointer to the first element. Same validity rule as
    /// [`NumericArray::as_ptr`].
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
    /// Iterator over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }
    /// Mutable iterator over the elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }
}

/// Implement index access, `a[i]`. Panics if `i >= a.len()`.
impl<T> Index<usize> for NumericArray<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buf[index]
    }
}

/// Implement index write access, `a[i] = x`. Panics if `i >= a.len()`.
impl<T> IndexMut<usize> for NumericArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf[index]
    }
}

impl<T> From<Vec<T>> for NumericArray<T> {
    fn from(buf: Vec<T>) -> NumericArray<T> {
        NumericArray { buf }
    }
}

impl<'a, T: Copy> From<&'a [T]> for NumericArray<T> {
    fn from(elements: &'a [T]) -> NumericArray<T> {
        NumericArray::from_slice(elements)
    }
}

impl<T> FromIterator<T> for NumericArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> NumericArray<T> {
        let buf: Vec<T> = iter.into_iter().collect();
        NumericArray { buf }
    }
}

impl<T> IntoIterator for NumericArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NumericArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut NumericArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for NumericArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.buf.iter().format(", "))
    }
}
