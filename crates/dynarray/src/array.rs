//! The doubling-growth dynamic array.
//!
//! A [`DynamicArray`] starts with a single slot. When a push finds every
//! slot occupied, the storage is reallocated at twice its capacity and the
//! live elements are moved across in order. Capacity never shrinks, so after
//! `n` pushes it is the smallest power of two that is at least `n`.

use std::fmt;
use std::ops::Deref;

use crate::error::ArrayError;
use crate::raw::Slots;

/// An amortised O(1)-append sequence that owns its elements.
///
/// Mutation happens only through [`push`](Self::push), [`pop`](Self::pop)
/// and [`remove`](Self::remove); read access is available through
/// [`Deref<Target = [T]>`](Deref), so slice methods such as `get`, `iter`,
/// `first` and `contains` all work on the live elements.
///
/// ```
/// use dynarray::{ArrayError, DynamicArray};
///
/// let mut arr = DynamicArray::new();
/// arr.push(1);
/// arr.push(2);
/// arr.push(3);
/// assert_eq!(arr.to_string(), "[1, 2, 3]");
///
/// assert_eq!(arr.remove(1), Ok(2));
/// assert_eq!(arr.pop(), Ok(3));
/// assert_eq!(arr.to_string(), "[1]");
/// assert_eq!(arr.remove(5), Err(ArrayError::IndexOutOfRange { index: 5, len: 1 }));
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    slots: Slots<T>,
}

impl<T> DynamicArray<T> {
    /// Number of slots allocated by [`new`](Self::new).
    pub const INITIAL_CAPACITY: usize = 1;

    /// Factor applied to the capacity each time the array fills up.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create an empty array with [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            slots: Slots::with_capacity(Self::INITIAL_CAPACITY),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.slots.live()
    }

    /// Number of allocated slots. Always a power of two, never below `len()`.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// True when the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `element`, doubling the capacity first if every slot is taken.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity overflows `usize`. Allocation failure
    /// aborts the process.
    pub fn push(&mut self, element: T) {
        if self.slots.is_full() {
            let doubled = self
                .capacity()
                .checked_mul(Self::GROWTH_FACTOR)
                .expect("capacity overflow");
            self.grow(doubled);
        }
        self.slots.push(element);
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ArrayError::EmptyContainer`] if there is none; the array is
    /// left untouched in that case.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.slots.pop().ok_or(ArrayError::EmptyContainer)
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it one position to the left.
    ///
    /// Runs in O(len - index). Returns [`ArrayError::IndexOutOfRange`] if
    /// `index >= len()`; the array is left untouched in that case.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.len();
        self.slots
            .remove(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// The live elements, in order.
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len());
        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len(),
            "growing array storage"
        );
        self.slots.reallocate(new_capacity);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

/// Renders the live elements as `[e0, e1, ..., en-1]`; an empty array is `[]`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
