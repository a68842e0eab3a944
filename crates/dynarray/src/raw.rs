//! Low-level slot storage backing [`DynamicArray`](crate::DynamicArray).
//!
//! [`Slots`] owns a fixed-length block of `MaybeUninit<T>` together with the
//! length of its initialised prefix. It exposes a safe API: callers can never
//! observe an uninitialised slot, and every initialised element is dropped
//! exactly once. Growth policy lives one level up in `array.rs`; this module
//! only moves bits.
//!
//! This is the only module in the crate allowed to contain `unsafe` code.
//! Every unsafe block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::mem::MaybeUninit;
use std::ptr;
use std::slice;

/// A boxed block of slots whose prefix `0..live` is initialised.
pub(crate) struct Slots<T> {
    /// Backing storage. Length is the capacity; never resized in place.
    block: Box<[MaybeUninit<T>]>,
    /// Number of initialised slots, always `<= block.len()`.
    live: usize,
}

impl<T> Slots<T> {
    /// Allocate a block of `capacity` uninitialised slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            block: Box::<[T]>::new_uninit_slice(capacity),
            live: 0,
        }
    }

    /// Total number of slots in the block.
    pub(crate) fn capacity(&self) -> usize {
        self.block.len()
    }

    /// Number of initialised slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// True when every slot holds a live element.
    pub(crate) fn is_full(&self) -> bool {
        self.live == self.block.len()
    }

    /// Write `value` into the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if the block is full. Callers reallocate first.
    pub(crate) fn push(&mut self, value: T) {
        assert!(!self.is_full(), "push into a full slot block");
        self.block[self.live].write(value);
        self.live += 1;
    }

    /// Move the last live element out, or `None` if there is none.
    ///
    /// The vacated slot is left as-is; it is simply no longer counted.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.live == 0 {
            return None;
        }
        self.live -= 1;
        // SAFETY: slot `live` was the last initialised slot. `live` has
        // already been decremented, so the slot is now outside the live
        // prefix and will never be read or dropped again.
        Some(unsafe { self.block[self.live].assume_init_read() })
    }

    /// Move the element at `index` out and close the gap.
    ///
    /// Every element in `index + 1..live` moves one slot to the left, in
    /// order. Returns `None` without touching anything if `index >= live`.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.live {
            return None;
        }
        let tail = self.live - index - 1;
        // SAFETY: `index < live <= capacity`, so `hole` points at an
        // initialised slot inside the block and `hole + 1 .. hole + 1 + tail`
        // ends at `live`, also inside the block. The value is read out
        // before the overlapping copy overwrites its slot. Afterwards slots
        // `0..live - 1` are initialised and slot `live - 1` holds a stale
        // bitwise duplicate that drops out of the live prefix below.
        let value = unsafe {
            let hole = self.block.as_mut_ptr().add(index);
            let value = hole.read().assume_init();
            ptr::copy(hole.add(1), hole, tail);
            value
        };
        self.live -= 1;
        Some(value)
    }

    /// Replace the block with a fresh one of `capacity` slots, moving the
    /// live prefix across in order.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than the live prefix.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        assert!(
            capacity >= self.live,
            "reallocation to {capacity} slots would drop {} live elements",
            self.live - capacity
        );
        let mut block = Box::<[T]>::new_uninit_slice(capacity);
        // SAFETY: source and destination are distinct allocations, both at
        // least `live` slots long, and the source prefix is initialised.
        unsafe {
            ptr::copy_nonoverlapping(self.block.as_ptr(), block.as_mut_ptr(), self.live);
        }
        // Dropping a `Box<[MaybeUninit<T>]>` frees the memory without running
        // element destructors; the elements are owned by `block` now.
        self.block = block;
    }

    /// The live prefix as a shared slice.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..live` are initialised and `MaybeUninit<T>` has
        // the same layout as `T`.
        unsafe { slice::from_raw_parts(self.block.as_ptr().cast::<T>(), self.live) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr().cast::<T>(), self.live) }
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        // SAFETY: the live prefix is initialised and is not touched again;
        // the block itself is freed by the `Box` afterwards.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            copy.push(value.clone());
        }
        copy
    }
}
