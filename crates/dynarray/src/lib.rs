//! A doubling-growth dynamic array with explicit error returns.
//!
//! [`DynamicArray`] owns a contiguous block of slots and a count of how many
//! of them hold live elements. Appending to a full array reallocates at
//! twice the capacity, giving amortised O(1) `push`. Capacity starts at one
//! and never shrinks.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T>        growth policy, error mapping, Display
//! └── Slots<T>           Box<[MaybeUninit<T>]> + live prefix length
//! ```
//!
//! # Errors
//!
//! `pop` and `remove` return [`ArrayError`] instead of panicking. A failed
//! call leaves length, capacity and contents unchanged.
//!
//! # Safety
//!
//! The crate denies `unsafe_code`. The private `raw` module is the single
//! exception; it confines every uninitialised-memory access behind a safe
//! interface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod error;
mod raw;

pub use array::DynamicArray;
pub use error::ArrayError;
