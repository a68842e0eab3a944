//! Benchmark fixtures for the `dynarray` container.
//!
//! - [`filled`]: an array holding `0..len`, built through `push`
//! - [`OPS_SIZES`]: element counts shared by every benchmark

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;

/// Element counts used across the push, pop and remove benchmarks.
pub const OPS_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Build an array holding `0..len` in order.
pub fn filled(len: usize) -> DynamicArray<u64> {
    (0..len as u64).collect()
}
