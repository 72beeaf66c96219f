//! stepviz-array — step-trace generators over tagged arrays.
//!
//! Each generator is a pure function from an initial value sequence (plus a
//! search target where relevant) to a fully materialized
//! [`stepviz_core::ArrayTrace`]. The working array is transient and private
//! to the call; every recorded step is a deep, independent copy, so a
//! finished trace can be scrubbed forward and backward without re-running
//! the algorithm.
//!
//! Two invariants hold across all generators here:
//!
//! - the multiset of values in every step equals the multiset of the input
//!   (values are only reordered and re-tagged, never invented or dropped);
//! - sorting traces end with a step where every element is `Sorted` and the
//!   values are in non-decreasing order.
//!
//! Sorts short-circuit on length ≤ 1 to a two-step trace (initial + final).

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs, clippy::all, clippy::unwrap_used, clippy::expect_used)]

/// Binary search (defensively re-sorts its input).
pub mod binary;
/// Bubble sort, full worst-case pass structure.
pub mod bubble;
/// Insertion sort with per-shift steps.
pub mod insertion;
/// Linear search with a running comparison counter.
pub mod linear;
/// Top-down merge sort with in-place placement rotations.
pub mod merge;
/// Quick sort with Lomuto partitioning.
pub mod quick;
/// Selection sort, one swap per pass.
pub mod selection;

mod util;

pub use binary::binary_search;
pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use linear::linear_search;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;
