//! stepviz-scalar — step traces for small scalar recurrences.
//!
//! Two generators over a labeled-value payload: the iterative Fibonacci
//! table build and the Euclidean GCD. Out-of-domain input (Fibonacci index
//! outside `0..=92`, non-positive GCD operands) yields an empty trace — a
//! defined contract, not an error.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs, clippy::all, clippy::unwrap_used, clippy::expect_used)]

/// Fibonacci dynamic-programming table trace.
pub mod fibonacci;
/// Euclidean GCD trace.
pub mod gcd;

pub use fibonacci::{fibonacci, MAX_INDEX};
pub use gcd::gcd;
