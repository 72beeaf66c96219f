//! stepviz-core — the shared step/trace model for algorithm visualization.
//!
//! Every generator in the workspace produces the same artifact: an ordered,
//! fully materialized sequence of [`Step`]s, each a deep snapshot of the
//! algorithm's working state plus a human-readable narration. This crate
//! defines that contract:
//!
//! - `step`: the `Step<P>` envelope and its `StepMeta` annotations.
//! - `array`: the array-family payload (`Element` + `CellState`).
//! - `graph`: the graph-family payload (`GraphSnapshot` + node/edge states).
//! - `scalar`: the recurrence-family payload (`LabeledValue` + `ScalarState`).
//! - `io`: JSON/CBOR read/write helpers for finished traces.
//!
//! Traces are pure data: append-only during generation, immutable after
//! return, and safe to share between concurrent readers. Consumers index
//! into them (see `stepviz-playback`); they never re-run the algorithm.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::unwrap_used, clippy::expect_used)]

/// Array-family payload: tagged elements.
pub mod array;
/// Graph-family payload: node/edge snapshots.
pub mod graph;
/// JSON/CBOR I/O helpers for traces.
pub mod io;
/// Recurrence-family payload: labeled values.
pub mod scalar;
/// The `Step` envelope and metadata.
pub mod step;

pub use array::{annotate, CellState, Element};
pub use graph::{EdgeState, EdgeView, GraphSnapshot, NodeState, NodeView};
pub use scalar::{LabeledValue, ScalarState};
pub use step::{SearchRange, Step, StepMeta, Trace};

/// A trace over tagged array elements (sorting/searching generators).
pub type ArrayTrace = Trace<Vec<Element>>;
/// A trace over graph snapshots (BFS/DFS generators).
pub type GraphTrace = Trace<GraphSnapshot>;
/// A trace over labeled values (Fibonacci/GCD generators).
pub type ScalarTrace = Trace<Vec<LabeledValue>>;
