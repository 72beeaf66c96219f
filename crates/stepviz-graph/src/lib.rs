//! stepviz-graph — graph inputs and traversal step-trace generators.
//!
//! - `model`: the input graph (`Graph`/`Node`/`Edge`) consumed by the
//!   traversal generators, plus adjacency and snapshot helpers.
//! - `bfs` / `dfs`: breadth-first and depth-first traversal traces over a
//!   node+state / edge+state annotated graph.
//! - `synth`: seeded random-graph generation with a small force-directed
//!   layout pass (a collaborator for demos and tests; the traversal
//!   generators depend only on ids and edges, not on layout quality).
//!
//! Traversals start at `nodes[0]` and treat every edge as undirected.
//! Disconnected graphs are valid input: nodes outside the start component
//! simply stay `Default` for the whole trace. Invalid shapes (no nodes,
//! dangling edge endpoints) yield an empty trace, never an error.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(missing_docs, clippy::all, clippy::unwrap_used, clippy::expect_used)]

/// Breadth-first traversal trace generator.
pub mod bfs;
/// Depth-first traversal trace generator (explicit stack).
pub mod dfs;
/// Input graph model and adjacency helpers.
pub mod model;
/// Seeded random-graph synthesizer with force-directed layout.
pub mod synth;

pub use bfs::bfs;
pub use dfs::dfs;
pub use model::{Edge, Graph, Node};
pub use synth::generate_random_graph;
