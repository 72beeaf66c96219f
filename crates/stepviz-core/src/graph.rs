//! Graph-family payload: per-step node/edge snapshots.
//!
//! Node and edge identity is fixed for the whole trace — only `state`
//! changes between steps. Geometry (`x`, `y`) is carried through unchanged
//! from the input graph so a renderer can draw every step the same way.

use serde::{Deserialize, Serialize};

/// Node identifier within one graph.
pub type NodeId = u32;

/// Role of a node within one traversal step.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    /// Not yet reached.
    #[default]
    Default,
    /// The node being processed right now.
    Current,
    /// Dequeued/popped and explored.
    Visited,
    /// Waiting in the BFS queue.
    Queued,
    /// Waiting on the DFS stack.
    Stacked,
}

/// Role of an edge within one traversal step.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    /// Not traversed.
    #[default]
    Default,
    /// Traversed in this very step.
    Current,
    /// Traversed in an earlier step.
    Visited,
}

/// A node as rendered in one step: input geometry plus a role tag.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NodeView {
    /// Stable node id.
    pub id: NodeId,
    /// Display label.
    pub label: String,
    /// Layout x coordinate (unchanged across the trace).
    pub x: f64,
    /// Layout y coordinate (unchanged across the trace).
    pub y: f64,
    /// Role tag for the current step.
    pub state: NodeState,
}

/// An edge as rendered in one step.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EdgeView {
    /// Endpoint id (direction is not meaningful; edges are undirected).
    pub source: NodeId,
    /// Endpoint id.
    pub target: NodeId,
    /// Role tag for the current step.
    pub state: EdgeState,
}

/// Deep snapshot of the whole graph for one step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    /// All nodes, in input order.
    pub nodes: Vec<NodeView>,
    /// All edges, in input order.
    pub edges: Vec<EdgeView>,
}
