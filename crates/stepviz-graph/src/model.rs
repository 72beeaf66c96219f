//! Input graph model for the traversal generators.
//!
//! Identity and geometry are fixed for the lifetime of a trace; the
//! generators clone this structure into per-step snapshots and only ever
//! vary the state tags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stepviz_core::graph::NodeId;

/// A laid-out graph node.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Stable identifier, unique within the graph.
    pub id: NodeId,
    /// Display label.
    pub label: String,
    /// Layout x coordinate.
    pub x: f64,
    /// Layout y coordinate.
    pub y: f64,
}

/// An undirected edge between two node ids. `source`/`target` labels carry
/// no direction; traversal walks both ways.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    /// One endpoint.
    pub source: NodeId,
    /// The other endpoint.
    pub target: NodeId,
}

/// Node/edge input consumed by the traversal generators.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Graph {
    /// Nodes; `nodes[0]` is the traversal start.
    pub nodes: Vec<Node>,
    /// Undirected edges over node ids.
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Whether the graph is a usable traversal input: at least one node and
    /// every edge endpoint resolves to an existing node id.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        self.edges.iter().all(|e| {
            self.nodes.iter().any(|n| n.id == e.source)
                && self.nodes.iter().any(|n| n.id == e.target)
        })
    }

    /// Undirected adjacency lists, neighbors in edge-list order (each edge
    /// contributes both directions).
    #[must_use]
    pub fn adjacency(&self) -> HashMap<NodeId, Vec<NodeId>> {
        let mut adj: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for node in &self.nodes {
            adj.entry(node.id).or_default();
        }
        for edge in &self.edges {
            adj.entry(edge.source).or_default().push(edge.target);
            adj.entry(edge.target).or_default().push(edge.source);
        }
        adj
    }

    /// Normalized undirected key for an edge between `a` and `b`.
    #[inline]
    #[must_use]
    pub fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    }
}
