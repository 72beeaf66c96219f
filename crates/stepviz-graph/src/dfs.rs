//! Depth-first traversal trace generator.
//!
//! Uses an explicit LIFO stack rather than recursion so the trace stays a
//! flat, replayable sequence and deep graphs cannot exhaust the call
//! stack. Neighbors are pushed in reverse adjacency order, which makes the
//! pop order match the recursive left-to-right convention. Every traversed
//! edge is remembered in a persistent visited-edge set and stays `Visited`
//! in all later steps; the edge traversed in the current step is
//! additionally shown as `Current` for that one step.

use crate::model::Graph;
use std::collections::HashSet;
use stepviz_core::graph::NodeId;
use stepviz_core::{
    EdgeState, EdgeView, GraphSnapshot, GraphTrace, NodeState, NodeView, Step, StepMeta,
};

/// Generate the DFS trace for `graph`, starting at `nodes[0]`.
///
/// Invalid shapes (no nodes, dangling edge endpoints) yield an empty trace.
#[must_use]
pub fn dfs(graph: &Graph) -> GraphTrace {
    if !graph.is_valid() {
        return Vec::new();
    }

    let start = graph.nodes[0].id;

    let mut steps = GraphTrace::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visit_order: Vec<NodeId> = Vec::new();
    let mut visited_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut stack: Vec<NodeId> = vec![start];

    let snapshot = |current: Option<NodeId>,
                    visited: &HashSet<NodeId>,
                    stack: &[NodeId],
                    visited_edges: &HashSet<(NodeId, NodeId)>,
                    highlight: Option<(NodeId, NodeId)>| {
        let nodes = graph
            .nodes
            .iter()
            .map(|n| {
                let state = if current == Some(n.id) {
                    NodeState::Current
                } else if visited.contains(&n.id) {
                    NodeState::Visited
                } else if stack.contains(&n.id) {
                    NodeState::Stacked
                } else {
                    NodeState::Default
                };
                NodeView { id: n.id, label: n.label.clone(), x: n.x, y: n.y, state }
            })
            .collect();
        let edges = graph
            .edges
            .iter()
            .map(|e| {
                let key = Graph::edge_key(e.source, e.target);
                let state = if highlight.map(|(a, b)| Graph::edge_key(a, b)) == Some(key) {
                    EdgeState::Current
                } else if visited_edges.contains(&key) {
                    EdgeState::Visited
                } else {
                    EdgeState::Default
                };
                EdgeView { source: e.source, target: e.target, state }
            })
            .collect();
        GraphSnapshot { nodes, edges }
    };

    steps.push(Step::new(
        snapshot(None, &visited, &stack, &visited_edges, None),
        StepMeta::describe(format!(
            "Initial graph state. Starting DFS from node {start}"
        )),
    ));

    while let Some(current) = stack.pop() {
        steps.push(Step::new(
            snapshot(Some(current), &visited, &stack, &visited_edges, None),
            StepMeta::describe(format!("Pop node {current} from stack and process.")),
        ));

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current);
        visit_order.push(current);

        steps.push(Step::new(
            snapshot(Some(current), &visited, &stack, &visited_edges, None),
            StepMeta::describe(format!("Visiting node {current}")),
        ));

        // Unvisited neighbors in edge-list order, then pushed reversed so
        // the first neighbor is popped first.
        let mut neighbors: Vec<NodeId> = Vec::new();
        for edge in &graph.edges {
            if edge.source == current && !visited.contains(&edge.target) {
                neighbors.push(edge.target);
            } else if edge.target == current && !visited.contains(&edge.source) {
                neighbors.push(edge.source);
            }
        }

        for &neighbor in neighbors.iter().rev() {
            stack.push(neighbor);
            visited_edges.insert(Graph::edge_key(current, neighbor));
            steps.push(Step::new(
                snapshot(
                    Some(current),
                    &visited,
                    &stack,
                    &visited_edges,
                    Some((current, neighbor)),
                ),
                StepMeta::describe(format!(
                    "Adding node {neighbor} to the stack and traversing edge ({current}, {neighbor})."
                )),
            ));
        }
    }

    let order = visit_order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    steps.push(Step::new(
        snapshot(None, &visited, &[], &visited_edges, None),
        StepMeta::describe(format!(
            "DFS traversal complete. Visited nodes: [{order}]"
        )),
    ));

    steps
}
