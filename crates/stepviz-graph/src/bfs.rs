//! Breadth-first traversal trace generator.
//!
//! Classic FIFO queue starting at `nodes[0]`. A node shows `Queued` while
//! enqueued-but-not-dequeued and `Visited` once dequeued; the node being
//! processed shows `Current`. Neighbors are scanned in edge-list order;
//! already-visited neighbors still produce a narration step (for playback
//! pacing) without any state change, unvisited neighbors produce an
//! edge-highlight step followed by an enqueue step.

use crate::model::Graph;
use std::collections::{HashSet, VecDeque};
use stepviz_core::graph::NodeId;
use stepviz_core::{
    EdgeState, EdgeView, GraphSnapshot, GraphTrace, NodeState, NodeView, Step, StepMeta,
};

/// Generate the BFS trace for `graph`, starting at `nodes[0]`.
///
/// Invalid shapes (no nodes, dangling edge endpoints) yield an empty trace.
#[must_use]
pub fn bfs(graph: &Graph) -> GraphTrace {
    if !graph.is_valid() {
        return Vec::new();
    }

    let start = graph.nodes[0].id;
    let adjacency = graph.adjacency();

    let mut steps = GraphTrace::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut visit_order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    let snapshot = |current: Option<NodeId>,
                    visited: &HashSet<NodeId>,
                    queue: &VecDeque<NodeId>,
                    highlight: Option<(NodeId, NodeId)>| {
        let nodes = graph
            .nodes
            .iter()
            .map(|n| {
                let state = if current == Some(n.id) {
                    NodeState::Current
                } else if queue.contains(&n.id) {
                    NodeState::Queued
                } else if visited.contains(&n.id) {
                    NodeState::Visited
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
                let state = match highlight {
                    Some((a, b))
                        if Graph::edge_key(e.source, e.target) == Graph::edge_key(a, b) =>
                    {
                        EdgeState::Visited
                    }
                    _ => EdgeState::Default,
                };
                EdgeView { source: e.source, target: e.target, state }
            })
            .collect();
        GraphSnapshot { nodes, edges }
    };

    steps.push(Step::new(
        snapshot(None, &visited, &queue, None),
        StepMeta::describe(format!(
            "Initial graph state. Starting BFS from node {start}"
        )),
    ));

    visited.insert(start);
    visit_order.push(start);
    queue.push_back(start);

    steps.push(Step::new(
        snapshot(Some(start), &visited, &VecDeque::new(), None),
        StepMeta::describe(format!(
            "Starting BFS from node {start}. Add {start} to the queue."
        )),
    ));

    while let Some(current) = queue.pop_front() {
        steps.push(Step::new(
            snapshot(Some(current), &visited, &queue, None),
            StepMeta::describe(format!(
                "Dequeue node {current} and mark it as visited."
            )),
        ));

        for &neighbor in &adjacency[&current] {
            if visited.contains(&neighbor) {
                // No state change; the step exists for playback pacing.
                steps.push(Step::new(
                    snapshot(Some(current), &visited, &queue, None),
                    StepMeta::describe(format!(
                        "Neighbor {neighbor} is already visited, so we skip it."
                    )),
                ));
                continue;
            }

            // Highlight the traversed edge with the neighbor about to join
            // the queue.
            let mut preview = queue.clone();
            preview.push_back(neighbor);
            steps.push(Step::new(
                snapshot(Some(current), &visited, &preview, Some((current, neighbor))),
                StepMeta::describe(format!(
                    "Explore edge from {current} to {neighbor}. {neighbor} is not visited yet."
                )),
            ));

            visited.insert(neighbor);
            visit_order.push(neighbor);
            queue.push_back(neighbor);

            let contents = queue
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            steps.push(Step::new(
                snapshot(Some(current), &visited, &queue, Some((current, neighbor))),
                StepMeta::describe(format!(
                    "Add {neighbor} to the queue. Queue now contains: [{contents}]"
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
        snapshot(None, &visited, &queue, None),
        StepMeta::describe(format!(
            "BFS traversal complete. Visited nodes: [{order}]"
        )),
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Node};

    fn path_graph(n: u32) -> Graph {
        Graph {
            nodes: (0..n)
                .map(|i| Node {
                    id: i,
                    label: format!("N{i}"),
                    x: f64::from(i),
                    y: 0.0,
                })
                .collect(),
            edges: (0..n.saturating_sub(1))
                .map(|i| Edge { source: i, target: i + 1 })
                .collect(),
        }
    }

    #[test]
    fn invalid_graph_yields_empty_trace() {
        assert!(bfs(&Graph::default()).is_empty());
    }

    #[test]
    fn terminal_step_marks_component_visited() {
        let trace = bfs(&path_graph(4));
        let last = trace.last().unwrap();
        assert!(last
            .payload
            .nodes
            .iter()
            .all(|n| n.state == NodeState::Visited));
    }

    #[test]
    fn disconnected_nodes_stay_default() {
        let mut g = path_graph(3);
        g.nodes.push(Node { id: 9, label: "X".into(), x: 5.0, y: 5.0 });
        let trace = bfs(&g);
        for step in &trace {
            let lone = step.payload.nodes.iter().find(|n| n.id == 9).unwrap();
            assert_eq!(lone.state, NodeState::Default);
        }
    }

    #[test]
    fn geometry_is_carried_through_unchanged() {
        let g = path_graph(3);
        for step in bfs(&g) {
            for (view, node) in step.payload.nodes.iter().zip(&g.nodes) {
                assert_eq!(view.x, node.x);
                assert_eq!(view.y, node.y);
            }
        }
    }

    #[test]
    fn revisit_of_queued_neighbor_is_a_noop_narration() {
        // Triangle: when node 1 is dequeued, nodes 0 and 2 are already
        // visited/queued and both produce skip steps.
        let g = Graph {
            nodes: (0..3)
                .map(|i| Node { id: i, label: format!("N{i}"), x: 0.0, y: 0.0 })
                .collect(),
            edges: vec![
                Edge { source: 0, target: 1 },
                Edge { source: 1, target: 2 },
                Edge { source: 2, target: 0 },
            ],
        };
        let trace = bfs(&g);
        assert!(trace
            .iter()
            .any(|s| s.meta.description.contains("already visited")));
    }
}
