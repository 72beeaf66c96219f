//! Seeded random-graph synthesizer.
//!
//! Builds a connected graph (path spine plus a closing cycle edge and a
//! sprinkle of extra edges), then relaxes node positions with a small
//! repulsion/spring force layout over a fixed iteration budget. The layout
//! is a heuristic for overlap reduction, not a contract — traversal
//! generators consume only ids and edges.

use crate::model::{Edge, Graph, Node};
use rand::{rngs::StdRng, Rng as _, SeedableRng};

const LAYOUT_ITERATIONS: usize = 10;
const REPULSION_FORCE: f64 = 2000.0;
const SPRING_LENGTH: f64 = 100.0;
const SPRING_FORCE: f64 = 0.1;
const EXTRA_EDGE_PROBABILITY: f64 = 0.2;

/// Generate a connected random graph with `node_count` nodes.
///
/// Deterministic for a given `(node_count, seed)` pair. `node_count == 0`
/// yields an empty (invalid) graph.
#[must_use]
pub fn generate_random_graph(node_count: u32, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut nodes: Vec<Node> = (0..node_count)
        .map(|i| Node {
            id: i,
            label: label_for(i),
            x: f64::from(100 + rng.random_range(0..400)),
            y: f64::from(50 + rng.random_range(0..200)),
        })
        .collect();

    let mut edges: Vec<Edge> = Vec::new();

    // Path spine keeps the graph connected.
    for i in 0..node_count.saturating_sub(1) {
        edges.push(Edge { source: i, target: i + 1 });
    }

    // Close the spine into a cycle (skipped for tiny graphs where it would
    // duplicate the spine edge).
    if node_count > 2 {
        edges.push(Edge { source: node_count - 1, target: 0 });
    }

    // Sprinkle extra undirected edges.
    for i in 0..node_count {
        for j in 0..node_count {
            if i != j && rng.random_bool(EXTRA_EDGE_PROBABILITY) {
                let exists = edges.iter().any(|e| {
                    Graph::edge_key(e.source, e.target) == Graph::edge_key(i, j)
                });
                if !exists {
                    edges.push(Edge { source: i, target: j });
                }
            }
        }
    }

    apply_force_layout(&mut nodes, &edges, LAYOUT_ITERATIONS);

    Graph { nodes, edges }
}

/// `A`, `B`, … for the first 26 nodes, `N27`-style beyond that.
fn label_for(i: u32) -> String {
    if i < 26 {
        char::from(b'A' + i as u8).to_string()
    } else {
        format!("N{i}")
    }
}

/// Iterative repulsion/spring relaxation over a fixed budget, clamped to
/// the drawing viewport.
fn apply_force_layout(nodes: &mut [Node], edges: &[Edge], iterations: usize) {
    for _ in 0..iterations {
        for i in 0..nodes.len() {
            let mut fx = 0.0;
            let mut fy = 0.0;

            // Inverse-square repulsion between every node pair.
            for j in 0..nodes.len() {
                if i == j {
                    continue;
                }
                let dx = nodes[i].x - nodes[j].x;
                let dy = nodes[i].y - nodes[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(1.0);
                let force = REPULSION_FORCE / (distance * distance);
                fx += (dx / distance) * force;
                fy += (dy / distance) * force;
            }

            // Spring pull along incident edges toward the ideal length.
            for edge in edges {
                let id = nodes[i].id;
                if edge.source == id || edge.target == id {
                    let other = if edge.source == id { edge.target } else { edge.source };
                    let Some(j) = nodes.iter().position(|n| n.id == other) else {
                        continue;
                    };
                    let dx = nodes[i].x - nodes[j].x;
                    let dy = nodes[i].y - nodes[j].y;
                    let distance = (dx * dx + dy * dy).sqrt().max(1.0);
                    let force = SPRING_FORCE * (distance - SPRING_LENGTH);
                    fx -= (dx / distance) * force;
                    fy -= (dy / distance) * force;
                }
            }

            nodes[i].x = (nodes[i].x + fx).clamp(50.0, 550.0);
            nodes[i].y = (nodes[i].y + fy).clamp(50.0, 250.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = generate_random_graph(8, 42);
        let b = generate_random_graph(8, 42);
        assert_eq!(a, b);
        let c = generate_random_graph(8, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn output_is_valid_and_connected_enough_for_traversal() {
        let g = generate_random_graph(8, 7);
        assert!(g.is_valid());
        // The spine guarantees full reachability from node 0.
        let trace = crate::bfs(&g);
        let last = trace.last().unwrap();
        assert!(last
            .payload
            .nodes
            .iter()
            .all(|n| n.state == stepviz_core::NodeState::Visited));
    }

    #[test]
    fn coordinates_stay_within_the_viewport() {
        let g = generate_random_graph(12, 99);
        for node in &g.nodes {
            assert!((50.0..=550.0).contains(&node.x));
            assert!((50.0..=250.0).contains(&node.y));
        }
    }

    #[test]
    fn zero_nodes_is_an_invalid_graph() {
        let g = generate_random_graph(0, 1);
        assert!(!g.is_valid());
        assert!(crate::bfs(&g).is_empty());
    }

    #[test]
    fn labels_run_alphabetically_then_numeric() {
        let g = generate_random_graph(28, 5);
        assert_eq!(g.nodes[0].label, "A");
        assert_eq!(g.nodes[25].label, "Z");
        assert_eq!(g.nodes[27].label, "N27");
    }
}
