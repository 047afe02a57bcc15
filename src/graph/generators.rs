use log::debug;
use rand::prelude::*;

use crate::graph::adjacency::Edge;

/// Generates a random directed edge list over `node_count` nodes.
///
/// Every ordered pair of distinct nodes gets an edge with probability
/// `density`; weights are drawn uniformly from [1, max_weight]. No self
/// loops are produced. All configuration is explicit; nothing is read from
/// ambient state.
pub fn generate_random_edges(node_count: usize, density: f64, max_weight: i64) -> Vec<Edge> {
    let mut rng = rand::thread_rng();
    generate_random_edges_with(&mut rng, node_count, density, max_weight)
}

/// Same as [`generate_random_edges`] but drives the supplied RNG, so a
/// seeded generator reproduces the same edge list.
pub fn generate_random_edges_with<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: usize,
    density: f64,
    max_weight: i64,
) -> Vec<Edge> {
    assert!(max_weight >= 1, "max_weight must be positive");
    assert!(
        (0.0..=1.0).contains(&density),
        "density must be within [0, 1]"
    );

    let mut edges = Vec::new();
    for from in 0..node_count {
        for to in 0..node_count {
            if from != to && rng.gen_bool(density) {
                let weight = rng.gen_range(1..=max_weight);
                edges.push(Edge::new(from, to, weight));
            }
        }
    }

    debug!(
        "generated {} directed edges over {} nodes (density {})",
        edges.len(),
        node_count,
        density
    );

    edges
}
