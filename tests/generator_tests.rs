use graph_routes::graph::generators::{generate_random_edges, generate_random_edges_with};
use graph_routes::graph::Graph;
use graph_routes::AdjacencyList;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn test_zero_density_produces_no_edges() {
    let mut rng = StdRng::seed_from_u64(1);
    let edges = generate_random_edges_with(&mut rng, 10, 0.0, 5);

    assert!(edges.is_empty());
}

// Full density connects every ordered pair of distinct nodes exactly once.
#[test]
fn test_full_density_produces_complete_digraph() {
    let mut rng = StdRng::seed_from_u64(2);
    let node_count = 8;
    let edges = generate_random_edges_with(&mut rng, node_count, 1.0, 5);

    assert_eq!(edges.len(), node_count * (node_count - 1));

    let pairs: HashSet<(usize, usize)> = edges.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(pairs.len(), edges.len(), "no ordered pair appears twice");
}

#[test]
fn test_edges_stay_within_configured_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let node_count = 25;
    let max_weight = 7;
    let edges = generate_random_edges_with(&mut rng, node_count, 0.4, max_weight);

    for edge in &edges {
        assert!(edge.from < node_count);
        assert!(edge.to < node_count);
        assert_ne!(edge.from, edge.to, "no self loops");
        assert!((1..=max_weight).contains(&edge.weight));
    }
}

#[test]
fn test_same_seed_reproduces_edge_list() {
    let mut first_rng = StdRng::seed_from_u64(77);
    let mut second_rng = StdRng::seed_from_u64(77);

    let first = generate_random_edges_with(&mut first_rng, 12, 0.3, 10);
    let second = generate_random_edges_with(&mut second_rng, 12, 0.3, 10);

    assert_eq!(first, second);
}

// The thread-RNG entry point must produce edge lists the builder accepts.
#[test]
fn test_generated_edges_build_a_valid_graph() {
    let node_count = 15;
    let edges = generate_random_edges(node_count, 0.2, 10);

    let graph = AdjacencyList::from_edges(node_count, &edges).unwrap();

    assert_eq!(graph.vertex_count(), node_count);
    assert_eq!(graph.edge_count(), edges.len());
}

#[test]
#[should_panic(expected = "density must be within [0, 1]")]
fn test_out_of_range_density_panics() {
    let mut rng = StdRng::seed_from_u64(4);
    generate_random_edges_with(&mut rng, 5, 1.5, 10);
}

#[test]
#[should_panic(expected = "max_weight must be positive")]
fn test_non_positive_max_weight_panics() {
    let mut rng = StdRng::seed_from_u64(5);
    generate_random_edges_with(&mut rng, 5, 0.5, 0);
}
