use graph_routes::graph::Graph;
use graph_routes::{AdjacencyList, Edge, Error};

#[test]
fn test_neighbor_lists_preserve_insertion_order() {
    let edges: Vec<Edge> = vec![
        Edge::new(0, 2, 7),
        Edge::new(0, 1, 3),
        Edge::new(1, 2, 1),
        Edge::new(0, 3, 5),
    ];

    let graph = AdjacencyList::from_edges(4, &edges).unwrap();

    let neighbors: Vec<(usize, i64)> = graph.outgoing_edges(0).collect();
    assert_eq!(neighbors, vec![(2, 7), (1, 3), (3, 5)]);
}

// Vertices that only ever appear as an edge head still resolve, with an
// empty neighbor list.
#[test]
fn test_destination_only_vertex_has_no_neighbors() {
    let edges: Vec<Edge> = vec![Edge::new(0, 1, 2)];

    let graph = AdjacencyList::from_edges(2, &edges).unwrap();

    assert_eq!(graph.outgoing_edges(1).count(), 0);
    assert!(graph.has_vertex(1));
}

#[test]
fn test_counts_and_membership() {
    let edges: Vec<Edge> = vec![Edge::new(0, 1, 2), Edge::new(1, 2, 4), Edge::new(0, 2, 9)];

    let graph = AdjacencyList::from_edges(3, &edges).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1), "edges are directed");
    assert!(!graph.has_vertex(3));
}

// Every occurrence of a repeated edge is kept; the builder does not dedupe.
#[test]
fn test_repeated_edges_are_all_kept() {
    let edges: Vec<Edge> = vec![Edge::new(0, 1, 2), Edge::new(0, 1, 2), Edge::new(0, 1, 8)];

    let graph = AdjacencyList::from_edges(2, &edges).unwrap();

    let neighbors: Vec<(usize, i64)> = graph.outgoing_edges(0).collect();
    assert_eq!(neighbors, vec![(1, 2), (1, 2), (1, 8)]);
}

#[test]
fn test_build_rejects_bad_edges() {
    let negative: Vec<Edge> = vec![Edge::new(0, 1, -1)];
    assert!(matches!(
        AdjacencyList::from_edges(2, &negative),
        Err(Error::NegativeWeight(0, 1))
    ));

    let out_of_range: Vec<Edge> = vec![Edge::new(4, 0, 1)];
    assert!(matches!(
        AdjacencyList::from_edges(2, &out_of_range),
        Err(Error::InvalidEdge(4, 0))
    ));
}
