//! Graph Routes - Shortest path distances and explicit routes
//!
//! This library computes single-source shortest-path distances and concrete
//! point-to-point routes on directed graphs with non-negative integer edge
//! weights, using priority-queue-driven relaxation (Dijkstra's algorithm).
//!
//! Callers supply a plain edge list together with an explicit node count;
//! results come back as plain data (a distance map with a -1 sentinel for
//! unreachable nodes, or a node sequence). Random edge-list generation and
//! rendering live at the boundary: the generator produces edge lists the
//! core consumes, and drawing is delegated to whatever implements the
//! [`Renderer`] trait.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod render;

use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{PrimInt, Signed};

pub use algorithm::{
    path_finder::PathFinder, summary::Dijkstra, DistanceSummary, PathAlgorithm, SummaryAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::adjacency::{AdjacencyList, Edge};
pub use render::Renderer;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight on edge from {0} to {1}")]
    NegativeWeight(usize, usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Computes shortest-path distances from `source` to every node in
/// `[0, node_count)`. Unreachable nodes map to -1.
pub fn shortest_path_summary<W>(
    node_count: usize,
    edges: &[Edge<W>],
    source: usize,
) -> Result<HashMap<usize, W>>
where
    W: PrimInt + Signed + Debug,
{
    let graph = AdjacencyList::from_edges(node_count, edges)?;
    let summary = Dijkstra::new().compute_summary(&graph, source)?;
    Ok(summary.distances)
}

/// Finds a shortest path from `source` to `target` as a node sequence
/// inclusive of both endpoints. Returns an empty vector when no path exists.
pub fn find_shortest_path<W>(
    node_count: usize,
    edges: &[Edge<W>],
    source: usize,
    target: usize,
) -> Result<Vec<usize>>
where
    W: PrimInt + Signed + Debug,
{
    let graph = AdjacencyList::from_edges(node_count, edges)?;
    PathFinder::new().find_path(&graph, source, target)
}
