use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A weighted directed edge between two node IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<W = i64> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    /// Creates a new directed edge
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// A directed graph built once from a flat edge list
///
/// Only nodes that appear as an edge tail get an entry; lookups for any
/// other vertex yield an empty neighbor list. The structure is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct AdjacencyList<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> AdjacencyList<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Builds the adjacency structure from an edge list.
    ///
    /// Each edge appends exactly one `(to, weight)` entry to the list for
    /// its tail, in input order. Edges with a negative weight or an
    /// endpoint outside `[0, vertex_count)` are rejected.
    pub fn from_edges(vertex_count: usize, edges: &[Edge<W>]) -> Result<Self> {
        let mut outgoing_edges: HashMap<usize, Vec<(usize, W)>> = HashMap::new();

        for edge in edges {
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight(edge.from, edge.to));
            }
            if edge.from >= vertex_count || edge.to >= vertex_count {
                return Err(Error::InvalidEdge(edge.from, edge.to));
            }

            outgoing_edges
                .entry(edge.from)
                .or_insert_with(Vec::new)
                .push((edge.to, edge.weight));
        }

        Ok(AdjacencyList {
            vertex_count,
            outgoing_edges,
        })
    }
}

impl<W> Graph<W> for AdjacencyList<W>
where
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.outgoing_edges.get(&from) {
            edges.iter().any(|(target, _)| *target == to)
        } else {
            false
        }
    }
}
