use num_traits::{PrimInt, Signed};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Distances from a source vertex to every vertex of the graph
///
/// Every vertex in `[0, vertex count)` is present; unreachable vertices
/// carry the sentinel distance -1.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceSummary<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Distance from the source to each vertex
    pub distances: HashMap<usize, W>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> DistanceSummary<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the recorded distance for a vertex, if the vertex was part
    /// of the computation
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// Returns true if the vertex was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex)
            .map_or(false, |dist| dist >= W::zero())
    }
}

/// Trait for algorithms producing a full distance summary from one source
pub trait SummaryAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Compute distances from a source vertex to all other vertices
    fn compute_summary(&self, graph: &G, source: usize) -> Result<DistanceSummary<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Trait for algorithms producing a concrete source-to-target route
pub trait PathAlgorithm<W, G>
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    /// Find a path from source to target as a vertex sequence inclusive of
    /// both endpoints; empty when target is unreachable
    fn find_path(&self, graph: &G, source: usize, target: usize) -> Result<Vec<usize>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
