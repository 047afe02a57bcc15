use log::debug;
use num_traits::{PrimInt, Signed};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::algorithm::{DistanceSummary, SummaryAlgorithm};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Uses a lazy-deletion binary heap: a vertex may sit in the frontier
/// several times with different tentative distances, and stale entries are
/// skipped on pop instead of being decreased in place.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> SummaryAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_summary(&self, graph: &G, source: usize) -> Result<DistanceSummary<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let mut finalized: HashMap<usize, W> = HashMap::new();

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        // Main Dijkstra loop
        while let Some((vertex, dist)) = queue.pop() {
            // Stale duplicate of an already finalized vertex
            if finalized.contains_key(&vertex) {
                continue;
            }
            finalized.insert(vertex, dist);

            for (next, weight) in graph.outgoing_edges(vertex) {
                if !finalized.contains_key(&next) {
                    queue.push(next, dist + weight);
                }
            }
        }

        debug!(
            "settled {} of {} vertices from source {}",
            finalized.len(),
            graph.vertex_count(),
            source
        );

        // Vertices the frontier never reached are marked unreachable
        let unreachable = -W::one();
        for vertex in 0..graph.vertex_count() {
            finalized.entry(vertex).or_insert(unreachable);
        }

        Ok(DistanceSummary {
            distances: finalized,
            source,
        })
    }
}
