use log::debug;
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::PathAlgorithm;
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Point-to-point search whose frontier entries carry their candidate path
///
/// Each queue entry records the vertex sequence taken to reach it, so the
/// first entry popped at the target yields the route directly with no
/// predecessor reconstruction. There is no finalized set; a vertex may
/// re-enter the frontier through different candidate paths, and expansion
/// only skips vertices already on the current candidate path. Copying the
/// path into every entry makes this variant heavier than the summary
/// algorithm, so it is reserved for single-target queries.
#[derive(Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    /// Creates a new path finder instance
    pub fn new() -> Self {
        PathFinder
    }
}

impl<W, G> PathAlgorithm<W, G> for PathFinder
where
    W: PrimInt + Signed + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "PathFinder"
    }

    fn find_path(&self, graph: &G, source: usize, target: usize) -> Result<Vec<usize>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }

        let mut queue: BinaryHeapWrapper<(usize, Vec<usize>), W> = BinaryHeapWrapper::new();
        queue.push((source, Vec::new()), W::zero());

        let mut popped = 0usize;
        while let Some(((vertex, mut path), dist)) = queue.pop() {
            popped += 1;
            path.push(vertex);

            if vertex == target {
                debug!(
                    "reached target {} from source {} after {} frontier pops",
                    target, source, popped
                );
                return Ok(path);
            }

            for (next, weight) in graph.outgoing_edges(vertex) {
                if !path.contains(&next) {
                    queue.push((next, path.clone()), dist + weight);
                }
            }
        }

        debug!(
            "frontier exhausted after {} pops, no path from {} to {}",
            popped, source, target
        );
        Ok(Vec::new())
    }
}
