use crate::graph::Edge;
use crate::Result;

/// Capability interface for drawing a graph
///
/// The library has no rendering responsibility of its own; it hands plain
/// edge lists (and optionally a route to highlight) to whatever backend the
/// caller plugs in here.
pub trait Renderer<W = i64> {
    /// Draw the given edge list, highlighting `highlight` as a route when
    /// one is supplied
    fn draw(&mut self, edges: &[Edge<W>], highlight: Option<&[usize]>) -> Result<()>;
}
