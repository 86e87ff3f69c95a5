use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted directed graph.
///
/// Implementors are immutable once constructed; every search borrows the
/// graph by shared reference and owns its own distance and parent buffers,
/// so independent searches may run concurrently on one graph.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(target, weight)` pairs, in edge-id order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over every edge as `(source, target, weight)`,
    /// in edge-id order
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
