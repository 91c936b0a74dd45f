//! Trait definitions for graph abstractions.
//!
//! The traversal and strong-connectivity algorithms are written against these traits
//! rather than against [`Graph`](crate::graph::Graph) directly, so they run unchanged on
//! the direction-respecting graph itself and on the [`Undirected`](crate::graph::Undirected)
//! view that ignores edge direction.
//!
//! - [`GraphBase`] - Core properties: vertex count and vertex iteration
//! - [`Successors`] - Forward traversal
//! - [`Predecessors`] - Backward traversal

use crate::graph::VertexId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers in insertion order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward traversal.
///
/// For a directed edge `(u, v)`, `v` is a successor of `u`. An undirected edge makes each
/// endpoint a successor of the other. Loops make a vertex its own successor.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `vertex`.
    ///
    /// A successor reached through several parallel edges is yielded once per edge.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support backward traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of `vertex`.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex in the graph.
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
