//! Vertex identifier and vertex record.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for vertices
//! within a [`Graph`](crate::graph::Graph), and the [`Vertex`] record holding a vertex's
//! position and display attributes.

use std::fmt;

/// Radius given to newly created vertices.
pub const DEFAULT_VERTEX_RADIUS: f64 = 5.0;

/// Color index meaning "no color assigned".
pub const UNCOLORED: i32 = -1;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps the vertex's position in the graph's vertex sequence. Identifiers are
/// assigned sequentially starting from 0 as vertices are added, so insertion order and
/// indexing coincide. Engines that build matrices or per-vertex tables index them with
/// [`VertexId::index`].
///
/// # Examples
///
/// ```rust
/// use visigraph::graph::{Graph, Vertex, VertexId};
///
/// let mut graph = Graph::default();
/// let a: VertexId = graph.add_vertex(Vertex::new(0.0, 0.0));
/// let b: VertexId = graph.add_vertex(Vertex::new(10.0, 0.0));
///
/// assert_ne!(a, b);
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Intended for tests and for callers that map their own tables onto vertex positions.
    /// Normal usage should obtain identifiers from
    /// [`Graph::add_vertex`](crate::graph::Graph::add_vertex).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the position of this vertex in the graph's vertex sequence.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

/// A vertex: a position in the plane plus display attributes.
///
/// Only the position is read by the layout engines, the color is written by component
/// coloring, and the selection flag narrows degree counting and the arrange operations.
/// Radius, weight and label are carried for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Display radius
    pub radius: f64,
    /// Palette color index, [`UNCOLORED`] when unset
    pub color: i32,
    /// User-assigned weight
    pub weight: f64,
    /// Display label
    pub label: String,
    /// Whether the vertex is part of the current selection
    pub is_selected: bool,
}

impl Vertex {
    /// Creates an unselected, uncolored vertex at the given position.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Vertex {
            x,
            y,
            radius: DEFAULT_VERTEX_RADIUS,
            color: UNCOLORED,
            weight: 0.0,
            label: String::new(),
            is_selected: false,
        }
    }

    /// Returns this vertex marked as selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.is_selected = true;
        self
    }

    /// Returns this vertex with the given label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_id_index() {
        let id = VertexId::new(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn test_vertex_id_ordering() {
        let mut ids = vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]);
    }

    #[test]
    fn test_vertex_id_hash() {
        let mut set = HashSet::new();
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_id_conversions() {
        let id: VertexId = 7usize.into();
        let raw: usize = id.into();
        assert_eq!(raw, 7);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let id = VertexId::new(5);
        assert_eq!(format!("{id:?}"), "VertexId(5)");
        assert_eq!(format!("{id}"), "v5");
    }

    #[test]
    fn test_vertex_defaults() {
        let vertex = Vertex::new(1.5, -2.0);
        assert_eq!(vertex.x, 1.5);
        assert_eq!(vertex.y, -2.0);
        assert_eq!(vertex.radius, DEFAULT_VERTEX_RADIUS);
        assert_eq!(vertex.color, UNCOLORED);
        assert!(!vertex.is_selected);
        assert!(vertex.label.is_empty());
    }

    #[test]
    fn test_vertex_builders() {
        let vertex = Vertex::new(0.0, 0.0).selected().with_label("hub");
        assert!(vertex.is_selected);
        assert_eq!(vertex.label, "hub");
    }
}
