//! Edge identifier and edge record.
//!
//! [`EdgeId`] is the strongly-typed index of an edge in its graph's edge sequence; [`Edge`]
//! holds the endpoints, direction, weight and display attributes.

use std::fmt;

use crate::graph::{vertex::UNCOLORED, VertexId};

/// Weight given to newly created edges.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Stroke thickness given to newly created edges.
pub const DEFAULT_EDGE_THICKNESS: f64 = 1.0;

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps the edge's position in the graph's edge sequence and is distinct from
/// [`VertexId`] at the type level, so the two can never be mixed up.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the position of this edge in the graph's edge sequence.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// An edge between two vertices of the same graph.
///
/// The endpoints are non-owning [`VertexId`] references into the owning graph's vertex
/// sequence. An edge whose endpoints coincide is a loop; loops are ignored by the metric,
/// connectivity and layout engines.
///
/// The handle is the control point of the curve drawn for this edge. It starts at the
/// midpoint of the endpoints when the edge is added to a graph.
///
/// Endpoints are read-only once the edge exists. The graph indexes edges by endpoint, so
/// reconnecting an edge goes through [`Graph::set_endpoints`](crate::graph::Graph::set_endpoints):
///
/// ```rust,compile_fail
/// use visigraph::graph::{Edge, Graph, GraphFlags, Vertex};
///
/// let mut graph = Graph::new("g", GraphFlags::all());
/// let a = graph.add_vertex(Vertex::new(0.0, 0.0));
/// let b = graph.add_vertex(Vertex::new(1.0, 0.0));
/// let id = graph.add_edge(Edge::undirected(a, b)).unwrap();
/// graph.edge_mut(id).unwrap().to = a;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(crate) from: VertexId,
    pub(crate) to: VertexId,
    /// Whether the edge may only be traversed from `from` to `to`
    pub is_directed: bool,
    /// Traversal cost used by weighted metrics
    pub weight: f64,
    /// Palette color index, [`UNCOLORED`] when unset
    pub color: i32,
    /// Display label
    pub label: String,
    /// Stroke thickness
    pub thickness: f64,
    /// Horizontal position of the curve handle
    pub handle_x: f64,
    /// Vertical position of the curve handle
    pub handle_y: f64,
}

impl Edge {
    /// Creates an edge with default weight and display attributes.
    ///
    /// The handle is placed at the origin; [`Graph::add_edge`](crate::graph::Graph::add_edge)
    /// moves it to the endpoints' midpoint.
    #[must_use]
    pub fn new(is_directed: bool, from: VertexId, to: VertexId) -> Self {
        Edge {
            from,
            to,
            is_directed,
            weight: DEFAULT_EDGE_WEIGHT,
            color: UNCOLORED,
            label: String::new(),
            thickness: DEFAULT_EDGE_THICKNESS,
            handle_x: 0.0,
            handle_y: 0.0,
        }
    }

    /// Creates an undirected edge.
    #[must_use]
    pub fn undirected(from: VertexId, to: VertexId) -> Self {
        Edge::new(false, from, to)
    }

    /// Creates a directed edge from `from` to `to`.
    #[must_use]
    pub fn directed(from: VertexId, to: VertexId) -> Self {
        Edge::new(true, from, to)
    }

    /// Returns the source vertex.
    #[must_use]
    #[inline]
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Returns the target vertex.
    #[must_use]
    #[inline]
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Returns this edge with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[must_use]
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    #[inline]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not an endpoint.
    ///
    /// For a loop the opposite endpoint is the vertex itself.
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.from == vertex {
            Some(self.to)
        } else if self.to == vertex {
            Some(self.from)
        } else {
            None
        }
    }
}
