//! All-pairs shortest distances, eccentricity and radius.
//!
//! [`DistanceMatrix`] runs Floyd-Warshall over an N×N matrix indexed by vertex position.
//! Unreachable pairs hold `f64::INFINITY`. The matrix is built fresh per call and never
//! cached on the graph.
//!
//! In unweighted mode every non-loop edge has length 1. In weighted mode an edge's length
//! is its weight, and the shortest of several parallel edges wins. Undirected edges are
//! entered in both directions, directed edges only from `from` to `to`.

use std::fmt;

use log::debug;

use crate::graph::{Graph, VertexId};

/// Result of a radius or diameter computation.
///
/// Displays as the integer, or as `∞` when no finite value exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    /// A finite distance rounded to the nearest integer
    Finite(u64),
    /// No vertex can reach every other vertex and be reached from it
    Infinite,
}

impl Radius {
    /// Converts a non-negative distance into a `Radius`.
    #[must_use]
    pub fn from_distance(distance: f64) -> Self {
        if distance.is_finite() {
            // Saturating float-to-int cast; negative weights clamp to 0
            Radius::Finite(distance.round() as u64)
        } else {
            Radius::Infinite
        }
    }

    /// Returns `true` for [`Radius::Infinite`].
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Radius::Infinite)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radius::Finite(value) => write!(f, "{value}"),
            Radius::Infinite => f.write_str("∞"),
        }
    }
}

/// Shortest distances between every ordered pair of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for `graph`.
    ///
    /// # Complexity
    ///
    /// - Time: O(V³ + E)
    /// - Space: O(V²)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visigraph::algorithms::DistanceMatrix;
    /// use visigraph::graph::{Edge, Graph, Vertex};
    ///
    /// let mut graph = Graph::default();
    /// let a = graph.add_vertex(Vertex::default());
    /// let b = graph.add_vertex(Vertex::default());
    /// let c = graph.add_vertex(Vertex::default());
    /// graph.add_edge(Edge::undirected(a, b).with_weight(2.5))?;
    /// graph.add_edge(Edge::directed(b, c).with_weight(1.0))?;
    ///
    /// let weighted = DistanceMatrix::build(&graph, true);
    /// assert_eq!(weighted.distance(a, c), 3.5);
    /// assert_eq!(weighted.distance(c, a), f64::INFINITY);
    ///
    /// let unweighted = DistanceMatrix::build(&graph, false);
    /// assert_eq!(unweighted.distance(a, c), 2.0);
    /// # Ok::<(), visigraph::Error>(())
    /// ```
    #[must_use]
    pub fn build(graph: &Graph, weighted: bool) -> Self {
        let size = graph.vertex_count();
        let mut cells = vec![f64::INFINITY; size * size];
        for i in 0..size {
            cells[i * size + i] = 0.0;
        }

        for (_, edge) in graph.edges() {
            if edge.is_loop() {
                continue;
            }
            let length = if weighted { edge.weight } else { 1.0 };
            let (from, to) = (edge.from.index(), edge.to.index());

            let forward = &mut cells[from * size + to];
            *forward = forward.min(length);
            if !edge.is_directed {
                let backward = &mut cells[to * size + from];
                *backward = backward.min(length);
            }
        }

        for k in 0..size {
            for i in 0..size {
                let via = cells[i * size + k];
                if via == f64::INFINITY {
                    continue;
                }
                for j in 0..size {
                    let candidate = via + cells[k * size + j];
                    if candidate < cells[i * size + j] {
                        cells[i * size + j] = candidate;
                    }
                }
            }
        }

        DistanceMatrix { size, cells }
    }

    /// Returns the number of vertices the matrix covers.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the shortest distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> f64 {
        assert!(from.index() < self.size && to.index() < self.size, "vertex out of range");
        self.cells[from.index() * self.size + to.index()]
    }

    /// Returns the eccentricity of `vertex`: the greatest distance to or from any vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn eccentricity(&self, vertex: VertexId) -> f64 {
        let v = vertex.index();
        assert!(v < self.size, "vertex out of range");

        (0..self.size)
            .map(|u| {
                self.cells[v * self.size + u].max(self.cells[u * self.size + v])
            })
            .fold(0.0, f64::max)
    }

    fn eccentricities(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size).map(|v| self.eccentricity(VertexId::new(v)))
    }

    /// Returns the minimum eccentricity over all vertices.
    #[must_use]
    pub fn radius(&self) -> Radius {
        if self.size == 0 {
            return Radius::Finite(0);
        }
        Radius::from_distance(self.eccentricities().fold(f64::INFINITY, f64::min))
    }

    /// Returns the maximum eccentricity over all vertices.
    #[must_use]
    pub fn diameter(&self) -> Radius {
        Radius::from_distance(self.eccentricities().fold(0.0, f64::max))
    }
}

/// Computes the radius of `graph`.
///
/// An empty graph has radius 0. A graph in which every vertex fails to reach, or to be
/// reached from, some other vertex has radius [`Radius::Infinite`].
///
/// # Examples
///
/// ```rust
/// use visigraph::algorithms::{compute_radius, Radius};
/// use visigraph::graph::{Edge, Graph, Vertex};
///
/// let mut graph = Graph::default();
/// assert_eq!(compute_radius(&graph, false), Radius::Finite(0));
///
/// let a = graph.add_vertex(Vertex::default());
/// let b = graph.add_vertex(Vertex::default());
/// assert_eq!(compute_radius(&graph, false).to_string(), "∞");
///
/// graph.add_edge(Edge::undirected(a, b))?;
/// assert_eq!(compute_radius(&graph, false), Radius::Finite(1));
/// # Ok::<(), visigraph::Error>(())
/// ```
#[must_use]
pub fn compute_radius(graph: &Graph, weighted: bool) -> Radius {
    let radius = DistanceMatrix::build(graph, weighted).radius();
    debug!(
        "radius of {} vertices ({}): {}",
        graph.vertex_count(),
        if weighted { "weighted" } else { "unweighted" },
        radius
    );
    radius
}
