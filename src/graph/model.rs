//! Core graph implementation.
//!
//! This module provides [`Graph`], the in-memory model every engine in this crate operates
//! on. Vertices and edges are stored in insertion order; per-vertex adjacency lists of
//! [`EdgeId`]s give constant-time access to the edges leaving and entering a vertex.
//!
//! Mutation is tracked by a revision counter instead of observer callbacks. Every change
//! made outside a batch bumps the revision once; [`Graph::batch`] groups any number of
//! changes into a single revision step so a presentation layer refreshes exactly once.

use std::collections::BTreeSet;

use strum::Display;

use crate::{
    graph::{
        edge::{Edge, EdgeId},
        flags::GraphFlags,
        traits::{GraphBase, Predecessors, Successors},
        vertex::{Vertex, VertexId},
    },
    Error, Result,
};

/// The kind of side effect a mutating engine applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChangeKind {
    /// Vertex and edge colors were rewritten
    Recolored,
    /// Vertex positions were rewritten
    Moved,
}

/// Description of one batch of mutations applied to a graph.
///
/// Returned by the mutating engines so the caller can decide whether and what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// What was changed
    pub kind: ChangeKind,
    /// Number of vertices written
    pub vertices: usize,
    /// Number of edges written
    pub edges: usize,
    /// Graph revision after the batch
    pub revision: u64,
}

/// An editable graph of positioned vertices and edges.
///
/// `Graph` supports:
///
/// - Mixed directed and undirected edges, loops and parallel edges, subject to the
///   declared [`GraphFlags`] (the flags are enforced by generators and callers, not here)
/// - Direction-aware adjacency queries ([`edges_from`](Self::edges_from),
///   [`edges_to`](Self::edges_to)) where an undirected edge counts in both directions
/// - Batched mutation with a revision counter ([`batch`](Self::batch))
///
/// # Examples
///
/// ```rust
/// use visigraph::graph::{Edge, Graph, GraphFlags, Vertex};
///
/// let mut graph = Graph::new("Path", GraphFlags::empty());
/// let a = graph.add_vertex(Vertex::new(0.0, 0.0));
/// let b = graph.add_vertex(Vertex::new(50.0, 0.0));
/// let c = graph.add_vertex(Vertex::new(100.0, 0.0));
///
/// graph.add_edge(Edge::undirected(a, b))?;
/// graph.add_edge(Edge::undirected(b, c))?;
///
/// assert_eq!(graph.degree(b), 2);
/// assert_eq!(graph.neighbors(b), vec![a, c]);
/// # Ok::<(), visigraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// Display name
    name: String,
    /// Declared structural capabilities
    flags: GraphFlags,
    /// Vertex storage, indexed by `VertexId`
    vertices: Vec<Vertex>,
    /// Edge storage, indexed by `EdgeId`
    edges: Vec<Edge>,
    /// Edges whose `from` endpoint is the vertex
    outgoing: Vec<Vec<EdgeId>>,
    /// Edges whose `to` endpoint is the vertex
    incoming: Vec<Vec<EdgeId>>,
    /// Number of completed mutation steps
    revision: u64,
    /// Nesting depth of open batches
    batch_depth: usize,
    /// Whether the open batch has mutated anything
    batch_dirty: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new("", GraphFlags::default())
    }
}

impl Graph {
    /// Creates a new empty graph with the given name and flags.
    #[must_use]
    pub fn new(name: impl Into<String>, flags: GraphFlags) -> Self {
        Graph::with_capacity(name, flags, 0, 0)
    }

    /// Creates a new empty graph with pre-allocated storage.
    ///
    /// Generators know their output size up front and use this to avoid reallocations.
    #[must_use]
    pub fn with_capacity(
        name: impl Into<String>,
        flags: GraphFlags,
        vertex_capacity: usize,
        edge_capacity: usize,
    ) -> Self {
        Graph {
            name: name.into(),
            flags,
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            incoming: Vec::with_capacity(vertex_capacity),
            revision: 0,
            batch_depth: 0,
            batch_dirty: false,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the graph.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Returns the declared structural capabilities.
    #[must_use]
    pub fn flags(&self) -> GraphFlags {
        self.flags
    }

    /// Returns the revision counter.
    ///
    /// The counter starts at 0 and grows by one for every mutation made outside a batch and
    /// by one for every batch that mutated anything.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Runs `f` as a single mutation batch.
    ///
    /// However many vertices and edges `f` touches, the revision advances at most once, when
    /// the outermost batch ends. Batches nest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visigraph::graph::{Graph, Vertex};
    ///
    /// let mut graph = Graph::default();
    /// graph.batch(|g| {
    ///     g.add_vertex(Vertex::new(0.0, 0.0));
    ///     g.add_vertex(Vertex::new(1.0, 0.0));
    /// });
    /// assert_eq!(graph.revision(), 1);
    /// ```
    pub fn batch<R>(&mut self, f: impl FnOnce(&mut Graph) -> R) -> R {
        self.batch_depth += 1;
        let result = f(self);
        self.batch_depth -= 1;

        if self.batch_depth == 0 && self.batch_dirty {
            self.batch_dirty = false;
            self.revision += 1;
        }

        result
    }

    /// Records one mutation.
    fn touch(&mut self) {
        if self.batch_depth > 0 {
            self.batch_dirty = true;
        } else {
            self.revision += 1;
        }
    }

    /// Adds a vertex and returns its identifier.
    ///
    /// Identifiers are assigned sequentially starting from 0.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.touch();
        id
    }

    /// Adds an edge and returns its identifier.
    ///
    /// The edge's handle is moved to the midpoint of its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist in this graph.
    pub fn add_edge(&mut self, mut edge: Edge) -> Result<EdgeId> {
        let (handle_x, handle_y) = self.endpoint_midpoint(edge.from, edge.to)?;
        edge.handle_x = handle_x;
        edge.handle_y = handle_y;

        let id = EdgeId::new(self.edges.len());
        self.outgoing[edge.from.index()].push(id);
        self.incoming[edge.to.index()].push(id);
        self.edges.push(edge);
        self.touch();

        Ok(id)
    }

    /// Reconnects an existing edge to new endpoints.
    ///
    /// The adjacency lists follow the edge and its handle moves to the midpoint of the new
    /// endpoints. Direction, weight and appearance are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if the edge or either endpoint does not exist in this
    /// graph. The graph is left unchanged in that case.
    pub fn set_endpoints(&mut self, edge: EdgeId, from: VertexId, to: VertexId) -> Result<()> {
        let Some(current) = self.edges.get(edge.index()) else {
            return Err(Error::GraphError(format!(
                "edge {} does not exist in graph with {} edges",
                edge,
                self.edges.len()
            )));
        };
        let (old_from, old_to) = (current.from, current.to);
        let (handle_x, handle_y) = self.endpoint_midpoint(from, to)?;

        self.outgoing[old_from.index()].retain(|&id| id != edge);
        self.incoming[old_to.index()].retain(|&id| id != edge);
        self.outgoing[from.index()].push(edge);
        self.incoming[to.index()].push(edge);

        let target = &mut self.edges[edge.index()];
        target.from = from;
        target.to = to;
        target.handle_x = handle_x;
        target.handle_y = handle_y;
        self.touch();

        Ok(())
    }

    fn endpoint_midpoint(&self, from: VertexId, to: VertexId) -> Result<(f64, f64)> {
        match (self.vertices.get(from.index()), self.vertices.get(to.index())) {
            (Some(a), Some(b)) => Ok(((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)),
            (None, _) => Err(Error::GraphError(format!(
                "source vertex {} does not exist in graph with {} vertices",
                from,
                self.vertices.len()
            ))),
            (_, None) => Err(Error::GraphError(format!(
                "target vertex {} does not exist in graph with {} vertices",
                to,
                self.vertices.len()
            ))),
        }
    }

    /// Returns the vertex with the given identifier.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    /// Returns the vertex with the given identifier for modification.
    ///
    /// Handing out the reference counts as a mutation.
    pub fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut Vertex> {
        if vertex.index() < self.vertices.len() {
            self.touch();
        }
        self.vertices.get_mut(vertex.index())
    }

    /// Returns the edge with the given identifier.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge.index())
    }

    /// Returns the edge with the given identifier for modification.
    ///
    /// Endpoints are read-only here; use [`set_endpoints`](Self::set_endpoints) to reconnect
    /// the edge. Handing out the reference counts as a mutation.
    pub fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Edge> {
        if edge.index() < self.edges.len() {
            self.touch();
        }
        self.edges.get_mut(edge.index())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks if the given vertex identifier is valid for this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    /// Checks if the given edge identifier is valid for this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edges.len()
    }

    /// Returns an iterator over all vertex identifiers in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns an iterator over all vertices with their identifiers.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Returns an iterator over all vertices for modification.
    ///
    /// Counts as one mutation, so callers normally use it inside [`batch`](Self::batch).
    pub fn vertices_mut(&mut self) -> impl Iterator<Item = (VertexId, &mut Vertex)> + '_ {
        self.touch();
        self.vertices
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// Returns an iterator over all edge identifiers in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns an iterator over all edges with their identifiers.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Returns an iterator over all edges for modification.
    ///
    /// Counts as one mutation. Endpoints are read-only here; see
    /// [`set_endpoints`](Self::set_endpoints).
    pub fn edges_mut(&mut self) -> impl Iterator<Item = (EdgeId, &mut Edge)> + '_ {
        self.touch();
        self.edges
            .iter_mut()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// Returns an iterator over the selected vertices.
    pub fn selected_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().filter(|(_, v)| v.is_selected).map(|(id, _)| id)
    }

    /// Returns an iterator over every edge incident to `vertex`.
    ///
    /// A loop is yielded once.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing[vertex.index()].iter().copied().chain(
            self.incoming[vertex.index()]
                .iter()
                .copied()
                .filter(move |&id| !self.edges[id.index()].is_loop()),
        )
    }

    /// Returns an iterator over the edges that can be traversed away from `vertex`.
    ///
    /// These are the edges whose `from` endpoint is `vertex`, plus the undirected edges whose
    /// `to` endpoint is `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    pub fn edges_from(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing[vertex.index()].iter().copied().chain(
            self.incoming[vertex.index()].iter().copied().filter(move |&id| {
                let edge = &self.edges[id.index()];
                !edge.is_directed && !edge.is_loop()
            }),
        )
    }

    /// Returns an iterator over the edges that can be traversed into `vertex`.
    ///
    /// These are the edges whose `to` endpoint is `vertex`, plus the undirected edges whose
    /// `from` endpoint is `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex in the graph.
    pub fn edges_to(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming[vertex.index()].iter().copied().chain(
            self.outgoing[vertex.index()].iter().copied().filter(move |&id| {
                let edge = &self.edges[id.index()];
                !edge.is_directed && !edge.is_loop()
            }),
        )
    }

    /// Returns the number of edges incident to `vertex`, counting a loop once.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incident_edges(vertex).count()
    }

    /// Returns the number of edges traversable away from `vertex`.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.edges_from(vertex).count()
    }

    /// Returns the number of edges traversable into `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.edges_to(vertex).count()
    }

    /// Returns the distinct vertices sharing an edge with `vertex`, in ascending order.
    ///
    /// Edge direction is ignored. A vertex with a loop is its own neighbor.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        let set: BTreeSet<VertexId> = self
            .incident_edges(vertex)
            .filter_map(|id| self.edges[id.index()].opposite(vertex))
            .collect();
        set.into_iter().collect()
    }

    /// Returns a view of this graph in which every edge is undirected.
    #[must_use]
    pub fn undirected(&self) -> Undirected<'_> {
        Undirected { graph: self }
    }
}

impl GraphBase for Graph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

impl Successors for Graph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.edges_from(vertex)
            .filter_map(move |id| self.edges[id.index()].opposite(vertex))
    }
}

impl Predecessors for Graph {
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.edges_to(vertex)
            .filter_map(move |id| self.edges[id.index()].opposite(vertex))
    }
}

/// A borrowed view of a [`Graph`] that ignores edge direction.
///
/// Traversals over this view follow every edge both ways, which is what weak connectivity
/// and the breadth-first tree arrangement need.
#[derive(Debug, Clone, Copy)]
pub struct Undirected<'g> {
    graph: &'g Graph,
}

impl GraphBase for Undirected<'_> {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.graph.vertex_count()).map(VertexId::new)
    }
}

impl Successors for Undirected<'_> {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        let graph = self.graph;
        graph
            .incident_edges(vertex)
            .filter_map(move |id| graph.edges[id.index()].opposite(vertex))
    }
}
