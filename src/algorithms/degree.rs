//! Degree counting and regularity.
//!
//! [`degree_counts`] uses the counting rule of the editor's "maximum indegree" function:
//! a directed edge increments only its `to` endpoint, while an undirected non-loop edge
//! increments both endpoints. An undirected loop therefore counts once.

use log::debug;

use crate::graph::Graph;

/// Returns the per-vertex counters behind [`max_indegree`], indexed by vertex position.
///
/// When `restrict_to_selected` is set and at least one vertex is selected, only selected
/// vertices are counted and every other counter stays 0. Otherwise all vertices count.
#[must_use]
pub fn degree_counts(graph: &Graph, restrict_to_selected: bool) -> Vec<usize> {
    let mut tracked = vec![true; graph.vertex_count()];
    if restrict_to_selected && graph.selected_vertices().next().is_some() {
        for (id, vertex) in graph.vertices() {
            tracked[id.index()] = vertex.is_selected;
        }
    }

    let mut counts = vec![0_usize; graph.vertex_count()];
    for (_, edge) in graph.edges() {
        let (from, to) = (edge.from.index(), edge.to.index());
        if !edge.is_directed && !edge.is_loop() && tracked[from] {
            counts[from] += 1;
        }
        if tracked[to] {
            counts[to] += 1;
        }
    }

    counts
}

/// Returns the largest counter from [`degree_counts`], or 0 for an empty graph.
///
/// # Examples
///
/// ```rust
/// use visigraph::algorithms::max_indegree;
/// use visigraph::graph::{Edge, Graph, Vertex};
///
/// let mut graph = Graph::default();
/// let a = graph.add_vertex(Vertex::default());
/// let b = graph.add_vertex(Vertex::default());
/// let c = graph.add_vertex(Vertex::default());
/// graph.add_edge(Edge::directed(a, b))?;
/// graph.add_edge(Edge::directed(c, b))?;
///
/// assert_eq!(max_indegree(&graph, false), 2);
/// # Ok::<(), visigraph::Error>(())
/// ```
#[must_use]
pub fn max_indegree(graph: &Graph, restrict_to_selected: bool) -> usize {
    let max = degree_counts(graph, restrict_to_selected)
        .into_iter()
        .max()
        .unwrap_or(0);
    debug!("maximum indegree over {} vertices: {}", graph.vertex_count(), max);
    max
}

/// Returns `true` if every vertex has the same degree and the same number of neighbors.
///
/// The degree of the first vertex sets the target. A vertex matches when it has that many
/// incident edges and that many distinct neighbors, which rules out parallel edges. When
/// the graph allows directed edges every vertex must also have equal out- and in-degree.
/// An empty graph is not regular, and neither is a graph that allows loops and has one.
#[must_use]
pub fn is_regular(graph: &Graph) -> bool {
    let Some(first) = graph.vertex_ids().next() else {
        return false;
    };

    if graph.flags().allows_loops() && graph.edges().any(|(_, edge)| edge.is_loop()) {
        return false;
    }

    let target = graph.degree(first);
    let check_direction = graph.flags().allows_directed_edges();

    graph.vertex_ids().all(|vertex| {
        graph.degree(vertex) == target
            && graph.neighbors(vertex).len() == target
            && (!check_direction || graph.out_degree(vertex) == graph.in_degree(vertex))
    })
}
