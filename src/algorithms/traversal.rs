//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal over any graph implementing
//! [`Successors`]. Run them on a [`Graph`](crate::graph::Graph) to follow edge direction,
//! or on [`Graph::undirected`](crate::graph::Graph::undirected) to ignore it.
//!
//! - [`dfs`] - Iterative depth-first search (pre-order)
//! - [`bfs`] - Breadth-first search
//! - [`bfs_levels`] - Multi-source breadth-first layering

use std::collections::VecDeque;

use crate::graph::{Successors, VertexId};

/// Depth-first search iterator over graph vertices.
///
/// Visits each vertex reachable from the start exactly once, in pre-order.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Push in reverse so successors are visited in their original order
        let successors: Vec<VertexId> = self.graph.successors(vertex).collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a depth-first search iterator starting from `start`.
///
/// An out-of-range start yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use visigraph::algorithms::dfs;
/// use visigraph::graph::{Edge, Graph, Vertex, VertexId};
///
/// let mut graph = Graph::default();
/// let a = graph.add_vertex(Vertex::default());
/// let b = graph.add_vertex(Vertex::default());
/// let c = graph.add_vertex(Vertex::default());
/// graph.add_edge(Edge::directed(a, b))?;
/// graph.add_edge(Edge::directed(c, b))?;
///
/// // Direction respected: c is not reachable from a
/// assert_eq!(dfs(&graph, a).collect::<Vec<VertexId>>(), vec![a, b]);
/// // Direction ignored
/// assert_eq!(dfs(&graph.undirected(), a).count(), 3);
/// # Ok::<(), visigraph::Error>(())
/// ```
pub fn dfs<G: Successors>(graph: &G, start: VertexId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Breadth-first search iterator over graph vertices.
///
/// Visits every vertex at distance d from the start before any vertex at distance d + 1.
pub struct BfsIterator<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<VertexId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> BfsIterator<'g, G> {
    fn new(graph: &'g G, start: VertexId) -> Self {
        let vertex_count = graph.vertex_count();
        if start.index() >= vertex_count {
            return BfsIterator {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; vertex_count];
        visited[start.index()] = true;

        BfsIterator {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<G: Successors> Iterator for BfsIterator<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for succ in self.graph.successors(vertex) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a breadth-first search iterator starting from `start`.
///
/// An out-of-range start yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn bfs<G: Successors>(graph: &G, start: VertexId) -> BfsIterator<'_, G> {
    BfsIterator::new(graph, start)
}

/// Splits the vertices reachable from `roots` into breadth-first levels.
///
/// Level 0 holds the roots (duplicates and out-of-range ids dropped). Level k + 1 holds,
/// in discovery order, every vertex first reached from a vertex of level k. Vertices that
/// are not reachable from any root do not appear. No level in the result is empty.
#[must_use]
pub fn bfs_levels<G: Successors>(graph: &G, roots: &[VertexId]) -> Vec<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut visited = vec![false; vertex_count];

    let mut current = Vec::new();
    for &root in roots {
        if root.index() < vertex_count && !visited[root.index()] {
            visited[root.index()] = true;
            current.push(root);
        }
    }

    let mut levels = Vec::new();
    while !current.is_empty() {
        let mut next = Vec::new();
        for &vertex in &current {
            for succ in graph.successors(vertex) {
                if !visited[succ.index()] {
                    visited[succ.index()] = true;
                    next.push(succ);
                }
            }
        }
        levels.push(current);
        current = next;
    }

    levels
}

#[cfg(test)]
mod tests {
    use crate::{
        algorithms::traversal::{bfs, bfs_levels, dfs},
        graph::VertexId,
        test::{create_directed_cycle, create_path, graph_from_edges},
    };

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn test_dfs_linear() {
        let graph = create_path(4);
        let order: Vec<VertexId> = dfs(&graph, VertexId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_dfs_respects_direction() {
        let graph = graph_from_edges(3, &[(0, 1, true), (2, 1, true)]);
        let order: Vec<VertexId> = dfs(&graph, VertexId::new(1)).collect();
        assert_eq!(order, ids(&[1]));

        let order: Vec<VertexId> = dfs(&graph.undirected(), VertexId::new(1)).collect();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_dfs_invalid_start() {
        let graph = create_path(2);
        assert_eq!(dfs(&graph, VertexId::new(10)).count(), 0);
        assert_eq!(bfs(&graph, VertexId::new(10)).count(), 0);
    }

    #[test]
    fn test_dfs_cycle_visits_each_once() {
        let graph = create_directed_cycle(5);
        let order: Vec<VertexId> = dfs(&graph, VertexId::new(2)).collect();
        assert_eq!(order, ids(&[2, 3, 4, 0, 1]));
    }

    #[test]
    fn test_bfs_order_by_distance() {
        // Diamond: 0 - 1, 0 - 2, 1 - 3, 2 - 3
        let graph = graph_from_edges(
            4,
            &[(0, 1, false), (0, 2, false), (1, 3, false), (2, 3, false)],
        );
        let order: Vec<VertexId> = bfs(&graph, VertexId::new(0)).collect();
        assert_eq!(order, ids(&[0, 1, 2, 3]));
    }

    #[test]
    fn test_bfs_levels_multi_source() {
        // 0 - 1 - 2 - 3 - 4, roots at both ends
        let graph = create_path(5);
        let levels = bfs_levels(&graph, &ids(&[0, 4, 0]));
        assert_eq!(levels, vec![ids(&[0, 4]), ids(&[1, 3]), ids(&[2])]);
    }

    #[test]
    fn test_bfs_levels_skips_unreachable() {
        let graph = graph_from_edges(4, &[(0, 1, false)]);
        let levels = bfs_levels(&graph, &ids(&[0]));
        assert_eq!(levels, vec![ids(&[0]), ids(&[1])]);
        assert!(bfs_levels(&graph, &[]).is_empty());
    }
}
