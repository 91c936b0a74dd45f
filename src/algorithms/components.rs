//! Connected component labeling and coloring.
//!
//! Weak components are found with a [`UnionFind`] over every non-loop edge, ignoring
//! direction. Strong components come from [`strongly_connected_components`], where
//! undirected edges are traversable both ways.
//!
//! Both modes return groups in a canonical order: groups sorted by their lowest vertex
//! index, members ascending. Coloring assigns group `i` the color `i`, so on an unchanged
//! graph repeated runs produce identical colors.

use log::debug;
use strum::Display;

use crate::{
    algorithms::{scc::strongly_connected_components, union_find::UnionFind},
    graph::{Graph, VertexId},
};

/// Which notion of connectivity to group vertices by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ComponentMode {
    /// Mutual reachability ignoring edge direction
    #[strum(to_string = "weak")]
    Weak,
    /// Mutual reachability respecting edge direction
    #[strum(to_string = "strong")]
    Strong,
}

/// Partitions the vertices of `graph` into connected components.
///
/// # Examples
///
/// ```rust
/// use visigraph::algorithms::{find_components, ComponentMode};
/// use visigraph::graph::{Edge, Graph, Vertex, VertexId};
///
/// let mut graph = Graph::default();
/// let a = graph.add_vertex(Vertex::default());
/// let b = graph.add_vertex(Vertex::default());
/// let c = graph.add_vertex(Vertex::default());
/// graph.add_edge(Edge::directed(a, b))?;
///
/// assert_eq!(find_components(&graph, ComponentMode::Weak), vec![vec![a, b], vec![c]]);
/// assert_eq!(find_components(&graph, ComponentMode::Strong), vec![vec![a], vec![b], vec![c]]);
/// # Ok::<(), visigraph::Error>(())
/// ```
#[must_use]
pub fn find_components(graph: &Graph, mode: ComponentMode) -> Vec<Vec<VertexId>> {
    let mut groups = match mode {
        ComponentMode::Weak => weak_components(graph),
        ComponentMode::Strong => strongly_connected_components(graph),
    };

    for group in &mut groups {
        group.sort_unstable();
    }
    groups.sort_unstable_by_key(|group| group.first().copied());

    debug!("found {} {} components in {} vertices", groups.len(), mode, graph.vertex_count());
    groups
}

/// Returns the number of connected components of `graph`.
#[must_use]
pub fn count_components(graph: &Graph, mode: ComponentMode) -> usize {
    match mode {
        ComponentMode::Weak => weak_union_find(graph).set_count(),
        ComponentMode::Strong => strongly_connected_components(graph).len(),
    }
}

/// Colors every vertex by its component and every edge by its source vertex.
///
/// Component `i` (in [`find_components`] order) receives color `i`. All writes happen in a
/// single [`Graph::batch`], so the revision advances by exactly one on a non-empty graph.
///
/// Returns the number of components.
pub fn color_components(graph: &mut Graph, mode: ComponentMode) -> usize {
    let groups = find_components(graph, mode);

    let mut colors = vec![0_i32; graph.vertex_count()];
    for (color, group) in groups.iter().enumerate() {
        let color = i32::try_from(color).unwrap_or(i32::MAX);
        for vertex in group {
            colors[vertex.index()] = color;
        }
    }

    if !graph.is_empty() {
        graph.batch(|g| {
            for (id, vertex) in g.vertices_mut() {
                vertex.color = colors[id.index()];
            }
            for (_, edge) in g.edges_mut() {
                edge.color = colors[edge.from.index()];
            }
        });
    }

    groups.len()
}

fn weak_union_find(graph: &Graph) -> UnionFind {
    let mut sets = UnionFind::new(graph.vertex_count());
    for (_, edge) in graph.edges() {
        if !edge.is_loop() {
            sets.union(edge.from.index(), edge.to.index());
        }
    }
    sets
}

fn weak_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut sets = weak_union_find(graph);

    // Root index -> group slot, assigned in vertex order
    let mut slot_of_root = vec![usize::MAX; graph.vertex_count()];
    let mut groups: Vec<Vec<VertexId>> = Vec::with_capacity(sets.set_count());

    for vertex in graph.vertex_ids() {
        let root = sets.find(vertex.index());
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = groups.len();
            groups.push(Vec::new());
        }
        groups[slot_of_root[root]].push(vertex);
    }

    groups
}

#[cfg(test)]
mod tests {
    use crate::{
        algorithms::{
            components::{color_components, count_components, find_components, ComponentMode},
            traversal::dfs,
        },
        graph::{Graph, VertexId},
        test::{create_directed_cycle, create_disjoint_triangles, graph_from_edges},
    };

    fn raw(groups: &[Vec<VertexId>]) -> Vec<Vec<usize>> {
        groups
            .iter()
            .map(|g| g.iter().map(|v| v.index()).collect())
            .collect()
    }

    #[test]
    fn test_weak_components_disjoint_triangles() {
        let graph = create_disjoint_triangles(3);
        let groups = find_components(&graph, ComponentMode::Weak);
        assert_eq!(raw(&groups), vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);

        // Every member is reachable from every other ignoring direction
        let view = graph.undirected();
        for group in &groups {
            for &start in group {
                let reached: Vec<VertexId> = dfs(&view, start).collect();
                assert!(group.iter().all(|v| reached.contains(v)));
            }
        }
    }

    #[test]
    fn test_weak_ignores_direction_and_loops() {
        let graph = graph_from_edges(4, &[(3, 0, true), (1, 1, false)]);
        let groups = find_components(&graph, ComponentMode::Weak);
        assert_eq!(raw(&groups), vec![vec![0, 3], vec![1], vec![2]]);
        assert_eq!(count_components(&graph, ComponentMode::Weak), 3);
    }

    #[test]
    fn test_strong_components_ordering() {
        // 2 <-> 3 cycle, 0 -> 2, 1 isolated
        let graph = graph_from_edges(4, &[(2, 3, true), (3, 2, true), (0, 2, true)]);
        let groups = find_components(&graph, ComponentMode::Strong);
        assert_eq!(raw(&groups), vec![vec![0], vec![1], vec![2, 3]]);
        assert_eq!(count_components(&graph, ComponentMode::Strong), 3);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::default();
        assert!(find_components(&graph, ComponentMode::Weak).is_empty());
        assert_eq!(count_components(&graph, ComponentMode::Strong), 0);
        assert_eq!(color_components(&mut graph, ComponentMode::Weak), 0);
        assert_eq!(graph.revision(), 0);
    }

    #[test]
    fn test_color_components_single_batch() {
        let mut graph = create_disjoint_triangles(2);
        let before = graph.revision();

        let count = color_components(&mut graph, ComponentMode::Weak);
        assert_eq!(count, 2);
        assert_eq!(graph.revision(), before + 1);

        for (id, vertex) in graph.vertices() {
            assert_eq!(vertex.color, (id.index() / 3) as i32);
        }
        for (_, edge) in graph.edges() {
            assert_eq!(edge.color, graph.vertex(edge.from).unwrap().color);
        }
    }

    #[test]
    fn test_color_components_idempotent() {
        let mut graph = graph_from_edges(5, &[(0, 4, false), (1, 2, true)]);
        let first = color_components(&mut graph, ComponentMode::Weak);
        let colors: Vec<i32> = graph.vertices().map(|(_, v)| v.color).collect();

        let second = color_components(&mut graph, ComponentMode::Weak);
        let again: Vec<i32> = graph.vertices().map(|(_, v)| v.color).collect();

        assert_eq!(first, 3);
        assert_eq!(first, second);
        assert_eq!(colors, again);
        assert_eq!(colors, vec![0, 1, 1, 2, 0]);
    }

    #[test]
    fn test_color_strong_components() {
        let mut graph = create_directed_cycle(3);
        assert_eq!(color_components(&mut graph, ComponentMode::Strong), 1);
        assert!(graph.vertices().all(|(_, v)| v.color == 0));
    }
}
