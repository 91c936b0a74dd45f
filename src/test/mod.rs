use crate::graph::{Edge, Graph, GraphFlags, Vertex, VertexId};

// Helper function to create a graph from (from, to, directed) triples on n vertices
pub fn graph_from_edges(n: usize, edges: &[(usize, usize, bool)]) -> Graph {
    let mut graph = Graph::new("test", GraphFlags::all());
    for i in 0..n {
        graph.add_vertex(Vertex::new(i as f64 * 10.0, (i % 3) as f64 * 10.0));
    }
    for &(from, to, directed) in edges {
        graph
            .add_edge(Edge::new(directed, VertexId::new(from), VertexId::new(to)))
            .unwrap();
    }
    graph
}

// Helper function to create an undirected path v0 - v1 - ... - v(n-1)
pub fn create_path(n: usize) -> Graph {
    let edges: Vec<(usize, usize, bool)> = (1..n).map(|i| (i - 1, i, false)).collect();
    graph_from_edges(n, &edges)
}

// Helper function to create a directed cycle v0 -> v1 -> ... -> v0
pub fn create_directed_cycle(n: usize) -> Graph {
    let edges: Vec<(usize, usize, bool)> = (0..n).map(|i| (i, (i + 1) % n, true)).collect();
    graph_from_edges(n, &edges)
}

// Helper function to create k disjoint undirected triangles, numbered consecutively
pub fn create_disjoint_triangles(k: usize) -> Graph {
    let mut edges = Vec::new();
    for t in 0..k {
        let base = t * 3;
        edges.push((base, base + 1, false));
        edges.push((base + 1, base + 2, false));
        edges.push((base + 2, base, false));
    }
    graph_from_edges(k * 3, &edges)
}
