//! Strongly connected components using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there is a
//! directed path from every vertex of the set to every other. Undirected edges of a
//! [`Graph`](crate::graph::Graph) are traversable both ways, so a vertex pair joined by an
//! undirected edge always shares a component.
//!
//! The depth-first search is driven by an explicit frame stack instead of recursion, so
//! long paths produced by the generators cannot overflow the thread stack.

use crate::graph::{Successors, VertexId};

/// Computes the strongly connected components of a graph.
///
/// Uses Tarjan's algorithm with a single DFS pass. Each vertex is assigned a discovery
/// index and a lowlink value; when a vertex's lowlink equals its index it is the root of a
/// component, and the component is popped off the vertex stack.
///
/// # Returns
///
/// A vector of components in **reverse topological order** of the condensation (if an
/// edge leads from component A to component B, A appears after B). Members within a
/// component are in stack-pop order.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use visigraph::algorithms::strongly_connected_components;
/// use visigraph::graph::{Edge, Graph, Vertex};
///
/// // Cycle a -> b -> c -> a, plus a tail c -> d
/// let mut graph = Graph::default();
/// let a = graph.add_vertex(Vertex::default());
/// let b = graph.add_vertex(Vertex::default());
/// let c = graph.add_vertex(Vertex::default());
/// let d = graph.add_vertex(Vertex::default());
/// graph.add_edge(Edge::directed(a, b))?;
/// graph.add_edge(Edge::directed(b, c))?;
/// graph.add_edge(Edge::directed(c, a))?;
/// graph.add_edge(Edge::directed(c, d))?;
///
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs.len(), 2);
/// assert_eq!(sccs[0], vec![d]);
/// assert_eq!(sccs[1].len(), 3);
/// # Ok::<(), visigraph::Error>(())
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<VertexId>>
where
    G: Successors,
{
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(vertex_count);

    // Run Tarjan's algorithm from each unvisited vertex
    for vertex in graph.vertex_ids() {
        if state.index[vertex.index()].is_none() {
            state.strongconnect(graph, vertex);
        }
    }

    state.sccs
}

/// One suspended `strongconnect` call.
struct Frame {
    vertex: VertexId,
    successors: Vec<VertexId>,
    next: usize,
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each vertex (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each vertex
    lowlink: Vec<usize>,
    /// Whether a vertex is currently on the stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<VertexId>,
    /// Current index counter
    current_index: usize,
    /// Collected SCCs
    sccs: Vec<Vec<VertexId>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn visit<G: Successors>(&mut self, graph: &G, v: VertexId) -> Frame {
        let v_idx = v.index();
        self.index[v_idx] = Some(self.current_index);
        self.lowlink[v_idx] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v_idx] = true;

        Frame {
            vertex: v,
            successors: graph.successors(v).collect(),
            next: 0,
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: VertexId) {
        let mut frames = vec![self.visit(graph, root)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            let v_idx = v.index();

            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                let w_idx = w.index();

                match self.index[w_idx] {
                    None => {
                        // Successor not yet visited; descend
                        let child = self.visit(graph, w);
                        frames.push(child);
                    }
                    Some(w_index) if self.on_stack[w_idx] => {
                        self.lowlink[v_idx] = self.lowlink[v_idx].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors done: v's call returns
            frames.pop();
            if let Some(parent) = frames.last() {
                let p_idx = parent.vertex.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(self.lowlink[v_idx]);
            }

            if Some(self.lowlink[v_idx]) == self.index[v_idx] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }
        }
    }
}
