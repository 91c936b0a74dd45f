//! Symmetric tree generator.

use log::debug;

use crate::{
    generators::{
        check_vertex_limit, match_parameters, parse_group, BooleanRule, Generator,
        GeneratorConfig, ParameterPattern,
    },
    graph::{Capability, Edge, Graph, GraphFlags, Vertex, VertexId},
    Result,
};

static PATTERN: ParameterPattern = ParameterPattern::new(r"^\s*(\d+)\s+(\d+)\s*$");

/// Generates a complete tree in which every internal vertex has the same number of children.
///
/// The root sits at the origin. A vertex at height `level` places its i-th child at
/// distance `100 · level^1.3` in direction `2πi / fan_out`, so subtrees shrink toward the
/// leaves. Vertices are numbered in pre-order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricTree;

/// A vertex whose children are still being placed.
struct Branch {
    vertex: VertexId,
    level: usize,
    x: f64,
    y: f64,
    next_child: usize,
}

/// Returns the vertex count of a tree with `levels` levels below the root, or `None` on
/// overflow. Counting stops once the total exceeds `limit`.
fn tree_vertex_count(levels: usize, fan_out: usize, limit: usize) -> Option<usize> {
    let mut total: usize = 1;
    let mut layer: usize = 1;
    for _ in 0..levels {
        layer = layer.checked_mul(fan_out)?;
        if layer == 0 {
            break;
        }
        total = total.checked_add(layer)?;
        if total > limit {
            break;
        }
    }
    Some(total)
}

impl Generator for SymmetricTree {
    fn name(&self) -> &'static str {
        "Symmetric tree"
    }

    fn description(&self) -> &'static str {
        "Constructs a rooted tree in which every internal vertex has the same number of children."
    }

    fn parameters_description(&self) -> &'static str {
        "[recursions] [fan-out]"
    }

    fn parameters(&self) -> &'static ParameterPattern {
        &PATTERN
    }

    fn rule(&self, _capability: Capability) -> BooleanRule {
        BooleanRule::ForcedFalse
    }

    fn generate(
        &self,
        params: &str,
        requested: GraphFlags,
        config: &GeneratorConfig,
    ) -> Result<Graph> {
        let captures = match_parameters(self, params)?;
        let levels: usize = parse_group(&captures, 1)?;
        let fan_out: usize = parse_group(&captures, 2)?;
        let vertex_count =
            check_vertex_limit(tree_vertex_count(levels, fan_out, config.max_vertices), config)?;

        let mut graph = Graph::with_capacity(
            config.graph_name(self.name()),
            self.resolve_flags(requested),
            vertex_count,
            vertex_count.saturating_sub(1),
        );

        let branch_angle = 2.0 * std::f64::consts::PI / fan_out as f64;
        let root = graph.add_vertex(Vertex::new(0.0, 0.0));
        let mut stack = vec![Branch {
            vertex: root,
            level: levels,
            x: 0.0,
            y: 0.0,
            next_child: 0,
        }];

        while let Some(top) = stack.last_mut() {
            if top.level > 0 && top.next_child < fan_out {
                let i = top.next_child;
                top.next_child += 1;

                let reach = 100.0 * (top.level as f64).powf(1.3);
                let angle = branch_angle * i as f64;
                let x = top.x + reach * angle.cos();
                let y = top.y + reach * angle.sin();
                let level = top.level - 1;

                let child = graph.add_vertex(Vertex::new(x, y));
                stack.push(Branch {
                    vertex: child,
                    level,
                    x,
                    y,
                    next_child: 0,
                });
                continue;
            }

            // Subtree complete: attach it to its parent
            let finished = top.vertex;
            stack.pop();
            if let Some(parent) = stack.last() {
                graph.add_edge(Edge::undirected(parent.vertex, finished))?;
            }
        }

        debug!(
            "{}: {} vertices, {} edges",
            self.name(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        algorithms::{count_components, ComponentMode},
        generators::{tree::tree_vertex_count, Generator, GeneratorConfig, SymmetricTree},
        graph::{GraphFlags, VertexId},
        Error,
    };

    #[test]
    fn test_tree_two_levels_fan_out_three() {
        let graph = SymmetricTree
            .generate("2 3", GraphFlags::all(), &GeneratorConfig::default())
            .unwrap();

        assert_eq!(graph.vertex_count(), 13);
        assert_eq!(graph.edge_count(), 12);
        assert!(graph.edges().all(|(_, e)| !e.is_directed && !e.is_loop()));
        assert_eq!(count_components(&graph, ComponentMode::Weak), 1);
        assert_eq!(graph.flags(), GraphFlags::empty());

        // Root has fan-out children, internal vertices one parent plus fan-out children
        assert_eq!(graph.degree(VertexId::new(0)), 3);
        assert_eq!(graph.degree(VertexId::new(1)), 4);
        assert_eq!(graph.degree(VertexId::new(2)), 1);
    }

    #[test]
    fn test_tree_preorder_and_edge_order() {
        let graph = SymmetricTree
            .generate("1 2", GraphFlags::empty(), &GeneratorConfig::default())
            .unwrap();
        let edges: Vec<(usize, usize)> = graph
            .edges()
            .map(|(_, e)| (e.from.index(), e.to.index()))
            .collect();
        assert_eq!(edges, vec![(0, 1), (0, 2)]);

        let first = graph.vertex(VertexId::new(1)).unwrap();
        assert!((first.x - 100.0).abs() < 1e-9);
        assert!(first.y.abs() < 1e-9);
        let second = graph.vertex(VertexId::new(2)).unwrap();
        assert!((second.x + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_tree_degenerate_parameters() {
        let config = GeneratorConfig::default();
        let graph = SymmetricTree.generate("0 5", GraphFlags::empty(), &config).unwrap();
        assert_eq!(graph.vertex_count(), 1);

        let graph = SymmetricTree.generate("4 0", GraphFlags::empty(), &config).unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);

        let graph = SymmetricTree.generate("6 1", GraphFlags::empty(), &config).unwrap();
        assert_eq!(graph.vertex_count(), 7);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_tree_vertex_count() {
        assert_eq!(tree_vertex_count(2, 3, usize::MAX), Some(13));
        assert_eq!(tree_vertex_count(0, 9, usize::MAX), Some(1));
        assert_eq!(tree_vertex_count(200, 9, usize::MAX), None);
        assert!(tree_vertex_count(usize::MAX, 1, 100).unwrap() > 100);
    }

    #[test]
    fn test_tree_limit() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            SymmetricTree.generate("30 9", GraphFlags::empty(), &config),
            Err(Error::LimitExceeded { .. })
        ));
        assert!(matches!(
            SymmetricTree.generate("23", GraphFlags::empty(), &config),
            Err(Error::InvalidParameters { .. })
        ));
    }
}
