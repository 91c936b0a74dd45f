//! Cycle graph generator.

use log::debug;

use crate::{
    generators::{
        check_vertex_limit, circle_point, match_parameters, parse_group, BooleanRule, Generator,
        GeneratorConfig, ParameterPattern,
    },
    graph::{Capability, Edge, Graph, GraphFlags, Vertex, VertexId},
    Result,
};

// 3 to 999999, leading zeros allowed
static PATTERN: ParameterPattern = ParameterPattern::new(r"^\s*0*([1-9]\d{1,5}|[3-9])\s*$");

/// Generates the cycle graph C(n), drawn as a regular polygon.
///
/// Vertex i is joined to vertex (i + 1) mod n.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleGraph;

impl Generator for CycleGraph {
    fn name(&self) -> &'static str {
        "Cycle graph"
    }

    fn description(&self) -> &'static str {
        "Constructs a cycle graph of order n, drawn as a regular polygon."
    }

    fn parameters_description(&self) -> &'static str {
        "[order]"
    }

    fn parameters(&self) -> &'static ParameterPattern {
        &PATTERN
    }

    fn rule(&self, capability: Capability) -> BooleanRule {
        match capability {
            Capability::Loops => BooleanRule::DefaultFalse,
            Capability::DirectedEdges => BooleanRule::ForcedFalse,
            Capability::MultipleEdges => BooleanRule::DefaultFalse,
            Capability::Cycles => BooleanRule::ForcedTrue,
        }
    }

    fn generate(
        &self,
        params: &str,
        requested: GraphFlags,
        config: &GeneratorConfig,
    ) -> Result<Graph> {
        let captures = match_parameters(self, params)?;
        let n: usize = parse_group(&captures, 1)?;
        let n = check_vertex_limit(Some(n), config)?;

        let mut graph = Graph::with_capacity(
            config.graph_name(self.name()),
            self.resolve_flags(requested),
            n,
            n,
        );

        let radius = config.circle_radius_multiplier * n as f64;
        for i in 0..n {
            let (x, y) = circle_point(radius, i, n);
            graph.add_vertex(Vertex::new(x, y));
        }
        for i in 0..n {
            graph.add_edge(Edge::undirected(VertexId::new(i), VertexId::new((i + 1) % n)))?;
        }

        debug!("{}: {} vertices, {} edges", self.name(), n, graph.edge_count());
        Ok(graph)
    }
}
