//! Star graph generator.

use log::debug;

use crate::{
    generators::{
        check_vertex_limit, circle_point, match_parameters, parse_group, BooleanRule, Generator,
        GeneratorConfig, ParameterPattern,
    },
    graph::{Capability, Edge, Graph, GraphFlags, Vertex},
    Result,
};

static PATTERN: ParameterPattern = ParameterPattern::new(r"^\s*(\d+)\s*$");

/// Generates the star graph S(n): one hub joined to n corners.
///
/// The hub sits at the origin and the corners are spread clockwise over a circle of radius
/// `circle_radius_multiplier * n`, starting at the top. Vertex 0 is the hub.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarGraph;

impl Generator for StarGraph {
    fn name(&self) -> &'static str {
        "Star graph"
    }

    fn description(&self) -> &'static str {
        "Constructs a star graph: a hub vertex joined to each of n corner vertices."
    }

    fn parameters_description(&self) -> &'static str {
        "[corners]"
    }

    fn parameters(&self) -> &'static ParameterPattern {
        &PATTERN
    }

    fn rule(&self, capability: Capability) -> BooleanRule {
        match capability {
            Capability::Loops => BooleanRule::DefaultFalse,
            Capability::DirectedEdges => BooleanRule::ForcedFalse,
            Capability::MultipleEdges => BooleanRule::DefaultFalse,
            Capability::Cycles => BooleanRule::DefaultTrue,
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
        let vertex_count = check_vertex_limit(n.checked_add(1), config)?;

        let mut graph = Graph::with_capacity(
            config.graph_name(self.name()),
            self.resolve_flags(requested),
            vertex_count,
            n,
        );

        let radius = config.circle_radius_multiplier * n as f64;
        let hub = graph.add_vertex(Vertex::new(0.0, 0.0));
        for i in 0..n {
            let (x, y) = circle_point(radius, i, n);
            let corner = graph.add_vertex(Vertex::new(x, y));
            graph.add_edge(Edge::undirected(hub, corner))?;
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
        algorithms::is_regular,
        generators::{Generator, GeneratorConfig, StarGraph},
        graph::{GraphFlags, VertexId},
        Error,
    };

    #[test]
    fn test_star_shape() {
        let graph = StarGraph
            .generate("5", GraphFlags::empty(), &GeneratorConfig::default())
            .unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.degree(VertexId::new(0)), 5);
        for i in 1..=5 {
            assert_eq!(graph.degree(VertexId::new(i)), 1);
        }
        assert!(graph.edges().all(|(_, e)| !e.is_directed && !e.is_loop()));
        assert!(!is_regular(&graph));
    }

    #[test]
    fn test_star_geometry() {
        let config = GeneratorConfig::default();
        let graph = StarGraph.generate("4", GraphFlags::empty(), &config).unwrap();
        let radius = config.circle_radius_multiplier * 4.0;

        let hub = graph.vertex(VertexId::new(0)).unwrap();
        assert_eq!((hub.x, hub.y), (0.0, 0.0));

        let first = graph.vertex(VertexId::new(1)).unwrap();
        assert!(first.x.abs() < 1e-9);
        assert!((first.y + radius).abs() < 1e-9);

        for (id, vertex) in graph.vertices().skip(1) {
            let distance = vertex.x.hypot(vertex.y);
            assert!((distance - radius).abs() < 1e-9, "{id} off the circle");
        }
    }

    #[test]
    fn test_star_zero_corners() {
        let graph = StarGraph
            .generate("0", GraphFlags::empty(), &GeneratorConfig::default())
            .unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_star_flags_and_name() {
        let graph = StarGraph
            .generate("3", GraphFlags::all(), &GeneratorConfig::default())
            .unwrap();
        assert_eq!(
            graph.flags(),
            GraphFlags::LOOPS | GraphFlags::MULTIPLE_EDGES | GraphFlags::CYCLES
        );
        assert_eq!(graph.name(), "Untitled Star graph");
        assert_eq!(StarGraph.default_flags(), GraphFlags::CYCLES);
    }

    #[test]
    fn test_star_rejects_bad_input() {
        let config = GeneratorConfig {
            max_vertices: 10,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            StarGraph.generate("3 4", GraphFlags::empty(), &config),
            Err(Error::InvalidParameters { .. })
        ));
        assert!(matches!(
            StarGraph.generate("10", GraphFlags::empty(), &config),
            Err(Error::LimitExceeded { requested: 11, limit: 10, .. })
        ));
        assert!(StarGraph.generate("9", GraphFlags::empty(), &config).is_ok());
    }
}
