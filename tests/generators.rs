//! Integration tests for the generator registry.
//!
//! Every generator is reached through the registry by name, the way an editor would, and
//! the produced graphs are checked with the crate's own analysis engines.

use visigraph::{
    algorithms::{count_components, is_regular, ComponentMode},
    graph::{GraphFlags, VertexId},
    registry, Error, GeneratorConfig, Result,
};

#[test]
fn test_cycle_graph_is_two_regular() -> Result<()> {
    let cycle = registry::find_generator("Cycle graph")?;
    let config = GeneratorConfig::default();

    for n in [3, 4, 7, 50] {
        let graph = cycle.generate(&n.to_string(), GraphFlags::all(), &config)?;
        assert_eq!(graph.vertex_count(), n);
        assert_eq!(graph.edge_count(), n);
        assert!(graph.vertex_ids().all(|v| graph.degree(v) == 2));
        assert!(is_regular(&graph));
        assert_eq!(count_components(&graph, ComponentMode::Weak), 1);
    }
    Ok(())
}

#[test]
fn test_star_graph_degrees() -> Result<()> {
    let star = registry::find_generator("Star graph")?;
    let graph = star.generate("6", GraphFlags::empty(), &GeneratorConfig::default())?;

    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.degree(VertexId::new(0)), 6);
    assert!((1..7).all(|i| graph.degree(VertexId::new(i)) == 1));
    assert!(!is_regular(&graph));
    assert_eq!(graph.name(), "Untitled Star graph");
    Ok(())
}

#[test]
fn test_symmetric_tree_sizes() -> Result<()> {
    let tree = registry::find_generator("Symmetric tree")?;
    let config = GeneratorConfig::default();

    let graph = tree.generate("2 3", GraphFlags::all(), &config)?;
    assert_eq!(graph.vertex_count(), 13);
    assert_eq!(graph.edge_count(), 12);
    assert_eq!(graph.flags(), GraphFlags::empty());
    assert_eq!(count_components(&graph, ComponentMode::Weak), 1);

    // A deep binary tree must not exhaust the stack
    let graph = tree.generate("15 2", GraphFlags::empty(), &config)?;
    assert_eq!(graph.vertex_count(), (1 << 16) - 1);
    assert_eq!(graph.edge_count(), graph.vertex_count() - 1);
    Ok(())
}

#[test]
fn test_flags_follow_generator_rules() -> Result<()> {
    let config = GeneratorConfig::default();

    let star = registry::find_generator("Star graph")?;
    assert_eq!(star.default_flags(), GraphFlags::CYCLES);
    let graph = star.generate("3", GraphFlags::all(), &config)?;
    assert_eq!(
        graph.flags(),
        GraphFlags::LOOPS | GraphFlags::MULTIPLE_EDGES | GraphFlags::CYCLES
    );
    let graph = star.generate("3", GraphFlags::empty(), &config)?;
    assert_eq!(graph.flags(), GraphFlags::empty());

    let cycle = registry::find_generator("Cycle graph")?;
    let graph = cycle.generate("3", GraphFlags::empty(), &config)?;
    assert!(graph.flags().allows_cycles());
    assert!(!graph.flags().allows_directed_edges());
    Ok(())
}

#[test]
fn test_products_are_connected() -> Result<()> {
    let config = GeneratorConfig::default();
    for name in [
        "Cartesian product of a complete bipartite graph and cycle (Behar)",
        "Cartesian product of a complete bipartite graph and cycle (Scott)",
    ] {
        let generator = registry::find_generator(name)?;
        let graph = generator.generate("3 4 5", GraphFlags::empty(), &config)?;
        assert_eq!(graph.vertex_count(), 7 * 7);
        assert_eq!(graph.edge_count(), 5 * 12 + 6 * 7);
        assert_eq!(count_components(&graph, ComponentMode::Weak), 1);
        assert!(graph.edges().all(|(_, e)| !e.is_directed));
    }
    Ok(())
}

#[test]
fn test_invalid_parameters_rejected() -> Result<()> {
    let config = GeneratorConfig::default();
    for generator in registry::generators() {
        assert!(!generator.validate("not a number"), "{}", generator.name());
        assert!(matches!(
            generator.generate("not a number", GraphFlags::empty(), &config),
            Err(Error::InvalidParameters { .. })
        ));
    }

    let cycle = registry::find_generator("Cycle graph")?;
    assert!(!cycle.validate("2"));
    assert!(cycle.validate(" 3 "));
    Ok(())
}

#[test]
fn test_vertex_limit_enforced() -> Result<()> {
    let config = GeneratorConfig {
        max_vertices: 100,
        ..GeneratorConfig::default()
    };

    let cycle = registry::find_generator("Cycle graph")?;
    assert!(cycle.generate("100", GraphFlags::empty(), &config).is_ok());
    match cycle.generate("101", GraphFlags::empty(), &config) {
        Err(Error::LimitExceeded {
            element,
            requested,
            limit,
        }) => {
            assert_eq!(element, "vertices");
            assert_eq!(requested, 101);
            assert_eq!(limit, 100);
        }
        other => panic!("expected a limit error, got {other:?}"),
    }

    let tree = registry::find_generator("Symmetric tree")?;
    assert!(matches!(
        tree.generate("60 60", GraphFlags::empty(), &GeneratorConfig::default()),
        Err(Error::LimitExceeded { .. })
    ));
    Ok(())
}

#[test]
fn test_generated_graph_name() -> Result<()> {
    let config = GeneratorConfig {
        default_graph_name: String::new(),
        ..GeneratorConfig::default()
    };
    let star = registry::find_generator("Star graph")?;
    let graph = star.generate("2", GraphFlags::empty(), &config)?;
    assert_eq!(graph.name(), "Star graph");
    Ok(())
}
