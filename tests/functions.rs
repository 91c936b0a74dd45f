//! Integration tests for the function registry.
//!
//! Functions are looked up by name and run on generated or hand-built graphs, covering the
//! metadata an editor reads before offering a function and the values it displays.

use visigraph::{
    algorithms::{find_components, ComponentMode, Radius},
    functions::FunctionOutput,
    graph::{Edge, Graph, GraphFlags, Vertex, VertexId, UNCOLORED},
    registry, Error, GeneratorConfig, Result,
};

fn generate(name: &str, params: &str) -> Result<Graph> {
    registry::find_generator(name)?.generate(
        params,
        GraphFlags::empty(),
        &GeneratorConfig::default(),
    )
}

fn evaluate(name: &str, graph: &mut Graph) -> Result<FunctionOutput> {
    registry::find_function(name)?.evaluate_checked(graph)
}

#[test]
fn test_radius_of_generated_graphs() -> Result<()> {
    let mut cycle = generate("Cycle graph", "6")?;
    assert_eq!(
        evaluate("Calculate radius (unweighted)", &mut cycle)?,
        FunctionOutput::Radius(Radius::Finite(3))
    );
    assert_eq!(
        evaluate("Calculate radius (weighted)", &mut cycle)?,
        FunctionOutput::Radius(Radius::Finite(3))
    );

    let mut star = generate("Star graph", "5")?;
    assert_eq!(evaluate("Calculate radius (unweighted)", &mut star)?.to_string(), "1");

    let mut tree = generate("Symmetric tree", "2 3")?;
    assert_eq!(evaluate("Calculate radius (unweighted)", &mut tree)?.to_string(), "2");
    Ok(())
}

#[test]
fn test_radius_edge_cases() -> Result<()> {
    let mut empty = Graph::default();
    assert_eq!(
        evaluate("Calculate radius (unweighted)", &mut empty)?,
        FunctionOutput::Radius(Radius::Finite(0))
    );

    let mut edgeless = Graph::default();
    edgeless.add_vertex(Vertex::new(0.0, 0.0));
    edgeless.add_vertex(Vertex::new(50.0, 0.0));
    assert_eq!(evaluate("Calculate radius (unweighted)", &mut edgeless)?.to_string(), "∞");
    Ok(())
}

#[test]
fn test_weighted_radius_uses_weights() -> Result<()> {
    let mut graph = Graph::default();
    let a = graph.add_vertex(Vertex::new(0.0, 0.0));
    let b = graph.add_vertex(Vertex::new(10.0, 0.0));
    let c = graph.add_vertex(Vertex::new(20.0, 0.0));
    graph.add_edge(Edge::undirected(a, b).with_weight(4.0))?;
    graph.add_edge(Edge::undirected(b, c).with_weight(6.0))?;

    assert_eq!(evaluate("Calculate radius (unweighted)", &mut graph)?.to_string(), "1");
    assert_eq!(evaluate("Calculate radius (weighted)", &mut graph)?.to_string(), "6");
    Ok(())
}

#[test]
fn test_component_functions() -> Result<()> {
    let mut graph = Graph::new("islands", GraphFlags::CYCLES);
    for i in 0..9 {
        graph.add_vertex(Vertex::new(i as f64 * 20.0, 0.0));
    }
    for t in 0..3 {
        let base = t * 3;
        for (from, to) in [(0, 1), (1, 2), (2, 0)] {
            graph.add_edge(Edge::undirected(
                VertexId::new(base + from),
                VertexId::new(base + to),
            ))?;
        }
    }

    assert_eq!(
        evaluate("Count connected components", &mut graph)?,
        FunctionOutput::Integer(3)
    );
    assert!(graph.vertices().all(|(_, v)| v.color == UNCOLORED));

    let revision = graph.revision();
    assert_eq!(
        evaluate("Color connected components", &mut graph)?,
        FunctionOutput::Integer(3)
    );
    assert_eq!(graph.revision(), revision + 1);
    for (group, members) in find_components(&graph, ComponentMode::Weak).iter().enumerate() {
        for &vertex in members {
            assert_eq!(graph.vertex(vertex).map(|v| v.color), Some(group as i32));
        }
    }
    assert!(graph
        .edges()
        .all(|(_, e)| graph.vertex(e.from()).map(|v| v.color) == Some(e.color)));

    // Coloring twice changes nothing
    let colors: Vec<i32> = graph.vertices().map(|(_, v)| v.color).collect();
    evaluate("Color connected components", &mut graph)?;
    let again: Vec<i32> = graph.vertices().map(|(_, v)| v.color).collect();
    assert_eq!(colors, again);
    Ok(())
}

#[test]
fn test_strong_components_on_directed_graph() -> Result<()> {
    let mut graph = Graph::new("directed", GraphFlags::all());
    let a = graph.add_vertex(Vertex::new(0.0, 0.0));
    let b = graph.add_vertex(Vertex::new(10.0, 0.0));
    let c = graph.add_vertex(Vertex::new(20.0, 0.0));
    graph.add_edge(Edge::directed(a, b))?;
    graph.add_edge(Edge::directed(b, a))?;
    graph.add_edge(Edge::directed(b, c))?;

    assert_eq!(
        evaluate("Count strongly connected components", &mut graph)?,
        FunctionOutput::Integer(2)
    );
    assert_eq!(
        evaluate("Count connected components", &mut graph)?,
        FunctionOutput::Integer(1)
    );
    assert!(matches!(
        evaluate("Color connected components", &mut graph),
        Err(Error::NotApplicable(name)) if name == "Color connected components"
    ));
    assert_eq!(
        evaluate("Color strongly connected components", &mut graph)?,
        FunctionOutput::Integer(2)
    );
    Ok(())
}

#[test]
fn test_degree_functions() -> Result<()> {
    let mut cycle = generate("Cycle graph", "5")?;
    assert_eq!(evaluate("Is regular", &mut cycle)?, FunctionOutput::Boolean(true));
    assert_eq!(
        evaluate("Get maximum indegree", &mut cycle)?,
        FunctionOutput::Integer(2)
    );

    let mut star = generate("Star graph", "4")?;
    assert_eq!(evaluate("Is regular", &mut star)?, FunctionOutput::Boolean(false));
    assert_eq!(
        evaluate("Get maximum indegree", &mut star)?,
        FunctionOutput::Integer(4)
    );

    // Only the selected corner counts once something is selected
    if let Some(corner) = star.vertex_mut(VertexId::new(2)) {
        corner.is_selected = true;
    }
    assert_eq!(
        evaluate("Get maximum indegree", &mut star)?,
        FunctionOutput::Integer(1)
    );
    Ok(())
}

#[test]
fn test_function_metadata() -> Result<()> {
    for function in registry::functions() {
        assert!(function.allows_one_time_evaluation(), "{}", function.name());
        assert!(!function.description().is_empty());
    }

    let dynamic: Vec<&str> = registry::functions()
        .iter()
        .filter(|f| f.allows_dynamic_evaluation())
        .map(|f| f.name())
        .collect();
    assert_eq!(
        dynamic,
        [
            "Count connected components",
            "Count strongly connected components",
            "Get maximum indegree",
            "Is regular",
        ]
    );

    let color = registry::find_function("Color connected components")?;
    assert!(color.is_applicable(GraphFlags::CYCLES));
    assert!(!color.is_applicable(GraphFlags::DIRECTED_EDGES));
    Ok(())
}
