//! Connected component functions.

use crate::{
    algorithms::{color_components, count_components, ComponentMode},
    functions::{Function, FunctionOutput},
    graph::{Graph, GraphFlags},
    Result,
};

/// Colors vertices and edges by component and returns the component count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorComponents {
    mode: ComponentMode,
}

impl ColorComponents {
    /// Colors weak components; only offered for graphs without directed edges.
    pub const CONNECTED: ColorComponents = ColorComponents {
        mode: ComponentMode::Weak,
    };
    /// Colors strong components.
    pub const STRONGLY_CONNECTED: ColorComponents = ColorComponents {
        mode: ComponentMode::Strong,
    };
}

impl Function for ColorComponents {
    fn name(&self) -> &'static str {
        match self.mode {
            ComponentMode::Weak => "Color connected components",
            ComponentMode::Strong => "Color strongly connected components",
        }
    }

    fn description(&self) -> &'static str {
        match self.mode {
            ComponentMode::Weak => concat!(
                "Colors each vertex by its connected component and each edge by its source ",
                "vertex, then returns the number of components."
            ),
            ComponentMode::Strong => concat!(
                "Colors each vertex by its strongly connected component and each edge by its ",
                "source vertex, then returns the number of components."
            ),
        }
    }

    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        Ok(FunctionOutput::Integer(color_components(graph, self.mode)))
    }

    fn is_applicable(&self, flags: GraphFlags) -> bool {
        match self.mode {
            ComponentMode::Weak => !flags.allows_directed_edges(),
            ComponentMode::Strong => true,
        }
    }

    fn allows_dynamic_evaluation(&self) -> bool {
        false
    }
}

/// Counts components without touching the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountComponents {
    mode: ComponentMode,
}

impl CountComponents {
    /// Counts weak components.
    pub const CONNECTED: CountComponents = CountComponents {
        mode: ComponentMode::Weak,
    };
    /// Counts strong components.
    pub const STRONGLY_CONNECTED: CountComponents = CountComponents {
        mode: ComponentMode::Strong,
    };
}

impl Function for CountComponents {
    fn name(&self) -> &'static str {
        match self.mode {
            ComponentMode::Weak => "Count connected components",
            ComponentMode::Strong => "Count strongly connected components",
        }
    }

    fn description(&self) -> &'static str {
        match self.mode {
            ComponentMode::Weak => {
                "Returns the number of connected components, ignoring edge direction."
            }
            ComponentMode::Strong => "Returns the number of strongly connected components.",
        }
    }

    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        Ok(FunctionOutput::Integer(count_components(graph, self.mode)))
    }

    fn allows_dynamic_evaluation(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        functions::{ColorComponents, CountComponents, Function, FunctionOutput},
        graph::GraphFlags,
        test::{create_disjoint_triangles, graph_from_edges},
        Error,
    };

    #[test]
    fn test_color_connected_components() {
        let mut graph = create_disjoint_triangles(2);
        let before = graph.revision();
        let output = ColorComponents::CONNECTED.evaluate(&mut graph).unwrap();
        assert_eq!(output, FunctionOutput::Integer(2));
        assert_eq!(graph.revision(), before + 1);
    }

    #[test]
    fn test_color_connected_not_applicable_to_directed() {
        assert!(!ColorComponents::CONNECTED.is_applicable(GraphFlags::DIRECTED_EDGES));
        assert!(ColorComponents::CONNECTED.is_applicable(GraphFlags::CYCLES));
        assert!(ColorComponents::STRONGLY_CONNECTED.is_applicable(GraphFlags::all()));

        // Test factories declare every flag
        let mut graph = create_disjoint_triangles(1);
        let err = ColorComponents::CONNECTED.evaluate_checked(&mut graph).unwrap_err();
        assert!(matches!(err, Error::NotApplicable(name) if name == "Color connected components"));
        assert!(graph.vertices().all(|(_, v)| v.color == -1));
    }

    #[test]
    fn test_count_components() {
        let mut graph = graph_from_edges(4, &[(0, 1, true), (1, 0, true), (2, 3, true)]);
        let weak = CountComponents::CONNECTED.evaluate(&mut graph).unwrap();
        let strong = CountComponents::STRONGLY_CONNECTED.evaluate(&mut graph).unwrap();
        assert_eq!(weak, FunctionOutput::Integer(2));
        assert_eq!(strong, FunctionOutput::Integer(3));
        assert!(CountComponents::CONNECTED.allows_dynamic_evaluation());
        assert!(!ColorComponents::STRONGLY_CONNECTED.allows_dynamic_evaluation());
    }
}
