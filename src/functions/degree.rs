//! Degree functions.

use crate::{
    algorithms::{is_regular, max_indegree},
    functions::{Function, FunctionOutput},
    graph::Graph,
    Result,
};

/// Returns the maximum indegree, over the selection if there is one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaximumIndegree;

impl Function for MaximumIndegree {
    fn name(&self) -> &'static str {
        "Get maximum indegree"
    }

    fn description(&self) -> &'static str {
        concat!(
            "Returns the largest number of edge endpoints at any vertex, counting only selected ",
            "vertices when some are selected. Directed edges count at their target only."
        )
    }

    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        Ok(FunctionOutput::Integer(max_indegree(graph, true)))
    }

    fn allows_dynamic_evaluation(&self) -> bool {
        true
    }
}

/// Tests whether the graph is simple and every vertex has the same number of neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsRegular;

impl Function for IsRegular {
    fn name(&self) -> &'static str {
        "Is regular"
    }

    fn description(&self) -> &'static str {
        concat!(
            "Returns whether the graph is regular: simple, with every vertex having the same ",
            "number of neighbors."
        )
    }

    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        Ok(FunctionOutput::Boolean(is_regular(graph)))
    }

    fn allows_dynamic_evaluation(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        functions::{Function, FunctionOutput, IsRegular, MaximumIndegree},
        graph::VertexId,
        test::{create_path, graph_from_edges},
    };

    #[test]
    fn test_maximum_indegree_uses_selection() {
        let mut graph = graph_from_edges(3, &[(0, 1, true), (2, 1, true), (1, 0, true)]);
        let output = MaximumIndegree.evaluate(&mut graph).unwrap();
        assert_eq!(output, FunctionOutput::Integer(2));

        graph.vertex_mut(VertexId::new(0)).unwrap().is_selected = true;
        let output = MaximumIndegree.evaluate(&mut graph).unwrap();
        assert_eq!(output, FunctionOutput::Integer(1));
    }

    #[test]
    fn test_is_regular_output() {
        let mut graph = create_path(3);
        assert_eq!(
            IsRegular.evaluate(&mut graph).unwrap(),
            FunctionOutput::Boolean(false)
        );
        let mut graph = create_path(2);
        assert_eq!(IsRegular.evaluate(&mut graph).unwrap().to_string(), "true");
    }
}
