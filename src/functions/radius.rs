//! Radius functions.

use crate::{
    algorithms::compute_radius,
    functions::{Function, FunctionOutput},
    graph::Graph,
    Result,
};

/// Calculates the graph radius, with unit or weighted edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculateRadius {
    weighted: bool,
}

impl CalculateRadius {
    /// Every non-loop edge has length 1.
    pub const UNWEIGHTED: CalculateRadius = CalculateRadius { weighted: false };
    /// Every edge has its weight as length.
    pub const WEIGHTED: CalculateRadius = CalculateRadius { weighted: true };
}

impl Function for CalculateRadius {
    fn name(&self) -> &'static str {
        if self.weighted {
            "Calculate radius (weighted)"
        } else {
            "Calculate radius (unweighted)"
        }
    }

    fn description(&self) -> &'static str {
        if self.weighted {
            concat!(
                "Returns the smallest eccentricity of any vertex, measuring paths by total edge ",
                "weight. Prints ∞ if no vertex reaches every other."
            )
        } else {
            concat!(
                "Returns the smallest eccentricity of any vertex, measuring paths by edge count. ",
                "Prints ∞ if no vertex reaches every other."
            )
        }
    }

    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        Ok(FunctionOutput::Radius(compute_radius(graph, self.weighted)))
    }

    fn allows_dynamic_evaluation(&self) -> bool {
        false
    }
}
