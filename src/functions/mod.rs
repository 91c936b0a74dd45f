//! Graph functions: named evaluations an editor offers on the current graph.
//!
//! A [`Function`] wraps one engine call behind a uniform interface: a display name, an
//! applicability test against the graph's declared [`GraphFlags`], and the evaluation modes
//! it supports. Some functions only read the graph; the coloring functions also recolor it
//! in a single batch.
//!
//! # Available Functions
//!
//! | Name | Output | Mutates |
//! |------|--------|---------|
//! | Calculate radius (unweighted) | [`Radius`] | no |
//! | Calculate radius (weighted) | [`Radius`] | no |
//! | Color connected components | count | colors |
//! | Color strongly connected components | count | colors |
//! | Count connected components | count | no |
//! | Count strongly connected components | count | no |
//! | Get maximum indegree | count | no |
//! | Is regular | boolean | no |

mod components;
mod degree;
mod radius;

use std::fmt;

use crate::{
    algorithms::Radius,
    graph::{Graph, GraphFlags},
    Error, Result,
};

pub use components::{ColorComponents, CountComponents};
pub use degree::{IsRegular, MaximumIndegree};
pub use radius::CalculateRadius;

/// The value produced by evaluating a [`Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionOutput {
    /// A count
    Integer(usize),
    /// A yes/no answer
    Boolean(bool),
    /// A radius, possibly infinite
    Radius(Radius),
}

impl fmt::Display for FunctionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionOutput::Integer(value) => write!(f, "{value}"),
            FunctionOutput::Boolean(value) => write!(f, "{value}"),
            FunctionOutput::Radius(value) => write!(f, "{value}"),
        }
    }
}

/// A named evaluation over a graph.
pub trait Function: Send + Sync {
    /// Returns the display name, which is also the registry key.
    fn name(&self) -> &'static str;

    /// Returns a description of what the function computes and any side effects.
    fn description(&self) -> &'static str;

    /// Computes the result, applying any side effects to `graph` as one batch.
    ///
    /// Implementations assume [`is_applicable`](Self::is_applicable) holds; callers go
    /// through [`evaluate_checked`](Self::evaluate_checked) to have it enforced.
    ///
    /// # Errors
    ///
    /// Implementations in this crate never fail once applicable.
    fn evaluate(&self, graph: &mut Graph) -> Result<FunctionOutput>;

    /// Returns `true` if the function can run on graphs declaring `flags`.
    fn is_applicable(&self, _flags: GraphFlags) -> bool {
        true
    }

    /// Returns `true` if the function is cheap and side-effect free enough to re-run after
    /// every edit.
    fn allows_dynamic_evaluation(&self) -> bool;

    /// Returns `true` if the function can be run once on request.
    fn allows_one_time_evaluation(&self) -> bool {
        true
    }

    /// Evaluates after checking applicability against the graph's flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotApplicable`] if the graph's flags are not supported.
    fn evaluate_checked(&self, graph: &mut Graph) -> Result<FunctionOutput> {
        if !self.is_applicable(graph.flags()) {
            return Err(Error::NotApplicable(self.name().to_string()));
        }
        self.evaluate(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{algorithms::Radius, functions::FunctionOutput};

    #[test]
    fn test_output_display() {
        assert_eq!(FunctionOutput::Integer(4).to_string(), "4");
        assert_eq!(FunctionOutput::Boolean(false).to_string(), "false");
        assert_eq!(FunctionOutput::Radius(Radius::Infinite).to_string(), "∞");
        assert_eq!(FunctionOutput::Radius(Radius::Finite(0)).to_string(), "0");
    }
}
