//! Parametric graph generators.
//!
//! A generator turns a short parameter string (for example `"5"` or `"2 3"`) into a fully
//! positioned [`Graph`]. Each generator declares:
//!
//! - a regular expression its parameter string must match ([`Generator::parameters_pattern`])
//! - a [`BooleanRule`] per structural [`Capability`], saying whether the generated graph
//!   must, must not, or by default should allow that feature
//!
//! # Available Generators
//!
//! | Generator | Parameters | Vertices | Edges |
//! |-----------|------------|----------|-------|
//! | [`StarGraph`] | corners n | n + 1 | n |
//! | [`CycleGraph`] | order n ≥ 3 | n | n |
//! | [`SymmetricTree`] | levels l, fan-out f | Σ f^i, i ≤ l | vertices − 1 |
//! | [`BeharProduct`], [`ScottProduct`] | r, s, n | (n + 2)(r + s) | n·r·s + (n + 1)(r + s) |
//!
//! # Examples
//!
//! ```rust
//! use visigraph::generators::{Generator, StarGraph};
//! use visigraph::{GeneratorConfig, GraphFlags};
//!
//! let star = StarGraph;
//! assert!(star.validate(" 6 "));
//!
//! let graph = star.generate("6", GraphFlags::empty(), &GeneratorConfig::default())?;
//! assert_eq!(graph.vertex_count(), 7);
//! assert_eq!(graph.edge_count(), 6);
//! # Ok::<(), visigraph::Error>(())
//! ```

mod bipartite_cycle;
mod config;
mod cycle;
mod star;
mod tree;

use std::{str::FromStr, sync::OnceLock};

use regex::{Captures, Regex};
use strum::{Display, IntoEnumIterator};

use crate::{
    graph::{Capability, Graph, GraphFlags},
    Error, Result,
};

pub use bipartite_cycle::{BeharProduct, ScottProduct};
pub use config::GeneratorConfig;
pub use cycle::CycleGraph;
pub use star::StarGraph;
pub use tree::SymmetricTree;

/// How a generator constrains one structural capability of the graphs it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BooleanRule {
    /// Always allowed, whatever the caller asks for
    #[strum(to_string = "forced true")]
    ForcedTrue,
    /// Never allowed, whatever the caller asks for
    #[strum(to_string = "forced false")]
    ForcedFalse,
    /// Allowed unless the caller says otherwise
    #[strum(to_string = "default true")]
    DefaultTrue,
    /// Not allowed unless the caller says otherwise
    #[strum(to_string = "default false")]
    DefaultFalse,
}

impl BooleanRule {
    /// Returns `true` if the caller cannot override this rule.
    #[must_use]
    pub fn is_forced(self) -> bool {
        matches!(self, BooleanRule::ForcedTrue | BooleanRule::ForcedFalse)
    }

    /// Returns the value suggested to the caller before they choose.
    #[must_use]
    pub fn suggested(self) -> bool {
        matches!(self, BooleanRule::ForcedTrue | BooleanRule::DefaultTrue)
    }

    /// Combines this rule with the caller's choice.
    #[must_use]
    pub fn resolve(self, requested: bool) -> bool {
        match self {
            BooleanRule::ForcedTrue => true,
            BooleanRule::ForcedFalse => false,
            BooleanRule::DefaultTrue | BooleanRule::DefaultFalse => requested,
        }
    }
}

/// A parameter validation pattern compiled on first use.
///
/// Generators keep one of these in a `static` so the regular expression is built once per
/// process.
#[derive(Debug)]
pub struct ParameterPattern {
    source: &'static str,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl ParameterPattern {
    /// Creates an uncompiled pattern.
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        ParameterPattern {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// Returns the regular expression source.
    #[must_use]
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Returns the compiled expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the source is not a valid regular expression.
    pub fn regex(&self) -> Result<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.source))
            .as_ref()
            .map_err(|e| malformed_error!("Invalid parameter pattern '{}': {}", self.source, e))
    }
}

/// A parametric graph generator.
///
/// Implementors supply the metadata and [`generate`](Self::generate); validation and flag
/// resolution are provided.
pub trait Generator: Send + Sync {
    /// Returns the display name, which is also the registry key.
    fn name(&self) -> &'static str;

    /// Returns a one-sentence description of the generated family.
    fn description(&self) -> &'static str;

    /// Returns a short description of the expected parameters, e.g. `"[order]"`.
    fn parameters_description(&self) -> &'static str;

    /// Returns the compiled parameter pattern.
    fn parameters(&self) -> &'static ParameterPattern;

    /// Returns the rule this generator imposes on `capability`.
    fn rule(&self, capability: Capability) -> BooleanRule;

    /// Generates a graph from a parameter string.
    ///
    /// The returned graph carries [`resolve_flags(requested)`](Self::resolve_flags) and is
    /// named by [`GeneratorConfig::graph_name`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameters`] if `params` does not match the parameter pattern
    /// - [`Error::Malformed`] if a matched number does not fit the target integer type
    /// - [`Error::LimitExceeded`] if the graph would exceed `config.max_vertices` or
    ///   `config.max_edges`
    fn generate(&self, params: &str, requested: GraphFlags, config: &GeneratorConfig)
        -> Result<Graph>;

    /// Returns the regular expression source that parameter strings must match.
    fn parameters_pattern(&self) -> &'static str {
        self.parameters().source()
    }

    /// Returns `true` if `params` matches the parameter pattern.
    fn validate(&self, params: &str) -> bool {
        self.parameters()
            .regex()
            .is_ok_and(|regex| regex.is_match(params))
    }

    /// Combines the caller's requested flags with this generator's rules.
    ///
    /// Forced rules override the request; default rules yield to it.
    fn resolve_flags(&self, requested: GraphFlags) -> GraphFlags {
        Capability::iter()
            .filter(|&c| self.rule(c).resolve(requested.contains(c.flag())))
            .fold(GraphFlags::empty(), |flags, c| flags | c.flag())
    }

    /// Returns the flags suggested before the caller chooses.
    fn default_flags(&self) -> GraphFlags {
        Capability::iter()
            .filter(|&c| self.rule(c).suggested())
            .fold(GraphFlags::empty(), |flags, c| flags | c.flag())
    }
}

/// Matches `params` against the generator's pattern.
pub(crate) fn match_parameters<'p, G: Generator + ?Sized>(
    generator: &G,
    params: &'p str,
) -> Result<Captures<'p>> {
    generator
        .parameters()
        .regex()?
        .captures(params)
        .ok_or_else(|| Error::InvalidParameters {
            generator: generator.name().to_string(),
            parameters: params.to_string(),
        })
}

/// Parses capture group `index` as a number.
pub(crate) fn parse_group<T>(captures: &Captures<'_>, index: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = captures
        .get(index)
        .map(|m| m.as_str())
        .ok_or_else(|| {
            malformed_error!("Parameter group {} did not participate in the match", index)
        })?;

    text.parse::<T>()
        .map_err(|e| malformed_error!("Parameter '{}' could not be parsed: {}", text, e))
}

/// Fails with [`Error::LimitExceeded`] unless `requested` is known and within `limit`.
///
/// `None` stands for a count that overflowed while being computed.
fn check_limit(element: &'static str, requested: Option<usize>, limit: usize) -> Result<usize> {
    match requested {
        Some(count) if count <= limit => Ok(count),
        Some(count) => Err(Error::LimitExceeded {
            element,
            requested: count,
            limit,
        }),
        None => Err(Error::LimitExceeded {
            element,
            requested: usize::MAX,
            limit,
        }),
    }
}

/// Checks a vertex count against `config.max_vertices`.
pub(crate) fn check_vertex_limit(
    requested: Option<usize>,
    config: &GeneratorConfig,
) -> Result<usize> {
    check_limit("vertices", requested, config.max_vertices)
}

/// Checks an edge count against `config.max_edges`.
pub(crate) fn check_edge_limit(
    requested: Option<usize>,
    config: &GeneratorConfig,
) -> Result<usize> {
    check_limit("edges", requested, config.max_edges)
}

/// Returns the point at `index` of `count` evenly spaced on a circle, starting at the top.
pub(crate) fn circle_point(radius: f64, index: usize, count: usize) -> (f64, f64) {
    let step = 2.0 * std::f64::consts::PI / count as f64;
    let angle = step * index as f64 - std::f64::consts::FRAC_PI_2;
    (radius * angle.cos(), radius * angle.sin())
}
