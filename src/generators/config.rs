//! Generator configuration.
//!
//! This module provides the settings shared by every graph generator: how generated graphs
//! are named, how large circular layouts are drawn, and how large a single generation may
//! grow.

/// Configuration for graph generation
///
/// Parameter patterns already bound each numeric argument, but several generators grow
/// polynomially or exponentially in their arguments (a symmetric tree with 20 levels and
/// fan-out 9 has more than 10^19 vertices). `max_vertices` and `max_edges` are checked
/// against the exact counts before any storage is allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Prefix of every generated graph's name; the generator's name is appended
    pub default_graph_name: String,

    /// Distance from the center per vertex for circular layouts (star corners, cycles)
    /// A cycle of n vertices is drawn on a circle of radius `circle_radius_multiplier * n`
    pub circle_radius_multiplier: f64,

    /// Maximum number of vertices a single generation may produce (default: 1,000,000)
    pub max_vertices: usize,

    /// Maximum number of edges a single generation may produce (default: 10,000,000)
    /// Matters for dense families such as the bipartite products, whose edge count grows
    /// with r·s while the vertex count grows with r + s
    pub max_edges: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_graph_name: "Untitled".to_string(),
            circle_radius_multiplier: 15.0,
            max_vertices: 1_000_000,
            max_edges: 10_000_000,
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration suitable for interactive editing
    ///
    /// Caps generation at a size an editor can still draw and lay out with forces.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            max_vertices: 10_000,
            max_edges: 100_000,
            ..Self::default()
        }
    }

    /// Creates a configuration without a vertex limit
    ///
    /// **Warning**: Parameters that pass validation can still describe graphs that do not fit
    /// in memory. Use only with trusted parameters.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_vertices: usize::MAX,
            max_edges: usize::MAX,
            ..Self::default()
        }
    }

    /// Returns the name for a graph produced by the generator called `generator`.
    #[must_use]
    pub fn graph_name(&self, generator: &str) -> String {
        if self.default_graph_name.is_empty() {
            generator.to_string()
        } else {
            format!("{} {}", self.default_graph_name, generator)
        }
    }
}
