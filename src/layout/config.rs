//! Layout configuration.
//!
//! This module provides the constants used by the force-directed step, the caller-side
//! deceleration schedule, and the deterministic arrange operations.

/// Configuration for force-directed and arranged layouts
///
/// With the default constants, two vertices joined by an edge settle where repulsion
/// `repulsive_force / d` balances attraction `attractive_force · d³`, at
/// `d = (repulsive_force / attractive_force)^(1/4)`, about 150 units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Strength of the pairwise repulsion, applied as `repulsive_force · diff / dist²`
    pub repulsive_force: f64,

    /// Strength of the edge attraction, applied as `attractive_force · diff · dist²`
    pub attractive_force: f64,

    /// Delay before the first force step, in milliseconds (default: 50)
    pub initial_delay_ms: f64,

    /// Factor the delay is multiplied by after every step (default: 1.1)
    /// With a factor of 1.0 or less the schedule ends after the first delay
    pub deceleration_factor: f64,

    /// Delay at which force steps stop, in milliseconds (default: 500)
    pub max_delay_ms: f64,

    /// Radius of the circle used by the circle arrangement
    pub arrange_circle_radius: f64,

    /// Width of the box used by the grid and tree arrangements, centered on the origin
    pub arrange_box_width: f64,

    /// Height of the box used by the grid and tree arrangements, centered on the origin
    pub arrange_box_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            repulsive_force: 1000.0,
            attractive_force: 2e-6,
            initial_delay_ms: 50.0,
            deceleration_factor: 1.1,
            max_delay_ms: 500.0,
            arrange_circle_radius: 250.0,
            arrange_box_width: 500.0,
            arrange_box_height: 500.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a configuration for small graphs
    ///
    /// Halves every arrangement dimension and shortens the natural edge length to about 100
    /// units.
    #[must_use]
    pub fn compact() -> Self {
        let default = Self::default();
        Self {
            attractive_force: default.attractive_force * 5.0625,
            arrange_circle_radius: default.arrange_circle_radius / 2.0,
            arrange_box_width: default.arrange_box_width / 2.0,
            arrange_box_height: default.arrange_box_height / 2.0,
            ..default
        }
    }

    /// Creates a configuration that settles in fewer, larger steps
    ///
    /// Suited to large graphs where each force step is expensive.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            initial_delay_ms: 100.0,
            deceleration_factor: 1.5,
            ..Self::default()
        }
    }

    /// Returns the natural length of an edge between two otherwise free vertices.
    #[must_use]
    pub fn natural_edge_length(&self) -> f64 {
        (self.repulsive_force / self.attractive_force).powf(0.25)
    }
}
