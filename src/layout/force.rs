//! Force-directed layout step.
//!
//! [`apply_forces`] performs exactly one pass of a spring-electrical simulation. Running the
//! simulation is the caller's job: apply one step, redraw, wait for the next delay from a
//! [`DecelerationSchedule`], repeat until the schedule ends.
//!
//! # Forces
//!
//! - Every unordered vertex pair repels with `repulsive_force · diff / dist²`, a magnitude of
//!   `repulsive_force / dist`
//! - Every non-loop edge pulls its endpoints together with `attractive_force · diff · dist²`,
//!   a magnitude of `attractive_force · dist³`
//!
//! `dist²` is clamped below by `MIN_FORCE_DISTANCE²`. Coincident vertices have a zero
//! difference vector and so exert no force on each other.

use std::time::Duration;

use log::trace;

use crate::{
    graph::{Change, ChangeKind, Graph},
    layout::LayoutConfig,
};

/// Smallest distance used when computing forces.
pub const MIN_FORCE_DISTANCE: f64 = 1.0;

fn clamped_distance_squared(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).max(MIN_FORCE_DISTANCE * MIN_FORCE_DISTANCE)
}

/// Moves every vertex once by the net force acting on it.
///
/// Forces are computed from the positions before the step and applied in one batch, so the
/// revision advances by exactly one on a non-empty graph.
///
/// # Complexity
///
/// - Time: O(V² + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use visigraph::graph::{Graph, Vertex, VertexId};
/// use visigraph::layout::apply_forces;
/// use visigraph::LayoutConfig;
///
/// let mut graph = Graph::default();
/// graph.add_vertex(Vertex::new(-10.0, 0.0));
/// graph.add_vertex(Vertex::new(10.0, 0.0));
///
/// let change = apply_forces(&mut graph, &LayoutConfig::default());
/// assert_eq!(change.vertices, 2);
///
/// // Unconnected vertices push each other apart
/// assert!(graph.vertex(VertexId::new(0)).unwrap().x < -10.0);
/// ```
pub fn apply_forces(graph: &mut Graph, config: &LayoutConfig) -> Change {
    let positions: Vec<(f64, f64)> = graph.vertices().map(|(_, v)| (v.x, v.y)).collect();
    let mut forces = vec![(0.0_f64, 0.0_f64); positions.len()];

    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let dx = positions[j].0 - positions[i].0;
            let dy = positions[j].1 - positions[i].1;
            let scale = config.repulsive_force / clamped_distance_squared(dx, dy);

            forces[i].0 -= scale * dx;
            forces[i].1 -= scale * dy;
            forces[j].0 += scale * dx;
            forces[j].1 += scale * dy;
        }
    }

    for (_, edge) in graph.edges() {
        if edge.is_loop() {
            continue;
        }
        let (from, to) = (edge.from.index(), edge.to.index());
        let dx = positions[to].0 - positions[from].0;
        let dy = positions[to].1 - positions[from].1;
        let scale = config.attractive_force * clamped_distance_squared(dx, dy);

        forces[from].0 += scale * dx;
        forces[from].1 += scale * dy;
        forces[to].0 -= scale * dx;
        forces[to].1 -= scale * dy;
    }

    let largest = forces
        .iter()
        .map(|(fx, fy)| fx.hypot(*fy))
        .fold(0.0_f64, f64::max);
    trace!(
        "force step over {} vertices, largest displacement {:.3}",
        positions.len(),
        largest
    );

    if !forces.is_empty() {
        graph.batch(|g| {
            for (id, vertex) in g.vertices_mut() {
                let (fx, fy) = forces[id.index()];
                vertex.x += fx;
                vertex.y += fy;
            }
        });
    }

    Change {
        kind: ChangeKind::Moved,
        vertices: forces.len(),
        edges: 0,
        revision: graph.revision(),
    }
}

/// Delays between successive force steps.
///
/// Yields `initial_delay_ms`, then multiplies the delay by `deceleration_factor` after every
/// step, and ends before the first delay that reaches `max_delay_ms`. With the default
/// configuration that is 25 steps, from 50 ms up to about 492 ms.
///
/// The schedule also ends as soon as multiplying by the factor stops increasing the delay,
/// so a factor of 1.0 or less yields the initial delay once.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use visigraph::layout::DecelerationSchedule;
/// use visigraph::LayoutConfig;
///
/// let mut schedule = DecelerationSchedule::new(&LayoutConfig::default());
/// assert_eq!(schedule.next(), Some(Duration::from_millis(50)));
/// assert_eq!(schedule.count(), 24);
/// ```
#[derive(Debug, Clone)]
pub struct DecelerationSchedule {
    current_ms: f64,
    factor: f64,
    max_ms: f64,
}

impl DecelerationSchedule {
    /// Creates the schedule described by `config`.
    #[must_use]
    pub fn new(config: &LayoutConfig) -> Self {
        DecelerationSchedule {
            current_ms: config.initial_delay_ms,
            factor: config.deceleration_factor,
            max_ms: config.max_delay_ms,
        }
    }
}

impl Iterator for DecelerationSchedule {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        // Comparisons with NaN are false, so a NaN delay or limit also ends the schedule
        let running = self.current_ms >= 0.0 && self.current_ms < self.max_ms;
        if !running {
            return None;
        }

        let delay = Duration::from_nanos((self.current_ms * 1_000_000.0).round() as u64);
        let next_ms = self.current_ms * self.factor;
        self.current_ms = if next_ms > self.current_ms {
            next_ms
        } else {
            self.max_ms
        };
        Some(delay)
    }
}
