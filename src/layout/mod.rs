//! Vertex placement.
//!
//! This module moves vertices; it never adds, removes or reconnects anything. Two families
//! of operations live here:
//!
//! - **Force-directed**: [`apply_forces`] runs one spring-electrical step. Callers repeat
//!   it on the delays produced by a [`DecelerationSchedule`] until the schedule ends.
//! - **Arrangements**: deterministic placements on a circle, a grid or a breadth-first
//!   tree, plus alignment and even distribution of the selected vertices.
//!
//! Every operation writes its positions in one [`Graph::batch`](crate::graph::Graph::batch)
//! and reports what it did as a [`Change`](crate::graph::Change).
//!
//! # Examples
//!
//! ```rust
//! use visigraph::layout::{apply_forces, arrange_circle, DecelerationSchedule};
//! use visigraph::registry;
//! use visigraph::{GeneratorConfig, GraphFlags, LayoutConfig};
//!
//! let cycle = registry::find_generator("Cycle graph")?;
//! let mut graph = cycle.generate("6", GraphFlags::empty(), &GeneratorConfig::default())?;
//!
//! let config = LayoutConfig::default();
//! arrange_circle(&mut graph, &config);
//! for _delay in DecelerationSchedule::new(&config) {
//!     apply_forces(&mut graph, &config);
//! }
//! # Ok::<(), visigraph::Error>(())
//! ```

mod arrange;
mod config;
mod force;

pub use arrange::{
    align_horizontally, align_vertically, arrange_circle, arrange_grid, arrange_tree,
    distribute_horizontally, distribute_vertically,
};
pub use config::LayoutConfig;
pub use force::{apply_forces, DecelerationSchedule, MIN_FORCE_DISTANCE};
