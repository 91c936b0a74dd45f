//! # visigraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions of the visigraph library. Import it to build, analyze and lay out graphs
//! without naming every submodule.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all visigraph operations
pub use crate::Error;

/// The result type used throughout visigraph
pub use crate::Result;

/// Configuration for generation and layout
pub use crate::{GeneratorConfig, LayoutConfig};

// ================================================================================================
// Graph Model
// ================================================================================================

/// Vertices, edges and their identifiers
pub use crate::graph::{Edge, EdgeId, Vertex, VertexId};

/// The graph itself, its flags and change reports
pub use crate::graph::{Capability, Change, ChangeKind, Graph, GraphFlags};

/// Adjacency traits shared by the graph and its undirected view
pub use crate::graph::{GraphBase, Predecessors, Successors};

// ================================================================================================
// Generators and Functions
// ================================================================================================

/// The generator and function traits
pub use crate::{
    functions::{Function, FunctionOutput},
    generators::{BooleanRule, Generator},
};

/// Name lookup for generators and functions
pub use crate::registry;

// ================================================================================================
// Algorithms
// ================================================================================================

/// Connected and strongly connected components
pub use crate::algorithms::{color_components, count_components, find_components, ComponentMode};

/// Distances and degrees
pub use crate::algorithms::{compute_radius, is_regular, max_indegree, DistanceMatrix, Radius};

// ================================================================================================
// Layout
// ================================================================================================

/// Force-directed placement
pub use crate::layout::{apply_forces, DecelerationSchedule};

/// Deterministic arrangements
pub use crate::layout::{
    align_horizontally, align_vertically, arrange_circle, arrange_grid, arrange_tree,
    distribute_horizontally, distribute_vertically,
};
