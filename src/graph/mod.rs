//! In-memory graph model.
//!
//! This module provides the graph representation that every engine in the crate reads and
//! writes: positioned vertices, directed or undirected edges, the declared structural
//! flags, and adjacency queries.
//!
//! # Architecture
//!
//! - **Identifiers**: [`VertexId`] and [`EdgeId`] are newtype indices into the graph's
//!   vertex and edge sequences, so the two can never be mixed up
//! - **Records**: [`Vertex`] and [`Edge`] hold geometry and display attributes
//! - **Model**: [`Graph`] owns both sequences plus per-vertex adjacency lists
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] let the traversal and
//!   strong-connectivity algorithms run on [`Graph`] and on its [`Undirected`] view alike
//!
//! # Ownership
//!
//! A `Graph` is owned by whoever created it (typically an editor session). Engines take
//! `&Graph` or `&mut Graph` for the duration of one call and never retain it.
//!
//! # Change tracking
//!
//! There are no observers. The graph counts revisions, and [`Graph::batch`] turns any
//! number of writes into one revision step, so a presentation layer can compare revisions
//! and redraw once per batch.

mod edge;
mod flags;
mod model;
mod traits;
mod vertex;

pub use edge::{Edge, EdgeId, DEFAULT_EDGE_THICKNESS, DEFAULT_EDGE_WEIGHT};
pub use flags::{Capability, GraphFlags};
pub use model::{Change, ChangeKind, Graph, Undirected};
pub use traits::{GraphBase, Predecessors, Successors};
pub use vertex::{Vertex, VertexId, DEFAULT_VERTEX_RADIUS, UNCOLORED};
