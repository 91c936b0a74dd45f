// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # visigraph
//!
//! Graph generation, analysis and layout for interactive graph editors.
//!
//! `visigraph` owns the model side of a visual graph editor: positioned vertices and edges,
//! a registry of parameterized generators that build well-known graph families, a registry
//! of analysis functions, and layout engines that move vertices around. Rendering, input
//! handling and persistence belong to the embedding application.
//!
//! ## Features
//!
//! - **Graph model** - Indexed vertices and edges, mixed directed and undirected edges,
//!   declared structural flags, batched mutation with a revision counter
//! - **Generators** - Star, cycle, symmetric tree and two bipartite/cycle products, each
//!   with a validated parameter string and resolved structural flags
//! - **Functions** - Radius, connected and strongly connected components, maximum indegree,
//!   regularity
//! - **Layout** - One-step force-directed placement with a deceleration schedule, and
//!   deterministic circle, grid and tree arrangements
//!
//! ## Quick Start
//!
//! ```rust
//! use visigraph::prelude::*;
//!
//! let tree = registry::find_generator("Symmetric tree")?;
//! let mut graph = tree.generate("2 3", GraphFlags::empty(), &GeneratorConfig::default())?;
//! assert_eq!(graph.vertex_count(), 13);
//!
//! let radius = registry::find_function("Calculate radius (unweighted)")?;
//! println!("radius = {}", radius.evaluate_checked(&mut graph)?);
//!
//! arrange_tree(&mut graph, &LayoutConfig::default());
//! # Ok::<(), visigraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The in-memory model every other module reads and writes
//! - [`algorithms`] - Traversals, components, distances and degree queries
//! - [`generators`] - The [`Generator`](generators::Generator) trait and its implementations
//! - [`functions`] - The [`Function`](functions::Function) trait and its implementations
//! - [`registry`] - Name lookup over every generator and function
//! - [`layout`] - Force-directed and arranged vertex placement
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: engines report output sizes at `debug` and
//! individual force steps at `trace`. No logger is installed by the crate.
//!
//! ## Error Handling
//!
//! Engines that take a graph snapshot never fail. Errors come from the boundary where
//! callers pass parameter strings or names:
//!
//! ```rust
//! use visigraph::{registry, Error};
//!
//! match registry::find_function("Count stars") {
//!     Ok(function) => println!("{}", function.description()),
//!     Err(Error::NotFound(name)) => println!("no function named {name}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use visigraph::prelude::*;
///
/// let mut graph = Graph::new("scratch", GraphFlags::all());
/// let a = graph.add_vertex(Vertex::new(0.0, 0.0));
/// let b = graph.add_vertex(Vertex::new(10.0, 0.0));
/// graph.add_edge(Edge::directed(a, b))?;
/// assert_eq!(count_components(&graph, ComponentMode::Strong), 2);
/// # Ok::<(), visigraph::Error>(())
/// ```
pub mod prelude;

pub mod algorithms;
pub mod functions;
pub mod generators;
pub mod graph;
pub mod layout;
pub mod registry;

/// `visigraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `visigraph` Error type
///
/// The main error type for all fallible operations in this crate.
pub use error::Error;

/// Configuration for graph generation
pub use generators::GeneratorConfig;

/// The graph model and its structural flags
pub use graph::{Graph, GraphFlags};

/// Configuration for force-directed and arranged layouts
pub use layout::LayoutConfig;
