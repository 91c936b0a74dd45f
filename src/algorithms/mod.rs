//! Graph analysis engines.
//!
//! Every engine borrows a [`Graph`](crate::graph::Graph) for the duration of one call and
//! keeps no state between calls.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal
//! - [`bfs`] - Breadth-first search traversal
//! - [`bfs_levels`] - Multi-source breadth-first layering
//!
//! ## Metric
//!
//! - [`DistanceMatrix`] - Floyd-Warshall all-pairs shortest distances
//! - [`compute_radius`] - Minimum eccentricity as a [`Radius`]
//!
//! ## Connectivity
//!
//! - [`UnionFind`] - Disjoint-set forest
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm
//! - [`find_components`], [`count_components`], [`color_components`] - Weak or strong
//!   component labeling selected by [`ComponentMode`]
//!
//! ## Degree
//!
//! - [`degree_counts`], [`max_indegree`] - Edge-endpoint counting
//! - [`is_regular`] - Regularity test
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | Reachability, tree arrangement |
//! | Floyd-Warshall | O(V³) | Radius, diameter |
//! | Union-find | O(E α(V)) | Weak components |
//! | Tarjan SCC | O(V + E) | Strong components |

mod components;
mod degree;
mod metric;
mod scc;
mod traversal;
mod union_find;

pub use components::{color_components, count_components, find_components, ComponentMode};
pub use degree::{degree_counts, is_regular, max_indegree};
pub use metric::{compute_radius, DistanceMatrix, Radius};
pub use scc::strongly_connected_components;
pub use traversal::{bfs, bfs_levels, dfs, BfsIterator, DfsIterator};
pub use union_find::UnionFind;
