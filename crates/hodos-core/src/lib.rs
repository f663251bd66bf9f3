//! Dense-matrix graphs and the classical graph-algorithm suite.
//!
//! ## Modules
//!
//! - [`graph`] - [`MatrixGraph`] and [`FlowNetwork`] containers
//! - [`algo`] - traversal, shortest paths, all-pairs, bipartite matching
//!
//! ## Example
//!
//! ```
//! use hodos_core::algo::{paths, traversal};
//! use hodos_core::graph::MatrixGraph;
//!
//! let mut graph = MatrixGraph::directed(4);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! let tree = traversal::bfs(&graph, 0)?;
//! assert_eq!(paths::path_string(&tree, 0, 2), "0 -> 1 -> 2");
//! assert_eq!(paths::path_array(&tree, 0, 3), vec![-1]);
//! # Ok::<(), hodos_common::Error>(())
//! ```

pub mod algo;
pub mod graph;

pub use graph::{Edge, FlowNetwork, GraphConfig, MatrixGraph};
