//! Adapter layer for the hodos graph-algorithms engine.
//!
//! Wraps the algorithm suite from `hodos-core` behind a uniform,
//! name-addressable interface: each algorithm implements
//! [`GraphAlgorithm`], taking a [`Parameters`] bag and returning a
//! tabular [`AlgorithmResult`], and the [`AlgorithmRegistry`] resolves
//! implementations by name.
//!
//! # Examples
//!
//! ```
//! use hodos_adapters::{AlgorithmRegistry, Parameters};
//! use hodos_core::MatrixGraph;
//!
//! let mut graph = MatrixGraph::directed(3);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//!
//! let registry = AlgorithmRegistry::with_builtins();
//! let params = Parameters::new().with("start", 0i64);
//! let result = registry.execute("bfs", &graph, &params)?;
//!
//! assert_eq!(result.columns(), ["vertex", "distance", "predecessor"]);
//! assert_eq!(result.row_count(), 3);
//! # Ok::<(), hodos_common::Error>(())
//! ```

pub mod plugins;

pub use plugins::{
    AlgorithmRegistry, AlgorithmResult, GraphAlgorithm, ParameterDef, ParameterType, Parameters,
};
