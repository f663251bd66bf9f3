//! Graph algorithms over [`MatrixGraph`](crate::graph::MatrixGraph).
//!
//! - [`traversal`] - breadth-first and depth-first search
//! - [`sssp`] - single-source shortest paths
//! - [`apsp`] - all-pairs shortest paths and reachability
//! - [`matching`] - maximum bipartite matching
//! - [`paths`] - path reconstruction over predecessor trees

pub mod apsp;
pub mod matching;
pub mod paths;
pub mod sssp;
pub mod traversal;

pub use apsp::{
    AllPairsResult, TransitiveClosure, floyd_warshall, johnson, maximin, repeated_squaring,
    transitive_closure,
};
pub use matching::{Matching, flow_matching, hopcroft_karp, kuhn};
pub use paths::{PredecessorTree, path_array, path_string, reconstruct_path, sssp_path_string};
pub use sssp::{PathNode, ShortestPaths, bellman_ford, dag_shortest_paths, dijkstra, relax, spfa};
pub use traversal::{Traversal, VertexColor, VisitRecord, bfs, dfs, dfs_iterative};

use crate::graph::MatrixGraph;
use hodos_common::{Error, Result};

/// Shared precondition for algorithms defined only over directed,
/// weighted graphs.
pub(crate) fn require_weighted_digraph(graph: &MatrixGraph, algorithm: &'static str) -> Result<()> {
    if graph.is_directed() && graph.is_weighted() {
        Ok(())
    } else {
        Err(Error::GraphShape {
            algorithm,
            requirement: "a directed, weighted graph",
        })
    }
}
