//! Built-in wrappers around the `hodos-core` algorithm suite.
//!
//! One wrapper per algorithm, grouped by family:
//!
//! - traversal: `bfs`, `dfs`
//! - single-source shortest paths: `dijkstra`, `bellman_ford`, `spfa`,
//!   `dag_shortest_paths`
//! - all-pairs: `floyd_warshall`, `johnson`, `repeated_squaring`,
//!   `transitive_closure`, `maximin`
//! - bipartite matching: `kuhn`, `hopcroft_karp`, `flow_matching`

mod all_pairs;
mod matching;
mod shortest_path;
mod traversal;

// All-pairs shortest paths
pub use all_pairs::{
    FloydWarshallAlgorithm, JohnsonAlgorithm, MaximinAlgorithm, RepeatedSquaringAlgorithm,
    TransitiveClosureAlgorithm,
};
// Bipartite matching
pub use matching::{FlowMatchingAlgorithm, HopcroftKarpAlgorithm, KuhnAlgorithm};
// Single-source shortest paths
pub use shortest_path::{
    BellmanFordAlgorithm, DagShortestPathsAlgorithm, DijkstraAlgorithm, SpfaAlgorithm,
};
// Traversal
pub use traversal::{BfsAlgorithm, DfsAlgorithm};

use std::sync::Arc;

use hodos_common::{Distance, Error, Result, Value, VertexId};

use super::traits::{AlgorithmResult, GraphAlgorithm, Parameters};

/// Fetches a required vertex parameter.
pub(crate) fn require_vertex(params: &Parameters, name: &str) -> Result<VertexId> {
    params
        .get_vertex(name)
        .ok_or_else(|| Error::InvalidValue(format!("{name} parameter required")))
}

/// Renders a distance as a result cell. Unreachable maps to null.
pub(crate) fn distance_value(distance: Distance) -> Value {
    match distance {
        Distance::Finite(d) => Value::Int64(d),
        Distance::Infinite => Value::Null,
    }
}

/// Renders a predecessor as a result cell. Absent maps to null.
pub(crate) fn predecessor_value(predecessor: Option<VertexId>) -> Value {
    match predecessor {
        Some(p) => Value::Int64(p as i64),
        None => Value::Null,
    }
}

/// The single-row table reported when a negative cycle blocks a run.
pub(crate) fn negative_cycle_result() -> AlgorithmResult {
    let mut result = AlgorithmResult::new(vec!["negative_cycle".to_string()]);
    result.add_row(vec![Value::Bool(true)]);
    result
}

/// Every built-in algorithm, in registration order.
#[must_use]
pub fn builtins() -> Vec<Arc<dyn GraphAlgorithm>> {
    let builtins: Vec<Arc<dyn GraphAlgorithm>> = vec![
        Arc::new(BfsAlgorithm),
        Arc::new(DfsAlgorithm),
        Arc::new(DijkstraAlgorithm),
        Arc::new(BellmanFordAlgorithm),
        Arc::new(SpfaAlgorithm),
        Arc::new(DagShortestPathsAlgorithm),
        Arc::new(FloydWarshallAlgorithm),
        Arc::new(JohnsonAlgorithm),
        Arc::new(RepeatedSquaringAlgorithm),
        Arc::new(TransitiveClosureAlgorithm),
        Arc::new(MaximinAlgorithm),
        Arc::new(KuhnAlgorithm),
        Arc::new(HopcroftKarpAlgorithm),
        Arc::new(FlowMatchingAlgorithm),
    ];
    builtins
}
