//! Single-source shortest-path wrappers.
//!
//! All four report the same table shape as [`distance_table`] lays
//! out; the cycle-detecting pair falls back to the shared
//! negative-cycle table when relaxation cannot settle.

use std::sync::OnceLock;

use hodos_common::{Result, Value};
use hodos_core::MatrixGraph;
use hodos_core::algo::sssp::{self, ShortestPaths};

use super::super::{AlgorithmResult, GraphAlgorithm, ParameterDef, ParameterType, Parameters};
use super::{distance_value, negative_cycle_result, predecessor_value, require_vertex};

static SOURCE_PARAMS: OnceLock<Vec<ParameterDef>> = OnceLock::new();

fn source_params() -> &'static [ParameterDef] {
    SOURCE_PARAMS.get_or_init(|| {
        vec![ParameterDef {
            name: "start".to_string(),
            description: "Source vertex index".to_string(),
            param_type: ParameterType::Vertex,
            required: true,
            default: None,
        }]
    })
}

/// Lays a shortest-path run out as one row per vertex.
fn distance_table(run: &ShortestPaths) -> AlgorithmResult {
    let mut result = AlgorithmResult::new(vec![
        "vertex".to_string(),
        "distance".to_string(),
        "predecessor".to_string(),
    ]);
    for (vertex, node) in run.nodes().iter().enumerate() {
        result.add_row(vec![
            Value::Int64(vertex as i64),
            distance_value(node.distance),
            predecessor_value(node.predecessor),
        ]);
    }
    result
}

/// Dijkstra wrapper for the algorithm registry.
pub struct DijkstraAlgorithm;

impl GraphAlgorithm for DijkstraAlgorithm {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn description(&self) -> &str {
        "Shortest paths from a source over non-negative edge weights"
    }

    fn parameters(&self) -> &[ParameterDef] {
        source_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        let run = sssp::dijkstra(graph, start)?;
        Ok(distance_table(&run))
    }
}

/// Bellman-Ford wrapper for the algorithm registry.
pub struct BellmanFordAlgorithm;

impl GraphAlgorithm for BellmanFordAlgorithm {
    fn name(&self) -> &str {
        "bellman_ford"
    }

    fn description(&self) -> &str {
        "Shortest paths from a source, tolerating negative edge weights"
    }

    fn parameters(&self) -> &[ParameterDef] {
        source_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        match sssp::bellman_ford(graph, start)? {
            Some(run) => Ok(distance_table(&run)),
            None => Ok(negative_cycle_result()),
        }
    }
}

/// SPFA wrapper for the algorithm registry.
pub struct SpfaAlgorithm;

impl GraphAlgorithm for SpfaAlgorithm {
    fn name(&self) -> &str {
        "spfa"
    }

    fn description(&self) -> &str {
        "Queue-driven Bellman-Ford variant, relaxing only changed vertices"
    }

    fn parameters(&self) -> &[ParameterDef] {
        source_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        match sssp::spfa(graph, start)? {
            Some(run) => Ok(distance_table(&run)),
            None => Ok(negative_cycle_result()),
        }
    }
}

/// DAG shortest-paths wrapper for the algorithm registry.
pub struct DagShortestPathsAlgorithm;

impl GraphAlgorithm for DagShortestPathsAlgorithm {
    fn name(&self) -> &str {
        "dag_shortest_paths"
    }

    fn description(&self) -> &str {
        "Shortest paths from a source in one topological-order sweep"
    }

    fn parameters(&self) -> &[ParameterDef] {
        source_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        let run = sssp::dag_shortest_paths(graph, start)?;
        Ok(distance_table(&run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_triangle() -> MatrixGraph {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge_weighted(0, 1, 4).unwrap();
        graph.add_edge_weighted(0, 2, 10).unwrap();
        graph.add_edge_weighted(1, 2, 3).unwrap();
        graph
    }

    fn negative_cycle_graph() -> MatrixGraph {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge_weighted(0, 1, 1).unwrap();
        graph.add_edge_weighted(1, 2, -3).unwrap();
        graph.add_edge_weighted(2, 1, 1).unwrap();
        graph
    }

    #[test]
    fn test_dijkstra_table() {
        let graph = weighted_triangle();
        let params = Parameters::new().with("start", 0i64);
        let result = DijkstraAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(result.columns(), ["vertex", "distance", "predecessor"]);
        assert_eq!(
            result.rows(),
            [
                vec![Value::Int64(0), Value::Int64(0), Value::Null],
                vec![Value::Int64(1), Value::Int64(4), Value::Int64(0)],
                vec![Value::Int64(2), Value::Int64(7), Value::Int64(1)],
            ]
        );
    }

    #[test]
    fn test_dijkstra_requires_weighted_digraph() {
        let graph = MatrixGraph::undirected(3);
        let params = Parameters::new().with("start", 0i64);
        let err = DijkstraAlgorithm.execute(&graph, &params).unwrap_err();

        assert_eq!(
            err.to_string(),
            "dijkstra requires a directed, weighted graph"
        );
    }

    #[test]
    fn test_bellman_ford_reports_negative_cycle() {
        let graph = negative_cycle_graph();
        let params = Parameters::new().with("start", 0i64);
        let result = BellmanFordAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(result.columns(), ["negative_cycle"]);
        assert_eq!(result.rows(), [vec![Value::Bool(true)]]);
    }

    #[test]
    fn test_spfa_matches_bellman_ford() {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge_weighted(0, 1, 5).unwrap();
        graph.add_edge_weighted(0, 2, 8).unwrap();
        graph.add_edge_weighted(1, 2, -4).unwrap();
        let params = Parameters::new().with("start", 0i64);

        let spfa = SpfaAlgorithm.execute(&graph, &params).unwrap();
        let bellman = BellmanFordAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(spfa, bellman);
        assert_eq!(spfa.rows()[2][1], Value::Int64(1));
    }

    #[test]
    fn test_dag_rejects_cycles() {
        let graph = negative_cycle_graph();
        let params = Parameters::new().with("start", 0i64);
        let err = DagShortestPathsAlgorithm.execute(&graph, &params).unwrap_err();

        assert_eq!(
            err.to_string(),
            "dag_shortest_paths requires an acyclic graph"
        );
    }

    #[test]
    fn test_dag_table() {
        let graph = weighted_triangle();
        let params = Parameters::new().with("start", 0i64);
        let result = DagShortestPathsAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(result.rows()[2][1], Value::Int64(7));
        assert_eq!(result.rows()[2][2], Value::Int64(1));
    }

    #[test]
    fn test_missing_start_parameter() {
        let graph = weighted_triangle();
        let err = DijkstraAlgorithm
            .execute(&graph, &Parameters::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid value: start parameter required");
    }
}
