//! Traversal wrappers: breadth-first and depth-first search.

use std::sync::OnceLock;

use hodos_common::{Result, Value};
use hodos_core::MatrixGraph;
use hodos_core::algo::traversal;

use super::super::{AlgorithmResult, GraphAlgorithm, ParameterDef, ParameterType, Parameters};
use super::{distance_value, predecessor_value, require_vertex};

static BFS_PARAMS: OnceLock<Vec<ParameterDef>> = OnceLock::new();

fn bfs_params() -> &'static [ParameterDef] {
    BFS_PARAMS.get_or_init(|| {
        vec![ParameterDef {
            name: "start".to_string(),
            description: "Starting vertex index".to_string(),
            param_type: ParameterType::Vertex,
            required: true,
            default: None,
        }]
    })
}

/// BFS wrapper for the algorithm registry.
pub struct BfsAlgorithm;

impl GraphAlgorithm for BfsAlgorithm {
    fn name(&self) -> &str {
        "bfs"
    }

    fn description(&self) -> &str {
        "Breadth-first search from a starting vertex, reporting hop counts"
    }

    fn parameters(&self) -> &[ParameterDef] {
        bfs_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        let tree = traversal::bfs(graph, start)?;

        let mut result = AlgorithmResult::new(vec![
            "vertex".to_string(),
            "distance".to_string(),
            "predecessor".to_string(),
        ]);
        for (vertex, record) in tree.records().iter().enumerate() {
            result.add_row(vec![
                Value::Int64(vertex as i64),
                distance_value(record.distance),
                predecessor_value(record.predecessor),
            ]);
        }
        Ok(result)
    }
}

static DFS_PARAMS: OnceLock<Vec<ParameterDef>> = OnceLock::new();

fn dfs_params() -> &'static [ParameterDef] {
    DFS_PARAMS.get_or_init(|| {
        vec![ParameterDef {
            name: "start".to_string(),
            description: "Starting vertex index".to_string(),
            param_type: ParameterType::Vertex,
            required: true,
            default: None,
        }]
    })
}

/// DFS wrapper for the algorithm registry.
pub struct DfsAlgorithm;

impl GraphAlgorithm for DfsAlgorithm {
    fn name(&self) -> &str {
        "dfs"
    }

    fn description(&self) -> &str {
        "Depth-first search from a starting vertex, reporting discover and finish times"
    }

    fn parameters(&self) -> &[ParameterDef] {
        dfs_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let start = require_vertex(params, "start")?;
        // The explicit-stack form keeps deep graphs off the call stack.
        let tree = traversal::dfs_iterative(graph, start)?;

        let mut result = AlgorithmResult::new(vec![
            "vertex".to_string(),
            "discovered".to_string(),
            "finished".to_string(),
            "predecessor".to_string(),
        ]);
        for (vertex, record) in tree.records().iter().enumerate() {
            let finished = match record.finish {
                Some(time) => Value::Int64(time as i64),
                None => Value::Null,
            };
            result.add_row(vec![
                Value::Int64(vertex as i64),
                distance_value(record.distance),
                finished,
                predecessor_value(record.predecessor),
            ]);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_hole() -> MatrixGraph {
        // 0 -> 1 -> 2, index 3 never written
        let mut graph = MatrixGraph::directed(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph
    }

    #[test]
    fn test_bfs_table() {
        let graph = chain_with_hole();
        let params = Parameters::new().with("start", 0i64);
        let result = BfsAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(result.columns(), ["vertex", "distance", "predecessor"]);
        assert_eq!(result.row_count(), 4);
        assert_eq!(
            result.rows()[0],
            vec![Value::Int64(0), Value::Int64(0), Value::Null]
        );
        assert_eq!(
            result.rows()[2],
            vec![Value::Int64(2), Value::Int64(2), Value::Int64(1)]
        );
        // The hole at index 3 is never reached.
        assert_eq!(
            result.rows()[3],
            vec![Value::Int64(3), Value::Null, Value::Null]
        );
    }

    #[test]
    fn test_bfs_missing_start() {
        let graph = chain_with_hole();
        let err = BfsAlgorithm.execute(&graph, &Parameters::new()).unwrap_err();

        assert_eq!(err.to_string(), "invalid value: start parameter required");
    }

    #[test]
    fn test_bfs_start_out_of_range() {
        let graph = chain_with_hole();
        let params = Parameters::new().with("start", 9i64);

        assert!(BfsAlgorithm.execute(&graph, &params).is_err());
    }

    #[test]
    fn test_dfs_table_covers_the_forest() {
        let mut graph = chain_with_hole();
        graph.add_edge(3, 3).unwrap();
        let params = Parameters::new().with("start", 0i64);
        let result = DfsAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(
            result.columns(),
            ["vertex", "discovered", "finished", "predecessor"]
        );
        assert_eq!(result.row_count(), 4);
        // Chain from 0: discover 0,1,2 then finish 2,1,0.
        assert_eq!(
            result.rows()[0],
            vec![Value::Int64(0), Value::Int64(0), Value::Int64(5), Value::Null]
        );
        assert_eq!(
            result.rows()[2],
            vec![Value::Int64(2), Value::Int64(2), Value::Int64(3), Value::Int64(1)]
        );
        // Vertex 3 is present (self-loop) and rooted after the source tree.
        assert_eq!(
            result.rows()[3],
            vec![Value::Int64(3), Value::Int64(6), Value::Int64(7), Value::Null]
        );
    }

    #[test]
    fn test_dfs_metadata() {
        assert_eq!(DfsAlgorithm.name(), "dfs");
        assert_eq!(BfsAlgorithm.parameters().len(), 1);
        assert_eq!(BfsAlgorithm.parameters()[0].name, "start");
        assert!(BfsAlgorithm.parameters()[0].required);
    }
}
