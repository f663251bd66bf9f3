//! All-pairs wrappers: shortest paths, reachability, and bottlenecks.
//!
//! The distance-producing wrappers share one table shape, emitting a
//! row per ordered pair the algorithm actually connects; unreachable
//! pairs are simply absent.

use hodos_common::{Result, Value};
use hodos_core::MatrixGraph;
use hodos_core::algo::apsp::{self, AllPairsResult};

use super::super::{AlgorithmResult, GraphAlgorithm, ParameterDef, Parameters};
use super::{distance_value, negative_cycle_result, predecessor_value};

/// Lays an all-pairs run out as one row per connected ordered pair.
fn pair_table(run: &AllPairsResult) -> AlgorithmResult {
    let mut table = AlgorithmResult::new(vec![
        "from".to_string(),
        "to".to_string(),
        "distance".to_string(),
        "predecessor".to_string(),
    ]);
    for from in 0..run.rows() {
        for to in 0..run.rows() {
            let distance = run.distance(from, to);
            if distance.is_finite() {
                table.add_row(vec![
                    Value::Int64(from as i64),
                    Value::Int64(to as i64),
                    distance_value(distance),
                    predecessor_value(run.predecessor(from, to)),
                ]);
            }
        }
    }
    table
}

/// Floyd-Warshall wrapper for the algorithm registry.
pub struct FloydWarshallAlgorithm;

impl GraphAlgorithm for FloydWarshallAlgorithm {
    fn name(&self) -> &str {
        "floyd_warshall"
    }

    fn description(&self) -> &str {
        "All-pairs shortest paths by dynamic programming over intermediates"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &MatrixGraph, _params: &Parameters) -> Result<AlgorithmResult> {
        let run = apsp::floyd_warshall(graph)?;
        Ok(pair_table(&run))
    }
}

/// Johnson wrapper for the algorithm registry.
pub struct JohnsonAlgorithm;

impl GraphAlgorithm for JohnsonAlgorithm {
    fn name(&self) -> &str {
        "johnson"
    }

    fn description(&self) -> &str {
        "All-pairs shortest paths by reweighting, tolerating negative edges"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &MatrixGraph, _params: &Parameters) -> Result<AlgorithmResult> {
        match apsp::johnson(graph)? {
            Some(run) => Ok(pair_table(&run)),
            None => Ok(negative_cycle_result()),
        }
    }
}

/// Repeated-squaring wrapper for the algorithm registry.
pub struct RepeatedSquaringAlgorithm;

impl GraphAlgorithm for RepeatedSquaringAlgorithm {
    fn name(&self) -> &str {
        "repeated_squaring"
    }

    fn description(&self) -> &str {
        "All-pairs shortest paths by min-plus matrix squaring"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &MatrixGraph, _params: &Parameters) -> Result<AlgorithmResult> {
        let run = apsp::repeated_squaring(graph)?;
        Ok(pair_table(&run))
    }
}

/// Transitive-closure wrapper for the algorithm registry.
pub struct TransitiveClosureAlgorithm;

impl GraphAlgorithm for TransitiveClosureAlgorithm {
    fn name(&self) -> &str {
        "transitive_closure"
    }

    fn description(&self) -> &str {
        "Reachability between every ordered pair of vertices"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &MatrixGraph, _params: &Parameters) -> Result<AlgorithmResult> {
        let closure = apsp::transitive_closure(graph)?;

        let mut table = AlgorithmResult::new(vec!["from".to_string(), "to".to_string()]);
        for from in 0..closure.rows() {
            for to in 0..closure.rows() {
                if closure.reachable(from, to) {
                    table.add_row(vec![Value::Int64(from as i64), Value::Int64(to as i64)]);
                }
            }
        }
        Ok(table)
    }
}

/// Maximin wrapper for the algorithm registry.
pub struct MaximinAlgorithm;

impl GraphAlgorithm for MaximinAlgorithm {
    fn name(&self) -> &str {
        "maximin"
    }

    fn description(&self) -> &str {
        "Bottleneck paths minimizing the largest edge weight per pair"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &[]
    }

    fn execute(&self, graph: &MatrixGraph, _params: &Parameters) -> Result<AlgorithmResult> {
        let run = apsp::maximin(graph)?;
        Ok(pair_table(&run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_square() -> MatrixGraph {
        let mut graph = MatrixGraph::directed_weighted(4);
        graph.add_edge_weighted(0, 1, 1).unwrap();
        graph.add_edge_weighted(1, 2, 2).unwrap();
        graph.add_edge_weighted(2, 3, 3).unwrap();
        graph.add_edge_weighted(0, 3, 10).unwrap();
        graph
    }

    fn cell(row: &[Value], index: usize) -> i64 {
        row[index].as_int64().unwrap()
    }

    fn lookup(table: &AlgorithmResult, from: i64, to: i64) -> Option<&Vec<Value>> {
        table
            .rows()
            .iter()
            .find(|row| cell(row, 0) == from && cell(row, 1) == to)
    }

    #[test]
    fn test_floyd_warshall_table() {
        let graph = weighted_square();
        let result = FloydWarshallAlgorithm
            .execute(&graph, &Parameters::new())
            .unwrap();

        assert_eq!(result.columns(), ["from", "to", "distance", "predecessor"]);
        let row = lookup(&result, 0, 3).unwrap();
        assert_eq!(row[2], Value::Int64(6));
        assert_eq!(row[3], Value::Int64(2));
        // Unreachable pairs do not appear.
        assert!(lookup(&result, 3, 0).is_none());
    }

    #[test]
    fn test_johnson_matches_floyd_warshall() {
        let graph = weighted_square();
        let params = Parameters::new();

        let johnson = JohnsonAlgorithm.execute(&graph, &params).unwrap();
        let floyd = FloydWarshallAlgorithm.execute(&graph, &params).unwrap();

        assert_eq!(johnson, floyd);
    }

    #[test]
    fn test_johnson_reports_negative_cycle() {
        let mut graph = MatrixGraph::directed_weighted(2);
        graph.add_edge_weighted(0, 1, 1).unwrap();
        graph.add_edge_weighted(1, 0, -2).unwrap();

        let result = JohnsonAlgorithm.execute(&graph, &Parameters::new()).unwrap();

        assert_eq!(result.columns(), ["negative_cycle"]);
        assert_eq!(result.rows(), [vec![Value::Bool(true)]]);
    }

    #[test]
    fn test_repeated_squaring_matches_floyd_warshall() {
        let graph = weighted_square();
        let params = Parameters::new();

        let squared = RepeatedSquaringAlgorithm.execute(&graph, &params).unwrap();
        let floyd = FloydWarshallAlgorithm.execute(&graph, &params).unwrap();

        // Predecessors may legitimately differ; distances must not.
        assert_eq!(squared.row_count(), floyd.row_count());
        for (a, b) in squared.rows().iter().zip(floyd.rows()) {
            assert_eq!(a[..3], b[..3]);
        }
    }

    #[test]
    fn test_transitive_closure_table() {
        let mut graph = MatrixGraph::directed(3);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        let result = TransitiveClosureAlgorithm
            .execute(&graph, &Parameters::new())
            .unwrap();

        assert_eq!(result.columns(), ["from", "to"]);
        // Three diagonal pairs plus 0->1, 0->2, 1->2.
        assert_eq!(result.row_count(), 6);
        assert!(lookup(&result, 0, 2).is_some());
        assert!(lookup(&result, 2, 0).is_none());
    }

    #[test]
    fn test_maximin_bottleneck() {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge_weighted(0, 1, 5).unwrap();
        graph.add_edge_weighted(1, 2, 3).unwrap();
        graph.add_edge_weighted(0, 2, 7).unwrap();

        let result = MaximinAlgorithm.execute(&graph, &Parameters::new()).unwrap();

        // Routing through 1 caps the largest edge at 5, beating the
        // direct weight-7 edge.
        let row = lookup(&result, 0, 2).unwrap();
        assert_eq!(row[2], Value::Int64(5));
        assert_eq!(row[3], Value::Int64(1));
    }

    #[test]
    fn test_shape_precondition_propagates() {
        let graph = MatrixGraph::undirected_weighted(3);
        let err = FloydWarshallAlgorithm
            .execute(&graph, &Parameters::new())
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "floyd_warshall requires a directed, weighted graph"
        );
    }
}
