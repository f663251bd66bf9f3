//! Bipartite matching wrappers.
//!
//! All three take the partition as four vertex-range parameters
//! (`left_start..left_end` and `right_start..right_end`, ends
//! exclusive) and report matched pairs as a two-column table.

use std::ops::Range;
use std::sync::OnceLock;

use hodos_common::{Result, Value};
use hodos_core::MatrixGraph;
use hodos_core::algo::matching::{self, Matching};

use super::super::{AlgorithmResult, GraphAlgorithm, ParameterDef, ParameterType, Parameters};
use super::require_vertex;

static PARTITION_PARAMS: OnceLock<Vec<ParameterDef>> = OnceLock::new();

fn partition_params() -> &'static [ParameterDef] {
    PARTITION_PARAMS.get_or_init(|| {
        vec![
            ParameterDef {
                name: "left_start".to_string(),
                description: "First left-side vertex index".to_string(),
                param_type: ParameterType::Vertex,
                required: true,
                default: None,
            },
            ParameterDef {
                name: "left_end".to_string(),
                description: "One past the last left-side vertex index".to_string(),
                param_type: ParameterType::Vertex,
                required: true,
                default: None,
            },
            ParameterDef {
                name: "right_start".to_string(),
                description: "First right-side vertex index".to_string(),
                param_type: ParameterType::Vertex,
                required: true,
                default: None,
            },
            ParameterDef {
                name: "right_end".to_string(),
                description: "One past the last right-side vertex index".to_string(),
                param_type: ParameterType::Vertex,
                required: true,
                default: None,
            },
        ]
    })
}

/// Reads the two side ranges out of the parameter bag.
fn partition(params: &Parameters) -> Result<(Range<usize>, Range<usize>)> {
    let left = require_vertex(params, "left_start")?..require_vertex(params, "left_end")?;
    let right = require_vertex(params, "right_start")?..require_vertex(params, "right_end")?;
    Ok((left, right))
}

/// Lays a matching out as one row per matched pair, ascending left.
fn matching_table(matching: &Matching) -> AlgorithmResult {
    let mut table = AlgorithmResult::new(vec!["left".to_string(), "right".to_string()]);
    for (l, r) in matching.pairs() {
        table.add_row(vec![Value::Int64(l as i64), Value::Int64(r as i64)]);
    }
    table
}

/// Kuhn wrapper for the algorithm registry.
pub struct KuhnAlgorithm;

impl GraphAlgorithm for KuhnAlgorithm {
    fn name(&self) -> &str {
        "kuhn"
    }

    fn description(&self) -> &str {
        "Maximum bipartite matching by per-vertex augmenting paths"
    }

    fn parameters(&self) -> &[ParameterDef] {
        partition_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let (left, right) = partition(params)?;
        let matching = matching::kuhn(graph, left, right)?;
        Ok(matching_table(&matching))
    }
}

/// Hopcroft-Karp wrapper for the algorithm registry.
pub struct HopcroftKarpAlgorithm;

impl GraphAlgorithm for HopcroftKarpAlgorithm {
    fn name(&self) -> &str {
        "hopcroft_karp"
    }

    fn description(&self) -> &str {
        "Maximum bipartite matching by layered phases of augmenting paths"
    }

    fn parameters(&self) -> &[ParameterDef] {
        partition_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let (left, right) = partition(params)?;
        let matching = matching::hopcroft_karp(graph, left, right)?;
        Ok(matching_table(&matching))
    }
}

/// Flow-reduction matching wrapper for the algorithm registry.
pub struct FlowMatchingAlgorithm;

impl GraphAlgorithm for FlowMatchingAlgorithm {
    fn name(&self) -> &str {
        "flow_matching"
    }

    fn description(&self) -> &str {
        "Maximum bipartite matching by reduction to unit-capacity max flow"
    }

    fn parameters(&self) -> &[ParameterDef] {
        partition_params()
    }

    fn execute(&self, graph: &MatrixGraph, params: &Parameters) -> Result<AlgorithmResult> {
        let (left, right) = partition(params)?;
        let matching = matching::flow_matching(graph, left, right)?;
        Ok(matching_table(&matching))
    }
}
