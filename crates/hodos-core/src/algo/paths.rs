//! Path reconstruction over predecessor trees.
//!
//! Traversal and shortest-path runs both leave one optional
//! predecessor per vertex slot; [`PredecessorTree`] abstracts over the
//! two so the walk-backwards logic lives in one place. The string and
//! array renderings are stable output formats.

use hodos_common::VertexId;

use super::sssp::ShortestPaths;
use super::traversal::Traversal;

/// A per-slot predecessor record left behind by a search.
pub trait PredecessorTree {
    /// Number of vertex slots the run covered.
    fn len(&self) -> usize;

    /// Whether the run reached `vertex` at all.
    fn reached(&self, vertex: VertexId) -> bool;

    /// Recorded predecessor of `vertex`.
    fn predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PredecessorTree for Traversal {
    fn len(&self) -> usize {
        self.records().len()
    }

    fn reached(&self, vertex: VertexId) -> bool {
        self.discovered(vertex)
    }

    fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        Traversal::predecessor(self, vertex)
    }
}

impl PredecessorTree for ShortestPaths {
    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn reached(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_finite()
    }

    fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        ShortestPaths::predecessor(self, vertex)
    }
}

/// Walks predecessors backward from `end` until `start`.
///
/// Returns `None` when either endpoint is out of range, `end` was
/// never reached, or the walk runs out of predecessors before arriving
/// at `start`.
pub fn reconstruct_path(
    tree: &impl PredecessorTree,
    start: VertexId,
    end: VertexId,
) -> Option<Vec<VertexId>> {
    if start >= tree.len() || end >= tree.len() || !tree.reached(end) {
        return None;
    }
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = tree.predecessor(current)?;
        path.push(current);
        // a well-formed tree never yields more hops than slots
        if path.len() > tree.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// The path as vertex indices, or the single-element sentinel `[-1]`
/// when no path exists.
#[must_use]
pub fn path_array(tree: &impl PredecessorTree, start: VertexId, end: VertexId) -> Vec<i64> {
    match reconstruct_path(tree, start, end) {
        Some(path) => path.into_iter().map(|v| v as i64).collect(),
        None => vec![-1],
    }
}

/// The path as `"v0 -> v1 -> ... -> vk"`, or the no-path message.
#[must_use]
pub fn path_string(tree: &impl PredecessorTree, start: VertexId, end: VertexId) -> String {
    match reconstruct_path(tree, start, end) {
        Some(path) => path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> "),
        None => format!("No path exists from {start} to {end}"),
    }
}

/// Path rendering atop a run that may have hit a negative cycle.
///
/// Bellman-Ford, SPFA, and Johnson's signal a reachable negative cycle
/// with `None`; printing that outcome yields a diagnostic line instead
/// of a panic.
#[must_use]
pub fn sssp_path_string(outcome: &Option<ShortestPaths>, start: VertexId, end: VertexId) -> String {
    match outcome {
        Some(run) => path_string(run, start, end),
        None => "Negative weight cycle detected".to_string(),
    }
}
