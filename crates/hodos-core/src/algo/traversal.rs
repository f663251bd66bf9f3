//! Breadth-first and depth-first search.
//!
//! Both traversals fill one [`VisitRecord`] per vertex slot and return
//! them as a [`Traversal`]. Neighbor scans follow the matrix row in
//! ascending target order, so every run over an unchanged graph is
//! deterministic. [`dfs`] and [`dfs_iterative`] are two executions of
//! the same search and produce identical records.

use std::collections::VecDeque;

use hodos_common::{Distance, Result, VertexId};
use serde::{Deserialize, Serialize};

use crate::graph::MatrixGraph;

/// Traversal state of a vertex.
///
/// BFS only moves vertices from `White` to `Gray`. DFS walks the full
/// chain: `Gray` while the vertex is on the path being explored,
/// `Black` once its subtree is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexColor {
    /// Not yet discovered.
    White,
    /// Discovered.
    Gray,
    /// Finished (DFS only).
    Black,
}

/// Per-vertex traversal output.
///
/// `distance` carries hop counts under BFS and the discovery timestamp
/// under DFS; `finish` is only set by DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub color: VertexColor,
    pub distance: Distance,
    pub predecessor: Option<VertexId>,
    pub finish: Option<usize>,
}

impl VisitRecord {
    /// The state every vertex starts a run in.
    #[must_use]
    pub const fn unvisited() -> Self {
        Self {
            color: VertexColor::White,
            distance: Distance::Infinite,
            predecessor: None,
            finish: None,
        }
    }
}

impl Default for VisitRecord {
    fn default() -> Self {
        Self::unvisited()
    }
}

/// Result of one traversal run: the source plus one record per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    source: VertexId,
    records: Vec<VisitRecord>,
}

impl Traversal {
    #[inline]
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, vertex: VertexId) -> Option<&VisitRecord> {
        self.records.get(vertex)
    }

    /// Distance of `vertex`; out-of-range reads as Infinite.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.records
            .get(vertex)
            .map_or(Distance::Infinite, |r| r.distance)
    }

    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.records.get(vertex).and_then(|r| r.predecessor)
    }

    /// Whether the run reached `vertex`.
    #[must_use]
    pub fn discovered(&self, vertex: VertexId) -> bool {
        self.records
            .get(vertex)
            .is_some_and(|r| r.color != VertexColor::White)
    }
}

/// Breadth-first search from `source`.
///
/// Fills hop-count distances and the shortest-hop predecessor tree for
/// everything reachable from `source`. Vertices move from `White` to
/// `Gray` when enqueued and never change again.
pub fn bfs(graph: &MatrixGraph, source: VertexId) -> Result<Traversal> {
    graph.check_vertex(source)?;
    let mut records = vec![VisitRecord::unvisited(); graph.rows()];
    records[source].color = VertexColor::Gray;
    records[source].distance = Distance::ZERO;

    let mut queue = VecDeque::with_capacity(graph.rows());
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        let next = records[u].distance.saturating_add(1);
        for edge in graph.edges_from(u) {
            let record = &mut records[edge.to];
            if record.color == VertexColor::White {
                record.color = VertexColor::Gray;
                record.distance = next;
                record.predecessor = Some(u);
                queue.push_back(edge.to);
            }
        }
    }
    Ok(Traversal { source, records })
}

/// Depth-first search from `source`, then over the rest of the graph.
///
/// After the source tree completes, every still-white present vertex
/// is taken as a new root in ascending index order, so the records
/// cover a full depth-first forest. One timestamp counter, starting at
/// 0, drives both the discovery time (stored in `distance`) and the
/// finish time.
pub fn dfs(graph: &MatrixGraph, source: VertexId) -> Result<Traversal> {
    graph.check_vertex(source)?;
    let mut records = vec![VisitRecord::unvisited(); graph.rows()];
    let mut time = 0usize;
    visit(graph, &mut records, &mut time, source);
    for root in 0..graph.rows() {
        if graph.contains_vertex(root) && records[root].color == VertexColor::White {
            visit(graph, &mut records, &mut time, root);
        }
    }
    Ok(Traversal { source, records })
}

fn visit(graph: &MatrixGraph, records: &mut [VisitRecord], time: &mut usize, u: VertexId) {
    records[u].color = VertexColor::Gray;
    records[u].distance = Distance::Finite(*time as i64);
    *time += 1;
    for edge in graph.edges_from(u) {
        if records[edge.to].color == VertexColor::White {
            records[edge.to].predecessor = Some(u);
            visit(graph, records, time, edge.to);
        }
    }
    records[u].color = VertexColor::Black;
    records[u].finish = Some(*time);
    *time += 1;
}

/// Explicit-stack form of [`dfs`].
///
/// Produces records identical to the recursive form but bounds its
/// memory by the stack vector, so deep graphs cannot overflow the call
/// stack.
pub fn dfs_iterative(graph: &MatrixGraph, source: VertexId) -> Result<Traversal> {
    graph.check_vertex(source)?;
    let mut records = vec![VisitRecord::unvisited(); graph.rows()];
    let mut time = 0usize;
    visit_with_stack(graph, &mut records, &mut time, source);
    for root in 0..graph.rows() {
        if graph.contains_vertex(root) && records[root].color == VertexColor::White {
            visit_with_stack(graph, &mut records, &mut time, root);
        }
    }
    Ok(Traversal { source, records })
}

fn visit_with_stack(
    graph: &MatrixGraph,
    records: &mut [VisitRecord],
    time: &mut usize,
    root: VertexId,
) {
    records[root].color = VertexColor::Gray;
    records[root].distance = Distance::Finite(*time as i64);
    *time += 1;

    // Each frame is (vertex, next target index to scan in its row).
    let mut stack = vec![(root, 0usize)];
    while let Some(frame) = stack.last_mut() {
        let u = frame.0;
        let mut next = None;
        while frame.1 < graph.rows() {
            let to = frame.1;
            frame.1 += 1;
            if graph.has_edge(u, to) && records[to].color == VertexColor::White {
                next = Some(to);
                break;
            }
        }
        match next {
            Some(to) => {
                records[to].color = VertexColor::Gray;
                records[to].distance = Distance::Finite(*time as i64);
                records[to].predecessor = Some(u);
                *time += 1;
                stack.push((to, 0));
            }
            None => {
                records[u].color = VertexColor::Black;
                records[u].finish = Some(*time);
                *time += 1;
                stack.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0→1, 0→2, 0→3, 2→3, 2→6, 3→6, 3→7, 1→4, 1→5, 4→8.
    fn branching_graph() -> MatrixGraph {
        let mut graph = MatrixGraph::directed(9);
        for (u, v) in [
            (0, 1),
            (0, 2),
            (0, 3),
            (2, 3),
            (2, 6),
            (3, 6),
            (3, 7),
            (1, 4),
            (1, 5),
            (4, 8),
        ] {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    // --- bfs ---

    #[test]
    fn test_bfs_hop_counts() {
        let run = bfs(&branching_graph(), 0).unwrap();
        assert_eq!(run.source(), 0);
        assert_eq!(run.distance(0), Distance::Finite(0));
        assert_eq!(run.distance(1), Distance::Finite(1));
        assert_eq!(run.distance(3), Distance::Finite(1));
        assert_eq!(run.distance(6), Distance::Finite(2));
        assert_eq!(run.distance(8), Distance::Finite(3));
    }

    #[test]
    fn test_bfs_predecessors_are_first_discoverers() {
        let run = bfs(&branching_graph(), 0).unwrap();
        assert_eq!(run.predecessor(0), None);
        assert_eq!(run.predecessor(1), Some(0));
        // 6 is reachable through 2 and 3; 2 dequeues first
        assert_eq!(run.predecessor(6), Some(2));
        assert_eq!(run.predecessor(8), Some(4));
    }

    #[test]
    fn test_bfs_uses_two_states() {
        let run = bfs(&branching_graph(), 0).unwrap();
        for record in run.records() {
            assert_ne!(record.color, VertexColor::Black);
            assert_eq!(record.finish, None);
        }
    }

    #[test]
    fn test_bfs_unreached_stays_white_and_infinite() {
        let run = bfs(&branching_graph(), 1).unwrap();
        assert!(!run.discovered(0));
        assert_eq!(run.distance(2), Distance::Infinite);
        assert_eq!(run.predecessor(3), None);
        assert!(run.discovered(8));
    }

    #[test]
    fn test_bfs_source_out_of_range() {
        let graph = MatrixGraph::directed(3);
        assert!(bfs(&graph, 3).is_err());
    }

    // --- dfs ---

    #[test]
    fn test_dfs_predecessor_tree() {
        let run = dfs(&branching_graph(), 0).unwrap();
        assert_eq!(run.predecessor(1), Some(0));
        assert_eq!(run.predecessor(4), Some(1));
        assert_eq!(run.predecessor(8), Some(4));
        // 3 is taken through 2, not through the direct edge 0→3
        assert_eq!(run.predecessor(3), Some(2));
        assert_eq!(run.predecessor(6), Some(3));
    }

    #[test]
    fn test_dfs_timestamps() {
        let run = dfs(&branching_graph(), 0).unwrap();
        // one counter drives discovery and finish, starting at 0
        assert_eq!(run.distance(0), Distance::Finite(0));
        assert_eq!(run.record(0).unwrap().finish, Some(17));
        assert_eq!(run.distance(8), Distance::Finite(3));
        assert_eq!(run.record(8).unwrap().finish, Some(4));

        let mut seen = vec![false; 18];
        for record in run.records() {
            let Distance::Finite(d) = record.distance else {
                panic!("vertex left undiscovered");
            };
            let f = record.finish.unwrap();
            assert!((d as usize) < f);
            seen[d as usize] = true;
            seen[f] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_dfs_covers_other_components() {
        let mut graph = MatrixGraph::directed(6);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(3, 4).unwrap();
        // 2 and 5 stay holes
        let run = dfs(&graph, 0).unwrap();
        assert!(run.discovered(3));
        assert!(run.discovered(4));
        assert_eq!(run.predecessor(3), None);
        assert!(!run.discovered(2));
        assert!(!run.discovered(5));
    }

    #[test]
    fn test_dfs_all_vertices_finish_black() {
        let run = dfs(&branching_graph(), 4).unwrap();
        for vertex in 0..9 {
            assert_eq!(run.record(vertex).unwrap().color, VertexColor::Black);
        }
    }

    // --- iterative form ---

    #[test]
    fn test_dfs_iterative_matches_recursive() {
        let graph = branching_graph();
        for source in 0..9 {
            let recursive = dfs(&graph, source).unwrap();
            let iterative = dfs_iterative(&graph, source).unwrap();
            assert_eq!(recursive, iterative);
        }
    }

    #[test]
    fn test_dfs_iterative_matches_recursive_with_holes() {
        let mut graph = MatrixGraph::directed(7);
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(2, 5).unwrap();
        graph.add_edge(5, 0).unwrap();
        graph.add_edge(6, 6).unwrap();
        assert_eq!(
            dfs(&graph, 5).unwrap(),
            dfs_iterative(&graph, 5).unwrap()
        );
    }

    #[test]
    fn test_dfs_iterative_deep_chain() {
        let mut graph = MatrixGraph::directed(2_000);
        for v in 0..1_999 {
            graph.add_edge(v, v + 1).unwrap();
        }
        let run = dfs_iterative(&graph, 0).unwrap();
        assert_eq!(run.distance(1_999), Distance::Finite(1_999));
        assert_eq!(run.record(0).unwrap().finish, Some(3_999));
    }

    #[test]
    fn test_rerun_is_identical() {
        let graph = branching_graph();
        assert_eq!(bfs(&graph, 0).unwrap(), bfs(&graph, 0).unwrap());
        assert_eq!(dfs(&graph, 0).unwrap(), dfs(&graph, 0).unwrap());
    }
}
