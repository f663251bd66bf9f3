//! Single-source shortest paths.
//!
//! Every algorithm here is built on the same [`relax`] primitive:
//! distance estimates only ever decrease, until no edge can improve
//! its head. The algorithms differ in the order they offer edges for
//! relaxation:
//!
//! - [`bellman_ford`] - every edge, `rows - 1` full passes
//! - [`spfa`] - only edges out of freshly improved vertices
//! - [`dijkstra`] - edges out of the nearest unsettled vertex
//! - [`dag_shortest_paths`] - edges in topological order, once
//!
//! Bellman-Ford and SPFA tolerate negative weights and report a
//! reachable negative cycle as `Ok(None)`.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use hodos_common::{Distance, Error, Result, VertexId};
use serde::{Deserialize, Serialize};

use crate::graph::MatrixGraph;

use super::require_weighted_digraph;
use super::traversal::VertexColor;

/// Per-vertex shortest-path record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub distance: Distance,
    pub predecessor: Option<VertexId>,
}

impl PathNode {
    /// The state every vertex starts a run in.
    #[must_use]
    pub const fn unreached() -> Self {
        Self {
            distance: Distance::Infinite,
            predecessor: None,
        }
    }
}

impl Default for PathNode {
    fn default() -> Self {
        Self::unreached()
    }
}

/// Result of one single-source run: the source plus one node per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    nodes: Vec<PathNode>,
}

impl ShortestPaths {
    fn new(source: VertexId, rows: usize) -> Self {
        let mut nodes = vec![PathNode::unreached(); rows];
        if source < rows {
            nodes[source].distance = Distance::ZERO;
        }
        Self { source, nodes }
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, vertex: VertexId) -> Option<&PathNode> {
        self.nodes.get(vertex)
    }

    /// Distance of `vertex`; out-of-range reads as Infinite.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.nodes
            .get(vertex)
            .map_or(Distance::Infinite, |n| n.distance)
    }

    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.nodes.get(vertex).and_then(|n| n.predecessor)
    }

    /// The full distance array, in vertex order.
    #[must_use]
    pub fn distances(&self) -> Vec<Distance> {
        self.nodes.iter().map(|n| n.distance).collect()
    }
}

/// Offers the edge `from -> to` for relaxation.
///
/// Improves `to`'s estimate through `from` when the detour is strictly
/// shorter, recording `from` as the predecessor. Arithmetic saturates,
/// and an Infinite source estimate never improves anything.
pub fn relax(nodes: &mut [PathNode], from: VertexId, to: VertexId, weight: i64) -> bool {
    let candidate = nodes[from].distance.saturating_add(weight);
    if candidate < nodes[to].distance {
        nodes[to].distance = candidate;
        nodes[to].predecessor = Some(from);
        true
    } else {
        false
    }
}

fn has_improvable_edge(graph: &MatrixGraph, nodes: &[PathNode]) -> bool {
    graph
        .edges()
        .any(|edge| nodes[edge.from].distance.saturating_add(edge.weight) < nodes[edge.to].distance)
}

/// Bellman-Ford from `source`.
///
/// Relaxes every edge in up to `rows - 1` full passes, stopping early
/// once a pass changes nothing. A final pass then decides the outcome:
/// any still-improvable edge means a negative cycle is reachable from
/// the source and the run yields `Ok(None)` instead of distances.
pub fn bellman_ford(graph: &MatrixGraph, source: VertexId) -> Result<Option<ShortestPaths>> {
    graph.check_vertex(source)?;
    let mut result = ShortestPaths::new(source, graph.rows());
    for _ in 1..graph.rows() {
        let mut changed = false;
        for edge in graph.edges() {
            if relax(&mut result.nodes, edge.from, edge.to, edge.weight) {
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    if has_improvable_edge(graph, &result.nodes) {
        tracing::debug!("negative weight cycle reachable from source {}", source);
        return Ok(None);
    }
    Ok(Some(result))
}

/// Queue-optimized Bellman-Ford from `source`.
///
/// Keeps a work queue of vertices whose estimate just improved and
/// only rescans their rows, deduplicating vertices already queued.
/// One vertex re-entering the queue `rows` times can only be riding a
/// negative cycle; the drain stops there and the same final edge pass
/// as [`bellman_ford`] decides between distances and `Ok(None)`.
pub fn spfa(graph: &MatrixGraph, source: VertexId) -> Result<Option<ShortestPaths>> {
    graph.check_vertex(source)?;
    let rows = graph.rows();
    let mut result = ShortestPaths::new(source, rows);
    let mut in_queue = vec![false; rows];
    let mut enqueues = vec![0usize; rows];
    let mut queue = VecDeque::with_capacity(rows);

    queue.push_back(source);
    in_queue[source] = true;
    enqueues[source] = 1;

    'drain: while let Some(u) = queue.pop_front() {
        in_queue[u] = false;
        for edge in graph.edges_from(u) {
            if relax(&mut result.nodes, u, edge.to, edge.weight) && !in_queue[edge.to] {
                enqueues[edge.to] += 1;
                if enqueues[edge.to] >= rows {
                    break 'drain;
                }
                in_queue[edge.to] = true;
                queue.push_back(edge.to);
            }
        }
    }

    if has_improvable_edge(graph, &result.nodes) {
        tracing::debug!("negative weight cycle reachable from source {}", source);
        return Ok(None);
    }
    Ok(Some(result))
}

/// Heap entry ordered so the smallest distance pops first, ties broken
/// by vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    cost: Distance,
    vertex: VertexId,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `source`, for directed, weighted graphs.
///
/// A binary heap with lazy deletion replaces decrease-key: every
/// improvement pushes a fresh entry, and stale entries are skipped on
/// extraction by comparing against the current estimate. Negative
/// weights are not detected here; they silently break the settled
/// property.
pub fn dijkstra(graph: &MatrixGraph, source: VertexId) -> Result<ShortestPaths> {
    require_weighted_digraph(graph, "dijkstra")?;
    graph.check_vertex(source)?;
    let mut result = ShortestPaths::new(source, graph.rows());
    let mut heap = BinaryHeap::with_capacity(graph.rows());
    heap.push(State {
        cost: Distance::ZERO,
        vertex: source,
    });
    while let Some(State { cost, vertex }) = heap.pop() {
        if cost > result.nodes[vertex].distance {
            continue;
        }
        for edge in graph.edges_from(vertex) {
            if relax(&mut result.nodes, vertex, edge.to, edge.weight) {
                heap.push(State {
                    cost: result.nodes[edge.to].distance,
                    vertex: edge.to,
                });
            }
        }
    }
    Ok(result)
}

/// Shortest paths on a directed acyclic graph.
///
/// Computes a topological order by depth-first finish times, then
/// relaxes each vertex's row exactly once in that order. A back edge
/// during the sort is a precondition violation.
pub fn dag_shortest_paths(graph: &MatrixGraph, source: VertexId) -> Result<ShortestPaths> {
    graph.check_vertex(source)?;
    let Some(order) = topological_order(graph) else {
        return Err(Error::GraphShape {
            algorithm: "dag_shortest_paths",
            requirement: "an acyclic graph",
        });
    };
    let mut result = ShortestPaths::new(source, graph.rows());
    for &u in &order {
        for edge in graph.edges_from(u) {
            relax(&mut result.nodes, u, edge.to, edge.weight);
        }
    }
    Ok(result)
}

/// Present vertices in topological order, or `None` on a cycle.
fn topological_order(graph: &MatrixGraph) -> Option<Vec<VertexId>> {
    let rows = graph.rows();
    let mut color = vec![VertexColor::White; rows];
    let mut order = Vec::with_capacity(rows);

    for root in 0..rows {
        if !graph.contains_vertex(root) || color[root] != VertexColor::White {
            continue;
        }
        color[root] = VertexColor::Gray;
        let mut stack = vec![(root, 0usize)];
        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let mut next = None;
            while frame.1 < rows {
                let to = frame.1;
                frame.1 += 1;
                if !graph.has_edge(u, to) {
                    continue;
                }
                match color[to] {
                    VertexColor::White => {
                        next = Some(to);
                        break;
                    }
                    // an edge back into the active path closes a cycle
                    VertexColor::Gray => return None,
                    VertexColor::Black => {}
                }
            }
            match next {
                Some(to) => {
                    color[to] = VertexColor::Gray;
                    stack.push((to, 0));
                }
                None => {
                    color[u] = VertexColor::Black;
                    order.push(u);
                    stack.pop();
                }
            }
        }
    }
    order.reverse();
    Some(order)
}
