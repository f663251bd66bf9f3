//! Maximum bipartite matching.
//!
//! Three algorithms over the same contract: the caller names the left
//! and right vertex ranges, edges are scanned from the left side, and
//! the result is a symmetric partner table. They agree on cardinality:
//!
//! - [`kuhn`] - one augmenting search per left vertex
//! - [`hopcroft_karp`] - phases of shortest augmenting paths
//! - [`flow_matching`] - reduction to unit-capacity blocking flow
//!
//! Augmenting searches run on an explicit work stack; tentative edge
//! flips are kept on a trail and committed only when a search reaches
//! a free right vertex.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Range;

use hodos_common::{Error, Result, VertexId};

use crate::graph::{FlowNetwork, MatrixGraph};

/// A bipartite matching as a symmetric partner table.
///
/// `partner(l) == Some(r)` implies `partner(r) == Some(l)`. Prints one
/// matched pair per line, ascending left vertex:
///
/// ```text
/// {
///   1 -> 6
///   2 -> 8
///   3 -> 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    left: Range<usize>,
    pairs: Vec<Option<VertexId>>,
    size: usize,
}

impl Matching {
    fn from_pairs(left: Range<usize>, pairs: Vec<Option<VertexId>>) -> Self {
        let size = left.clone().filter(|&l| pairs[l].is_some()).count();
        Self { left, pairs, size }
    }

    /// Number of matched pairs.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The partner of `vertex`, on either side of the partition.
    #[must_use]
    pub fn partner(&self, vertex: VertexId) -> Option<VertexId> {
        self.pairs.get(vertex).copied().flatten()
    }

    /// Matched `(left, right)` pairs in ascending left order.
    pub fn pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.left
            .clone()
            .filter_map(move |l| self.pairs[l].map(|r| (l, r)))
    }
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (l, r) in self.pairs() {
            writeln!(f, "  {l} -> {r}")?;
        }
        write!(f, "}}")
    }
}

fn check_partition(graph: &MatrixGraph, left: &Range<usize>, right: &Range<usize>) -> Result<()> {
    let rows = graph.rows();
    if left.end > rows || right.end > rows {
        return Err(Error::InvalidPartition(format!(
            "ranges {left:?} and {right:?} must lie within 0..{rows}"
        )));
    }
    if !left.is_empty() && !right.is_empty() && left.start < right.end && right.start < left.end {
        return Err(Error::InvalidPartition(format!(
            "ranges {left:?} and {right:?} overlap"
        )));
    }
    Ok(())
}

/// Kuhn's algorithm: one augmenting-path search per left vertex.
///
/// Each search carries a fresh `seen` bitset over the rights, so a
/// right rejected once in a search is never retried within it.
pub fn kuhn(graph: &MatrixGraph, left: Range<usize>, right: Range<usize>) -> Result<Matching> {
    check_partition(graph, &left, &right)?;
    let mut pairs: Vec<Option<VertexId>> = vec![None; graph.rows()];
    for l in left.clone() {
        kuhn_augment(graph, &right, &mut pairs, l);
    }
    Ok(Matching::from_pairs(left, pairs))
}

fn kuhn_augment(
    graph: &MatrixGraph,
    right: &Range<usize>,
    pairs: &mut [Option<VertexId>],
    root: VertexId,
) -> bool {
    let mut seen = vec![false; pairs.len()];
    // each frame is (left vertex, next right index to scan)
    let mut stack = vec![(root, right.start)];
    let mut trail: Vec<(VertexId, VertexId)> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let l = frame.0;
        let mut chosen = None;
        while frame.1 < right.end {
            let r = frame.1;
            frame.1 += 1;
            if !seen[r] && graph.has_edge(l, r) {
                chosen = Some(r);
                break;
            }
        }
        let Some(r) = chosen else {
            // no right left to try through this vertex
            stack.pop();
            trail.pop();
            continue;
        };
        seen[r] = true;
        match pairs[r] {
            None => {
                // free right: flip every tentative edge on the trail
                pairs[l] = Some(r);
                pairs[r] = Some(l);
                for &(tl, tr) in &trail {
                    pairs[tl] = Some(tr);
                    pairs[tr] = Some(tl);
                }
                return true;
            }
            Some(owner) => {
                trail.push((l, r));
                stack.push((owner, right.start));
            }
        }
    }
    false
}

/// Hopcroft-Karp: BFS layering from the free lefts, then one
/// level-respecting augmenting search per free left, repeated until no
/// layer reaches a free right.
pub fn hopcroft_karp(
    graph: &MatrixGraph,
    left: Range<usize>,
    right: Range<usize>,
) -> Result<Matching> {
    check_partition(graph, &left, &right)?;
    let rows = graph.rows();
    let mut pairs: Vec<Option<VertexId>> = vec![None; rows];
    let mut phases = 0u32;

    loop {
        // BFS phase: level every reachable left, stopping at the
        // shallowest layer adjacent to a free right
        let mut level: Vec<Option<u32>> = vec![None; rows];
        let mut queue = VecDeque::new();
        for l in left.clone() {
            if pairs[l].is_none() {
                level[l] = Some(0);
                queue.push_back(l);
            }
        }
        let mut free_depth = None;
        while let Some(l) = queue.pop_front() {
            let Some(depth) = level[l] else { continue };
            if free_depth.is_some_and(|fd| depth >= fd) {
                continue;
            }
            for r in right.clone() {
                if !graph.has_edge(l, r) {
                    continue;
                }
                match pairs[r] {
                    None => {
                        if free_depth.is_none() {
                            free_depth = Some(depth);
                        }
                    }
                    Some(owner) => {
                        if level[owner].is_none() {
                            level[owner] = Some(depth + 1);
                            queue.push_back(owner);
                        }
                    }
                }
            }
        }
        let Some(free_depth) = free_depth else { break };
        phases += 1;

        // DFS phase: vertex-disjoint shortest augmenting paths
        for l in left.clone() {
            if pairs[l].is_none() && level[l] == Some(0) {
                hk_augment(graph, &right, &mut pairs, &mut level, free_depth, l);
            }
        }
    }
    tracing::debug!("hopcroft-karp finished after {} phases", phases);
    Ok(Matching::from_pairs(left, pairs))
}

fn hk_augment(
    graph: &MatrixGraph,
    right: &Range<usize>,
    pairs: &mut [Option<VertexId>],
    level: &mut [Option<u32>],
    free_depth: u32,
    root: VertexId,
) -> bool {
    let mut stack = vec![(root, right.start)];
    let mut trail: Vec<(VertexId, VertexId)> = Vec::new();

    while let Some(frame) = stack.last_mut() {
        let l = frame.0;
        let Some(dl) = level[l] else {
            stack.pop();
            trail.pop();
            continue;
        };
        let mut advance = None;
        while frame.1 < right.end {
            let r = frame.1;
            frame.1 += 1;
            if !graph.has_edge(l, r) {
                continue;
            }
            match pairs[r] {
                None => {
                    // only paths of the shortest length may augment
                    if dl == free_depth {
                        advance = Some((r, None));
                        break;
                    }
                }
                Some(owner) => {
                    if level[owner] == Some(dl + 1) {
                        advance = Some((r, Some(owner)));
                        break;
                    }
                }
            }
        }
        match advance {
            Some((r, None)) => {
                pairs[l] = Some(r);
                pairs[r] = Some(l);
                for &(tl, tr) in &trail {
                    pairs[tl] = Some(tr);
                    pairs[tr] = Some(tl);
                }
                // the path's lefts may not be reused this phase
                for &(pl, _) in &stack {
                    level[pl] = None;
                }
                return true;
            }
            Some((r, Some(owner))) => {
                trail.push((l, r));
                stack.push((owner, right.start));
            }
            None => {
                level[l] = None;
                stack.pop();
                trail.pop();
            }
        }
    }
    false
}

/// Matching by reduction to maximum flow.
///
/// Builds a unit-capacity [`FlowNetwork`] with a super source at index
/// `rows` and a super sink at `rows + 1`, then runs Dinic-style phases
/// (BFS level graph, current-arc blocking pushes) and reads the
/// matched pairs back from the saturated left-to-right arcs.
pub fn flow_matching(
    graph: &MatrixGraph,
    left: Range<usize>,
    right: Range<usize>,
) -> Result<Matching> {
    check_partition(graph, &left, &right)?;
    let rows = graph.rows();
    let source = rows;
    let sink = rows + 1;
    let mut network = FlowNetwork::new(rows + 2);
    for l in left.clone() {
        for r in right.clone() {
            if graph.has_edge(l, r) {
                network.add_edge(l, r, 1)?;
            }
        }
    }
    for l in left.clone() {
        network.add_edge(source, l, 1)?;
    }
    for r in right.clone() {
        network.add_edge(r, sink, 1)?;
    }

    let mut total = 0i64;
    while let Some(levels) = flow_levels(&network, source, sink) {
        let mut cursor = vec![0usize; network.rows()];
        loop {
            let pushed = blocking_push(&mut network, source, sink, &levels, &mut cursor, i64::MAX)?;
            if pushed == 0 {
                break;
            }
            total += pushed;
        }
    }
    tracing::debug!("flow matching pushed {} units", total);

    let mut pairs: Vec<Option<VertexId>> = vec![None; rows];
    for l in left.clone() {
        for r in right.clone() {
            if network.flow(l, r) > 0 {
                pairs[l] = Some(r);
                pairs[r] = Some(l);
            }
        }
    }
    Ok(Matching::from_pairs(left, pairs))
}

/// Levels every vertex reachable through residual arcs; `None` when
/// the sink is not.
fn flow_levels(
    network: &FlowNetwork,
    source: VertexId,
    sink: VertexId,
) -> Option<Vec<Option<u32>>> {
    let mut levels = vec![None; network.rows()];
    levels[source] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        let Some(du) = levels[u] else { continue };
        for v in network.residual_neighbors(u) {
            if levels[v].is_none() {
                levels[v] = Some(du + 1);
                queue.push_back(v);
            }
        }
    }
    levels[sink].is_some().then_some(levels)
}

/// Pushes one unit-path of flow along level-increasing residual arcs.
///
/// `cursor[u]` remembers the first arc out of `u` not yet proven dead,
/// so a phase never rescans failed arcs. Recursion depth is bounded by
/// the level of the sink.
fn blocking_push(
    network: &mut FlowNetwork,
    u: VertexId,
    sink: VertexId,
    levels: &[Option<u32>],
    cursor: &mut [usize],
    limit: i64,
) -> Result<i64> {
    if u == sink {
        return Ok(limit);
    }
    let Some(du) = levels[u] else {
        return Ok(0);
    };
    while cursor[u] < network.rows() {
        let v = cursor[u];
        let residual = network.residual_capacity(u, v);
        if residual > 0 && levels[v] == Some(du + 1) {
            let pushed = blocking_push(network, v, sink, levels, cursor, limit.min(residual))?;
            if pushed > 0 {
                network.add_flow(u, v, pushed)?;
                return Ok(pushed);
            }
        }
        cursor[u] += 1;
    }
    Ok(0)
}
