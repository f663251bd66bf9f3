//! All-pairs shortest paths.
//!
//! Four routes to the same `rows x rows` table, plus two relatives:
//!
//! - [`floyd_warshall`] - the cubic dynamic program, tolerant of
//!   negative cycles (they surface on the diagonal)
//! - [`johnson`] - reweighting plus per-vertex Dijkstra, the sparse
//!   alternative
//! - [`repeated_squaring`] - min-plus matrix self-composition
//! - [`transitive_closure`] - the boolean variant
//! - [`maximin`] - bottleneck paths, minimizing the largest edge
//!
//! On a negative-cycle-free directed weighted graph the first three
//! produce identical distance matrices.

use hodos_common::{Distance, Error, Result, VertexId};

use crate::graph::MatrixGraph;

use super::require_weighted_digraph;
use super::sssp::{dijkstra, spfa};

/// Distance and predecessor matrices from one all-pairs run.
///
/// Cell `(i, j)` holds the best known distance from `i` to `j` and the
/// predecessor of `j` on that path. Both matrices are flat, row-major,
/// and bounds-tolerant on reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsResult {
    rows: usize,
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
}

impl AllPairsResult {
    fn new(rows: usize) -> Self {
        Self {
            rows,
            distances: vec![Distance::Infinite; rows * rows],
            predecessors: vec![None; rows * rows],
        }
    }

    #[inline]
    const fn idx(&self, from: VertexId, to: VertexId) -> usize {
        from * self.rows + to
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Distance from `from` to `to`; out-of-range reads as Infinite.
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> Distance {
        if from < self.rows && to < self.rows {
            self.distances[self.idx(from, to)]
        } else {
            Distance::Infinite
        }
    }

    /// Predecessor of `to` on the recorded path from `from`.
    #[must_use]
    pub fn predecessor(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        if from < self.rows && to < self.rows {
            self.predecessors[self.idx(from, to)]
        } else {
            None
        }
    }

    /// Whether any vertex reaches itself at negative cost.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.rows).any(|v| self.distances[self.idx(v, v)].is_negative())
    }

    /// Reconstructs the recorded path from `from` to `to` by walking
    /// the predecessor matrix backwards.
    #[must_use]
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        if from >= self.rows || to >= self.rows || self.distance(from, to).is_infinite() {
            return None;
        }
        let mut path = vec![to];
        let mut current = to;
        while current != from {
            current = self.predecessor(from, current)?;
            path.push(current);
            // a well-formed matrix never yields more hops than rows
            if path.len() > self.rows {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Row-major snapshot of the distance matrix.
    #[must_use]
    pub fn distance_matrix(&self) -> Vec<Vec<Distance>> {
        (0..self.rows)
            .map(|from| self.distances[from * self.rows..(from + 1) * self.rows].to_vec())
            .collect()
    }
}

/// Diagonal zero, direct edges, everything else Infinite.
fn seed_matrix(graph: &MatrixGraph) -> AllPairsResult {
    let rows = graph.rows();
    let mut result = AllPairsResult::new(rows);
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for v in 0..rows {
        result.distances[at(v, v)] = Distance::ZERO;
    }
    for edge in graph.edges() {
        // a negative self-loop beats the zero diagonal
        let cell = at(edge.from, edge.to);
        if Distance::Finite(edge.weight) < result.distances[cell] {
            result.distances[cell] = Distance::Finite(edge.weight);
            result.predecessors[cell] = Some(edge.from);
        }
    }
    result
}

/// Floyd-Warshall over a directed, weighted graph.
///
/// Grows the set of allowed intermediate vertices one at a time,
/// keeping the predecessor matrix in lock-step. Never fails on
/// negative cycles; they show up as negative diagonal entries
/// ([`AllPairsResult::has_negative_cycle`]).
pub fn floyd_warshall(graph: &MatrixGraph) -> Result<AllPairsResult> {
    require_weighted_digraph(graph, "floyd_warshall")?;
    let rows = graph.rows();
    let mut result = seed_matrix(graph);
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for k in 0..rows {
        for i in 0..rows {
            let dik = result.distances[at(i, k)];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..rows {
                let through = dik.plus(result.distances[at(k, j)]);
                if through < result.distances[at(i, j)] {
                    result.distances[at(i, j)] = through;
                    result.predecessors[at(i, j)] = result.predecessors[at(k, j)];
                }
            }
        }
    }
    Ok(result)
}

/// Johnson's algorithm: SPFA potentials, reweighting, Dijkstra from
/// every vertex.
///
/// Both the augmented graph (one virtual source wired to every index
/// at weight 0) and the reweighted graph are internal copies; the
/// caller's graph is never touched. A negative cycle found during the
/// potentials phase yields `Ok(None)`.
pub fn johnson(graph: &MatrixGraph) -> Result<Option<AllPairsResult>> {
    require_weighted_digraph(graph, "johnson")?;
    let rows = graph.rows();
    if rows == 0 {
        return Ok(Some(AllPairsResult::new(0)));
    }

    let mut augmented = MatrixGraph::directed_weighted(rows + 1);
    for edge in graph.edges() {
        augmented.add_edge_weighted(edge.from, edge.to, edge.weight)?;
    }
    for v in 0..rows {
        augmented.add_edge_weighted(rows, v, 0)?;
    }
    let Some(potentials) = spfa(&augmented, rows)? else {
        tracing::debug!("negative weight cycle, reweighting aborted");
        return Ok(None);
    };

    // h(v) <= h(u) + w(u, v) for every edge, so these stay
    // non-negative
    let mut reweighted = MatrixGraph::directed_weighted(rows);
    for edge in graph.edges() {
        if let (Distance::Finite(hu), Distance::Finite(hv)) = (
            potentials.distance(edge.from),
            potentials.distance(edge.to),
        ) {
            let weight = edge.weight.saturating_add(hu).saturating_sub(hv);
            reweighted.add_edge_weighted(edge.from, edge.to, weight)?;
        }
    }

    let mut result = AllPairsResult::new(rows);
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for source in 0..rows {
        let run = dijkstra(&reweighted, source)?;
        let Distance::Finite(hs) = potentials.distance(source) else {
            continue;
        };
        for v in 0..rows {
            if let (Distance::Finite(d), Distance::Finite(hv)) =
                (run.distance(v), potentials.distance(v))
            {
                result.distances[at(source, v)] =
                    Distance::Finite(d.saturating_add(hv).saturating_sub(hs));
                result.predecessors[at(source, v)] = run.predecessor(v);
            }
        }
    }
    Ok(Some(result))
}

/// Min-plus repeated squaring.
///
/// Treats the seeded matrix as paths of at most one edge and squares
/// it until the covered path length reaches `rows - 1`, composing the
/// predecessor matrix alongside.
pub fn repeated_squaring(graph: &MatrixGraph) -> Result<AllPairsResult> {
    require_weighted_digraph(graph, "repeated_squaring")?;
    let rows = graph.rows();
    let mut result = seed_matrix(graph);
    let mut span = 1usize;
    while span < rows.saturating_sub(1) {
        result = min_plus_square(&result);
        span *= 2;
    }
    Ok(result)
}

fn min_plus_square(current: &AllPairsResult) -> AllPairsResult {
    let rows = current.rows;
    let mut next = current.clone();
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for i in 0..rows {
        for j in 0..rows {
            for k in 0..rows {
                let through = current.distances[at(i, k)].plus(current.distances[at(k, j)]);
                if through < next.distances[at(i, j)] {
                    next.distances[at(i, j)] = through;
                    next.predecessors[at(i, j)] = current.predecessors[at(k, j)];
                }
            }
        }
    }
    next
}

/// Boolean reachability matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitiveClosure {
    rows: usize,
    reachable: Vec<bool>,
}

impl TransitiveClosure {
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Whether a path from `from` to `to` exists; out-of-range reads
    /// as false.
    #[must_use]
    pub fn reachable(&self, from: VertexId, to: VertexId) -> bool {
        from < self.rows && to < self.rows && self.reachable[from * self.rows + to]
    }

    /// Row-major snapshot of the reachability matrix.
    #[must_use]
    pub fn matrix(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|from| self.reachable[from * self.rows..(from + 1) * self.rows].to_vec())
            .collect()
    }
}

/// Transitive closure of a directed graph.
///
/// The Floyd-Warshall recurrence with OR/AND in place of min/plus.
/// Every vertex reaches itself.
pub fn transitive_closure(graph: &MatrixGraph) -> Result<TransitiveClosure> {
    if !graph.is_directed() {
        return Err(Error::GraphShape {
            algorithm: "transitive_closure",
            requirement: "a directed graph",
        });
    }
    let rows = graph.rows();
    let mut reachable = vec![false; rows * rows];
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for v in 0..rows {
        reachable[at(v, v)] = true;
    }
    for edge in graph.edges() {
        reachable[at(edge.from, edge.to)] = true;
    }
    for k in 0..rows {
        for i in 0..rows {
            if !reachable[at(i, k)] {
                continue;
            }
            for j in 0..rows {
                if reachable[at(k, j)] {
                    reachable[at(i, j)] = true;
                }
            }
        }
    }
    Ok(TransitiveClosure { rows, reachable })
}

/// Bottleneck shortest paths.
///
/// Minimizes the largest edge weight along a path instead of the sum:
/// `D[i][j] = min(D[i][j], max(D[i][k], D[k][j]))`, zero diagonal,
/// same predecessor update as [`floyd_warshall`].
pub fn maximin(graph: &MatrixGraph) -> Result<AllPairsResult> {
    require_weighted_digraph(graph, "maximin")?;
    let rows = graph.rows();
    let mut result = seed_matrix(graph);
    let at = |from: VertexId, to: VertexId| from * rows + to;
    for k in 0..rows {
        for i in 0..rows {
            let dik = result.distances[at(i, k)];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..rows {
                let through = dik.max(result.distances[at(k, j)]);
                if through < result.distances[at(i, j)] {
                    result.distances[at(i, j)] = through;
                    result.predecessors[at(i, j)] = result.predecessors[at(k, j)];
                }
            }
        }
    }
    Ok(result)
}
