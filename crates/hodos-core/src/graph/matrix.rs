//! Dense adjacency-matrix graph storage.
//!
//! [`MatrixGraph`] keeps a square `rows x rows` matrix of optional edge
//! weights in one flat allocation, plus a presence bitset. A `None`
//! cell means "no edge here"; an index never touched by an edge write
//! is a hole, which occupies a row and a column but is not a vertex.
//! The two are deliberately distinct: neighbor scans skip both NIL
//! cells and edges whose target is a hole.

use hodos_common::{Error, Result, VertexId};
use serde::{Deserialize, Serialize};

/// Shape flags for a [`MatrixGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// When `false`, every edge write is mirrored to both cells.
    pub directed: bool,
    /// When `false`, every present cell stores weight 1.
    pub weighted: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: true,
        }
    }
}

impl GraphConfig {
    /// Sets the directed flag.
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets the weighted flag.
    #[must_use]
    pub const fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
}

/// A materialized edge read out of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: i64,
}

/// A dense adjacency-matrix graph.
///
/// Cell `(u, v)` holds the weight of the arc `u -> v`, or `None` when
/// there is no such arc. Undirected graphs mirror every write, so both
/// cells always agree. Unweighted graphs store weight 1 everywhere.
///
/// # Example
///
/// ```
/// use hodos_core::graph::MatrixGraph;
///
/// let mut graph = MatrixGraph::directed_weighted(4);
/// graph.add_edge_weighted(0, 1, 4)?;
/// graph.add_edge_weighted(1, 2, -2)?;
///
/// assert_eq!(graph.edge_weight(0, 1), Some(4));
/// assert!(graph.has_edge(1, 2));
/// assert!(!graph.contains_vertex(3)); // never touched: a hole
/// # Ok::<(), hodos_common::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    rows: usize,
    config: GraphConfig,
    cells: Vec<Option<i64>>,
    present: Vec<bool>,
}

impl MatrixGraph {
    /// Creates an empty graph with `rows` vertex slots.
    #[must_use]
    pub fn new(rows: usize, config: GraphConfig) -> Self {
        Self {
            rows,
            config,
            cells: vec![None; rows * rows],
            present: vec![false; rows],
        }
    }

    /// Directed, unweighted.
    #[must_use]
    pub fn directed(rows: usize) -> Self {
        Self::new(rows, GraphConfig::default().with_weighted(false))
    }

    /// Directed, weighted.
    #[must_use]
    pub fn directed_weighted(rows: usize) -> Self {
        Self::new(rows, GraphConfig::default())
    }

    /// Undirected, unweighted.
    #[must_use]
    pub fn undirected(rows: usize) -> Self {
        Self::new(
            rows,
            GraphConfig::default().with_directed(false).with_weighted(false),
        )
    }

    /// Undirected, weighted.
    #[must_use]
    pub fn undirected_weighted(rows: usize) -> Self {
        Self::new(rows, GraphConfig::default().with_directed(false))
    }

    /// Matrix edge length (vertex slots, holes included).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.config.directed
    }

    #[inline]
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.config.weighted
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GraphConfig {
        self.config
    }

    /// Validates a vertex index against the matrix edge.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex < self.rows {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                rows: self.rows,
            })
        }
    }

    #[inline]
    fn cell(&self, from: VertexId, to: VertexId) -> usize {
        from * self.rows + to
    }

    /// Adds an edge with weight 1, the only weight an unweighted graph
    /// carries. Undirected graphs mirror the write.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.write_edge(from, to, 1)
    }

    /// Adds an edge with an explicit weight (weighted graphs only).
    pub fn add_edge_weighted(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<()> {
        if !self.config.weighted {
            return Err(Error::GraphShape {
                algorithm: "add_edge_weighted",
                requirement: "a weighted graph",
            });
        }
        self.write_edge(from, to, weight)
    }

    fn write_edge(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let forward = self.cell(from, to);
        self.cells[forward] = Some(weight);
        if !self.config.directed {
            let backward = self.cell(to, from);
            self.cells[backward] = Some(weight);
        }
        self.present[from] = true;
        self.present[to] = true;
        Ok(())
    }

    /// Updates the weight of an existing edge (weighted graphs only).
    pub fn set_edge_weight(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<()> {
        if !self.config.weighted {
            return Err(Error::GraphShape {
                algorithm: "set_edge_weight",
                requirement: "a weighted graph",
            });
        }
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let forward = self.cell(from, to);
        if self.cells[forward].is_none() {
            return Err(Error::EdgeNotFound { from, to });
        }
        self.cells[forward] = Some(weight);
        if !self.config.directed {
            let backward = self.cell(to, from);
            self.cells[backward] = Some(weight);
        }
        Ok(())
    }

    /// Returns `true` when the arc `from -> to` exists. Out-of-range
    /// indices read as absent.
    #[must_use]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        from < self.rows && to < self.rows && self.cells[self.cell(from, to)].is_some()
    }

    /// Weight of the arc `from -> to`, `None` when absent or out of
    /// range.
    #[must_use]
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<i64> {
        if from < self.rows && to < self.rows {
            self.cells[self.cell(from, to)]
        } else {
            None
        }
    }

    /// Scans row `from` in ascending target order, skipping NIL cells
    /// and targets that are holes.
    pub fn edges_from(&self, from: VertexId) -> impl Iterator<Item = Edge> + '_ {
        let limit = if from < self.rows { self.rows } else { 0 };
        (0..limit).filter_map(move |to| {
            let weight = self.cells[self.cell(from, to)]?;
            self.present[to].then_some(Edge { from, to, weight })
        })
    }

    /// Every edge in ascending `(from, to)` order. Undirected edges
    /// appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.rows).flat_map(move |from| self.edges_from(from))
    }

    /// Returns `true` when some edge write has touched `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.rows && self.present[vertex]
    }

    /// Present vertices in ascending index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.rows).filter(move |&v| self.present[v])
    }

    /// Number of present vertices (holes excluded).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.present.iter().filter(|&&p| p).count()
    }

    /// Number of edges; undirected edges count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        if self.config.directed {
            self.edges().count()
        } else {
            self.edges().filter(|e| e.from <= e.to).count()
        }
    }

    /// Edge count over the possible edge count between present
    /// vertices; 0.0 below two vertices.
    #[must_use]
    pub fn density(&self) -> f64 {
        let n = self.vertex_count();
        if n < 2 {
            return 0.0;
        }
        let slots = (n * (n - 1)) as f64;
        let edges = self.edge_count() as f64;
        if self.config.directed {
            edges / slots
        } else {
            2.0 * edges / slots
        }
    }

    /// Raw row-major snapshot of the matrix, NIL cells included.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<i64>>> {
        (0..self.rows)
            .map(|from| self.cells[from * self.rows..(from + 1) * self.rows].to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- construction ---

    #[test]
    fn test_constructors_set_shape() {
        assert!(MatrixGraph::directed(2).is_directed());
        assert!(!MatrixGraph::directed(2).is_weighted());
        assert!(MatrixGraph::directed_weighted(2).is_weighted());
        assert!(!MatrixGraph::undirected(2).is_directed());
        assert!(MatrixGraph::undirected_weighted(2).is_weighted());
        assert_eq!(MatrixGraph::directed(5).rows(), 5);
    }

    #[test]
    fn test_new_graph_is_all_holes() {
        let graph = MatrixGraph::directed(3);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertices().count(), 0);
        assert!(!graph.contains_vertex(0));
    }

    // --- edge writes ---

    #[test]
    fn test_add_edge_marks_endpoints_present() {
        let mut graph = MatrixGraph::directed(4);
        graph.add_edge(0, 2).unwrap();
        assert!(graph.contains_vertex(0));
        assert!(graph.contains_vertex(2));
        assert!(!graph.contains_vertex(1));
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = MatrixGraph::directed(3);
        assert_eq!(
            graph.add_edge(0, 3),
            Err(Error::VertexOutOfRange { vertex: 3, rows: 3 })
        );
        assert_eq!(
            graph.add_edge(7, 0),
            Err(Error::VertexOutOfRange { vertex: 7, rows: 3 })
        );
    }

    #[test]
    fn test_undirected_writes_mirror() {
        let mut graph = MatrixGraph::undirected_weighted(3);
        graph.add_edge_weighted(0, 1, 5).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(5));
        assert_eq!(graph.edge_weight(1, 0), Some(5));

        graph.set_edge_weight(1, 0, 9).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(9));
    }

    #[test]
    fn test_directed_writes_do_not_mirror() {
        let mut graph = MatrixGraph::directed(3);
        graph.add_edge(0, 1).unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn test_weighted_write_on_unweighted_graph() {
        let mut graph = MatrixGraph::directed(3);
        assert_eq!(
            graph.add_edge_weighted(0, 1, 5),
            Err(Error::GraphShape {
                algorithm: "add_edge_weighted",
                requirement: "a weighted graph",
            })
        );
    }

    #[test]
    fn test_add_edge_on_weighted_graph_stores_one() {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(1));
    }

    #[test]
    fn test_set_edge_weight_requires_existing_edge() {
        let mut graph = MatrixGraph::directed_weighted(3);
        assert_eq!(
            graph.set_edge_weight(0, 1, 4),
            Err(Error::EdgeNotFound { from: 0, to: 1 })
        );
        graph.add_edge_weighted(0, 1, 4).unwrap();
        graph.set_edge_weight(0, 1, -4).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(-4));
    }

    #[test]
    fn test_self_loop() {
        let mut graph = MatrixGraph::directed_weighted(2);
        graph.add_edge_weighted(1, 1, -3).unwrap();
        assert!(graph.has_edge(1, 1));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    // --- reads ---

    #[test]
    fn test_edge_weight_out_of_range_is_none() {
        let graph = MatrixGraph::directed_weighted(2);
        assert_eq!(graph.edge_weight(0, 9), None);
        assert!(!graph.has_edge(9, 0));
    }

    #[test]
    fn test_edges_from_ascending_and_skips_nil() {
        let mut graph = MatrixGraph::directed(5);
        graph.add_edge(2, 4).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(2, 3).unwrap();

        let targets: Vec<_> = graph.edges_from(2).map(|e| e.to).collect();
        assert_eq!(targets, vec![0, 3, 4]);
        assert_eq!(graph.edges_from(1).count(), 0);
        assert_eq!(graph.edges_from(99).count(), 0);
    }

    #[test]
    fn test_edges_enumerates_in_row_order() {
        let mut graph = MatrixGraph::directed_weighted(3);
        graph.add_edge_weighted(1, 0, 7).unwrap();
        graph.add_edge_weighted(0, 2, 3).unwrap();

        let edges: Vec<_> = graph.edges().map(|e| (e.from, e.to, e.weight)).collect();
        assert_eq!(edges, vec![(0, 2, 3), (1, 0, 7)]);
    }

    #[test]
    fn test_adjacency_matrix_snapshot() {
        let mut graph = MatrixGraph::directed_weighted(2);
        graph.add_edge_weighted(0, 1, 6).unwrap();
        assert_eq!(
            graph.adjacency_matrix(),
            vec![vec![None, Some(6)], vec![None, None]]
        );
    }

    // --- statistics ---

    #[test]
    fn test_edge_count_undirected_counts_once() {
        let mut graph = MatrixGraph::undirected(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        assert_eq!(graph.edge_count(), 2);

        let mut digraph = MatrixGraph::directed(4);
        digraph.add_edge(0, 1).unwrap();
        digraph.add_edge(1, 0).unwrap();
        assert_eq!(digraph.edge_count(), 2);
    }

    #[test]
    fn test_density() {
        let mut graph = MatrixGraph::directed(3);
        assert_eq!(graph.density(), 0.0);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        // 3 of 6 possible arcs between 3 vertices
        assert!((graph.density() - 0.5).abs() < 1e-9);

        let mut pair = MatrixGraph::undirected(2);
        pair.add_edge(0, 1).unwrap();
        assert!((pair.density() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_check_vertex_boundary() {
        let graph = MatrixGraph::directed(3);
        assert!(graph.check_vertex(2).is_ok());
        assert_eq!(
            graph.check_vertex(3),
            Err(Error::VertexOutOfRange { vertex: 3, rows: 3 })
        );
    }
}
