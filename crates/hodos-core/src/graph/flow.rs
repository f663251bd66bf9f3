//! Capacity/flow matrix pair for augmenting-path algorithms.
//!
//! [`FlowNetwork`] keeps two square matrices the same shape as
//! [`MatrixGraph`](super::MatrixGraph) cells: one for capacities, one
//! for the current flow. Flow is stored antisymmetrically, so pushing
//! along `u -> v` simultaneously opens residual room on `v -> u`. That
//! is the whole trick behind augmenting paths: an algorithm can walk
//! "backwards" through a matched arc by consuming the negative flow.

use hodos_common::{Error, Result, VertexId};

/// A flow network over `rows` vertex slots.
///
/// Residual capacity of an arc is `capacity - flow`; reverse arcs with
/// zero declared capacity still expose residual room once the forward
/// arc carries flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    rows: usize,
    capacity: Vec<i64>,
    flow: Vec<i64>,
    present: Vec<bool>,
}

impl FlowNetwork {
    /// Creates an empty network with `rows` vertex slots.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            capacity: vec![0; rows * rows],
            flow: vec![0; rows * rows],
            present: vec![false; rows],
        }
    }

    /// Matrix edge length (vertex slots, holes included).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
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

    /// Adds `capacity` units of capacity to the arc `from -> to`.
    /// Repeated calls accumulate. Capacity must be positive.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, capacity: i64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity <= 0 {
            return Err(Error::InvalidValue(format!(
                "edge capacity must be positive, got {capacity}"
            )));
        }
        let cell = self.cell(from, to);
        self.capacity[cell] += capacity;
        self.present[from] = true;
        self.present[to] = true;
        Ok(())
    }

    /// Declared capacity of `from -> to`; out-of-range reads as 0.
    #[must_use]
    pub fn capacity(&self, from: VertexId, to: VertexId) -> i64 {
        if from < self.rows && to < self.rows {
            self.capacity[self.cell(from, to)]
        } else {
            0
        }
    }

    /// Current flow on `from -> to`; negative when the reverse arc
    /// carries flow. Out-of-range reads as 0.
    #[must_use]
    pub fn flow(&self, from: VertexId, to: VertexId) -> i64 {
        if from < self.rows && to < self.rows {
            self.flow[self.cell(from, to)]
        } else {
            0
        }
    }

    /// Remaining pushable units on `from -> to`.
    #[must_use]
    pub fn residual_capacity(&self, from: VertexId, to: VertexId) -> i64 {
        self.capacity(from, to) - self.flow(from, to)
    }

    /// Pushes `delta` units along `from -> to`, keeping the flow
    /// matrix antisymmetric.
    pub fn add_flow(&mut self, from: VertexId, to: VertexId, delta: i64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if delta < 0 {
            return Err(Error::InvalidValue(format!(
                "flow delta must be non-negative, got {delta}"
            )));
        }
        if delta > self.residual_capacity(from, to) {
            return Err(Error::CapacityExceeded { from, to });
        }
        let forward = self.cell(from, to);
        let backward = self.cell(to, from);
        self.flow[forward] += delta;
        self.flow[backward] -= delta;
        Ok(())
    }

    /// Cancels `delta` units on `from -> to` by pushing them along the
    /// reverse arc.
    pub fn subtract_flow(&mut self, from: VertexId, to: VertexId, delta: i64) -> Result<()> {
        self.add_flow(to, from, delta)
    }

    /// Returns `true` when some edge write has touched `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.rows && self.present[vertex]
    }

    /// Targets reachable from `from` through arcs with residual room,
    /// ascending, holes skipped.
    pub fn residual_neighbors(&self, from: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let limit = if from < self.rows { self.rows } else { 0 };
        (0..limit).filter(move |&to| self.present[to] && self.residual_capacity(from, to) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_accumulates_capacity() {
        let mut network = FlowNetwork::new(3);
        network.add_edge(0, 1, 4).unwrap();
        network.add_edge(0, 1, 3).unwrap();
        assert_eq!(network.capacity(0, 1), 7);
        assert_eq!(network.residual_capacity(0, 1), 7);
    }

    #[test]
    fn test_add_edge_rejects_non_positive_capacity() {
        let mut network = FlowNetwork::new(2);
        assert!(matches!(
            network.add_edge(0, 1, 0),
            Err(Error::InvalidValue(_))
        ));
        assert!(matches!(
            network.add_edge(0, 1, -2),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn test_flow_is_antisymmetric() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, 5).unwrap();
        network.add_flow(0, 1, 3).unwrap();

        assert_eq!(network.flow(0, 1), 3);
        assert_eq!(network.flow(1, 0), -3);
        assert_eq!(network.residual_capacity(0, 1), 2);
        // the reverse arc has no declared capacity but residual room
        assert_eq!(network.residual_capacity(1, 0), 3);
    }

    #[test]
    fn test_add_flow_respects_residual() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, 2).unwrap();
        assert_eq!(
            network.add_flow(0, 1, 3),
            Err(Error::CapacityExceeded { from: 0, to: 1 })
        );
        network.add_flow(0, 1, 2).unwrap();
        assert_eq!(
            network.add_flow(0, 1, 1),
            Err(Error::CapacityExceeded { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_add_flow_rejects_negative_delta() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, 5).unwrap();
        assert!(matches!(
            network.add_flow(0, 1, -1),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn test_subtract_flow_cancels() {
        let mut network = FlowNetwork::new(2);
        network.add_edge(0, 1, 5).unwrap();
        network.add_flow(0, 1, 4).unwrap();
        network.subtract_flow(0, 1, 3).unwrap();
        assert_eq!(network.flow(0, 1), 1);
        assert_eq!(network.flow(1, 0), -1);
    }

    #[test]
    fn test_residual_neighbors_skips_saturated_and_holes() {
        let mut network = FlowNetwork::new(4);
        network.add_edge(0, 1, 1).unwrap();
        network.add_edge(0, 2, 1).unwrap();
        network.add_flow(0, 1, 1).unwrap();

        // 1 is saturated, 3 is a hole
        assert_eq!(network.residual_neighbors(0).collect::<Vec<_>>(), vec![2]);
        // pushing opened the reverse arc
        assert_eq!(network.residual_neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_out_of_range_reads_are_zero() {
        let network = FlowNetwork::new(2);
        assert_eq!(network.capacity(0, 9), 0);
        assert_eq!(network.flow(9, 0), 0);
        assert_eq!(network.residual_neighbors(9).count(), 0);
    }
}
