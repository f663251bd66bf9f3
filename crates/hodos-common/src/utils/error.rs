//! Error types shared across the engine.
//!
//! Precondition violations (bad indices, wrong graph shape, malformed
//! partitions) surface as [`Error`]. Algorithmic outcomes are not
//! errors: a reachable negative cycle makes the affected shortest-path
//! algorithms return an `Ok(None)` sentinel instead.

use thiserror::Error;

/// Result alias using the shared [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by graph construction and the algorithm suite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index at or past the matrix edge.
    #[error("vertex {vertex} is out of range for a graph with {rows} rows")]
    VertexOutOfRange { vertex: usize, rows: usize },

    /// An algorithm invoked on a graph of the wrong shape.
    #[error("{algorithm} requires {requirement}")]
    GraphShape {
        algorithm: &'static str,
        requirement: &'static str,
    },

    /// A weight update addressed to an edge that does not exist.
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: usize, to: usize },

    /// Matching side ranges that fall outside the matrix or overlap.
    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    /// A flow push past the residual capacity of an arc.
    #[error("flow on {from} -> {to} would exceed capacity")]
    CapacityExceeded { from: usize, to: usize },

    /// A malformed or missing parameter value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A registry lookup for a name no algorithm was registered under.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::VertexOutOfRange { vertex: 9, rows: 4 };
        assert_eq!(
            err.to_string(),
            "vertex 9 is out of range for a graph with 4 rows"
        );

        let err = Error::GraphShape {
            algorithm: "dijkstra",
            requirement: "a directed, weighted graph",
        };
        assert_eq!(err.to_string(), "dijkstra requires a directed, weighted graph");

        let err = Error::EdgeNotFound { from: 1, to: 2 };
        assert_eq!(err.to_string(), "no edge from 1 to 2");

        let err = Error::CapacityExceeded { from: 0, to: 3 };
        assert_eq!(err.to_string(), "flow on 0 -> 3 would exceed capacity");
    }

    #[test]
    fn test_errors_compare() {
        assert_eq!(
            Error::UnknownAlgorithm("bfx".to_string()),
            Error::UnknownAlgorithm("bfx".to_string())
        );
        assert_ne!(
            Error::InvalidValue("a".to_string()),
            Error::InvalidValue("b".to_string())
        );
    }
}
