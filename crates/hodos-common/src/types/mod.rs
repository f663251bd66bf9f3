//! Core types shared across the engine.
//!
//! - [`distance`] - [`Distance`], a path weight with tagged infinity
//! - [`value`] - [`Value`], the dynamic parameter/result cell type

pub mod distance;
pub mod value;

pub use distance::Distance;
pub use value::Value;

/// A dense vertex index into a square adjacency matrix.
///
/// Vertices are plain indices in `[0, rows)`; there is no separate
/// reference type. An index no edge write ever touched is a hole: it
/// occupies a row and a column but does not count as a vertex.
pub type VertexId = usize;
