//! Graph containers.
//!
//! - [`matrix`] - [`MatrixGraph`], the square adjacency matrix
//! - [`flow`] - [`FlowNetwork`], paired capacity/flow matrices

pub mod flow;
pub mod matrix;

pub use flow::FlowNetwork;
pub use matrix::{Edge, GraphConfig, MatrixGraph};
