//! Shared foundation for the hodos graph-algorithms engine.
//!
//! - [`collections`] - FxHash-based collection aliases
//! - [`types`] - core value types like [`Distance`] and [`Value`]
//! - [`utils`] - the shared [`Error`]/[`Result`] pair and string helpers

pub mod collections;
pub mod types;
pub mod utils;

pub use types::{Distance, Value, VertexId};
pub use utils::{Error, Result};
