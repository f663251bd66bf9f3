//! Common utilities used throughout hodos.
//!
//! - [`error`] - the shared [`Error`] and [`Result`] types
//! - [`strings`] - suggestion helpers for error messages

pub mod error;
pub mod strings;

pub use error::{Error, Result};
