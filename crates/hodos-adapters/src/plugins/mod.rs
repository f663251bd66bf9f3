//! Pluggable algorithm wrappers and the registry that serves them.
//!
//! [`GraphAlgorithm`] is the uniform call surface; [`Parameters`] and
//! [`AlgorithmResult`] carry values in and out; [`AlgorithmRegistry`]
//! resolves implementations by name. The built-in wrappers live in
//! [`algorithms`].

pub mod algorithms;
mod registry;
mod traits;

pub use registry::AlgorithmRegistry;
pub use traits::{AlgorithmResult, GraphAlgorithm, ParameterDef, ParameterType, Parameters};
