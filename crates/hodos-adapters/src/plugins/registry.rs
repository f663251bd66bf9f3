//! Name-based lookup and dispatch for [`GraphAlgorithm`]s.

use std::sync::Arc;

use parking_lot::RwLock;

use hodos_common::collections::HodosIndexMap;
use hodos_common::utils::strings::suggestion_hint;
use hodos_common::{Error, Result};
use hodos_core::MatrixGraph;

use super::algorithms;
use super::traits::{AlgorithmResult, GraphAlgorithm, Parameters};

/// A thread-safe registry of algorithms, addressed by name.
///
/// Names keep their registration order, so [`names`](Self::names) lists
/// the built-in suite in a stable order. Registering a second algorithm
/// under an existing name replaces the first.
pub struct AlgorithmRegistry {
    algorithms: RwLock<HodosIndexMap<String, Arc<dyn GraphAlgorithm>>>,
}

impl AlgorithmRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithms: RwLock::new(HodosIndexMap::default()),
        }
    }

    /// Creates a registry pre-loaded with the built-in algorithm suite.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for algorithm in algorithms::builtins() {
            registry.register(algorithm);
        }
        registry
    }

    /// Registers an algorithm under its own name.
    pub fn register(&self, algorithm: Arc<dyn GraphAlgorithm>) {
        tracing::debug!("registering algorithm {}", algorithm.name());
        self.algorithms
            .write()
            .insert(algorithm.name().to_string(), algorithm);
    }

    /// Looks up an algorithm by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn GraphAlgorithm>> {
        self.algorithms.read().get(name).cloned()
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.read().contains_key(name)
    }

    /// All registered names, in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.algorithms.read().keys().cloned().collect()
    }

    /// Number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.read().len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.read().is_empty()
    }

    /// Resolves `name` and runs the algorithm against `graph`.
    ///
    /// An unknown name fails with [`Error::UnknownAlgorithm`], carrying
    /// a "did you mean" hint when a registered name is close.
    pub fn execute(
        &self,
        name: &str,
        graph: &MatrixGraph,
        params: &Parameters,
    ) -> Result<AlgorithmResult> {
        let Some(algorithm) = self.get(name) else {
            let names = self.names();
            let hint = suggestion_hint(name, &names);
            return Err(Error::UnknownAlgorithm(format!("{name}.{hint}")));
        };
        tracing::debug!("executing algorithm {}", name);
        algorithm.execute(graph, params)
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}
