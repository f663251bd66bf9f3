//! Standard collection type aliases for hodos.
//!
//! Use these instead of direct HashMap/HashSet so hashing stays
//! consistent across the codebase and can be swapped in one place.
//!
//! # Type Aliases
//!
//! | Type | Use Case |
//! |------|----------|
//! | [`HodosMap`] | Single-threaded hash map |
//! | [`HodosSet`] | Single-threaded hash set |
//! | [`HodosIndexMap`] | Insertion-order preserving map |
//! | [`HodosIndexSet`] | Insertion-order preserving set |
//!
//! # Example
//!
//! ```rust
//! use hodos_common::collections::{HodosMap, HodosSet};
//!
//! let mut map: HodosMap<String, i64> = HodosMap::default();
//! map.insert("weight".to_string(), 7);
//!
//! let mut set: HodosSet<usize> = HodosSet::default();
//! set.insert(3);
//! ```

use rustc_hash::FxBuildHasher;

/// Standard HashMap with FxHash (fast, non-cryptographic).
///
/// FxHash is a good fit for the small integer and string keys this
/// engine hashes: vertex indices, algorithm names, parameter names.
pub type HodosMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Standard HashSet with FxHash.
pub type HodosSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Ordered map preserving insertion order.
///
/// Useful when iteration order matters (e.g. listing registered
/// algorithms in registration order).
pub type HodosIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// Ordered set preserving insertion order.
pub type HodosIndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

/// Create a new empty [`HodosMap`].
#[inline]
#[must_use]
pub fn hodos_map<K, V>() -> HodosMap<K, V> {
    HodosMap::with_hasher(FxBuildHasher)
}

/// Create a new [`HodosMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn hodos_map_with_capacity<K, V>(capacity: usize) -> HodosMap<K, V> {
    HodosMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Create a new empty [`HodosSet`].
#[inline]
#[must_use]
pub fn hodos_set<T>() -> HodosSet<T> {
    HodosSet::with_hasher(FxBuildHasher)
}

/// Create a new [`HodosSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn hodos_set_with_capacity<T>(capacity: usize) -> HodosSet<T> {
    HodosSet::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Create a new empty [`HodosIndexMap`].
#[inline]
#[must_use]
pub fn hodos_index_map<K, V>() -> HodosIndexMap<K, V> {
    HodosIndexMap::with_hasher(FxBuildHasher)
}

/// Create a new [`HodosIndexMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn hodos_index_map_with_capacity<K, V>(capacity: usize) -> HodosIndexMap<K, V> {
    HodosIndexMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}
