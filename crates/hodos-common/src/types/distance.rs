//! Path distances with a tagged infinity.
//!
//! [`Distance`] replaces the usual "very large integer" sentinel with an
//! explicit variant, so unreachable never collides with a legitimate
//! weight sum and arithmetic cannot silently wrap past it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path distance: either a finite signed weight sum or unreachable.
///
/// The variant order gives the natural total order - every finite
/// distance compares below [`Distance::Infinite`].
///
/// # Example
///
/// ```
/// use hodos_common::Distance;
///
/// let d = Distance::Finite(3);
/// assert!(d < Distance::Infinite);
/// assert_eq!(d.saturating_add(4), Distance::Finite(7));
/// assert_eq!(Distance::Infinite.saturating_add(4), Distance::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// A reachable vertex with a finite weight sum.
    Finite(i64),
    /// Unreachable. Absorbs addition and dominates every comparison.
    Infinite,
}

impl Distance {
    /// The zero distance (a vertex to itself).
    pub const ZERO: Distance = Distance::Finite(0);

    /// Returns `true` if the distance is finite.
    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns `true` if the distance marks an unreachable vertex.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Returns the finite value, or `None` when infinite.
    #[inline]
    #[must_use]
    pub const fn finite(self) -> Option<i64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Returns `true` if the distance is finite and below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        match self {
            Distance::Finite(d) => d < 0,
            Distance::Infinite => false,
        }
    }

    /// Adds an edge weight. Infinite absorbs; finite sums saturate at
    /// the `i64` bounds instead of wrapping.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Adds two distances under the same absorption and saturation
    /// rules as [`Distance::saturating_add`].
    #[inline]
    #[must_use]
    pub const fn plus(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_add(b)),
            _ => Distance::Infinite,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => write!(f, "NIL"),
        }
    }
}

impl From<i64> for Distance {
    fn from(weight: i64) -> Self {
        Distance::Finite(weight)
    }
}
