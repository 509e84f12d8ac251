//! Gesture abstraction
//!
//! The database never looks inside a gesture. It only needs an ordering
//! (to collapse duplicates), serde support (to persist), a triviality test
//! and an external similarity function.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A recorded gesture shape
pub trait Gesture: Ord + Clone + Serialize + DeserializeOwned {
    /// Whether the gesture is degenerate (near-zero motion, i.e. a click)
    fn is_trivial(&self) -> bool;
}

/// Similarity function between two gestures
///
/// Must be defined for every pair and return a score where 0.25 and 0.7
/// are meaningful thresholds (normally within `[0, 1]`).
pub trait Comparator<G> {
    fn compare(&self, a: &G, b: &G) -> f64;
}

impl<G, F> Comparator<G> for F
where
    F: Fn(&G, &G) -> f64,
{
    fn compare(&self, a: &G, b: &G) -> f64 {
        self(a, b)
    }
}
