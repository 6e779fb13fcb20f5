//! Output type for closest-pair queries.

use serde::Serialize;

use crate::pair::Pair;

/// Result of a closest-pair query.
///
/// Holds the selected pairs in ascending `(distance, i, j)` order together
/// with the size of the candidate pool they were drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosestPairs {
    /// Selected pairs, ascending. Length = `min(k, n_candidates)`.
    pairs: Vec<Pair>,
    /// Number of points the pool was built from.
    n_points: usize,
    /// Number of candidate pairs considered: `C(n_points, 2)`.
    n_candidates: usize,
}

impl ClosestPairs {
    /// Creates a new `ClosestPairs`.
    pub fn new(pairs: Vec<Pair>, n_points: usize, n_candidates: usize) -> Self {
        debug_assert!(pairs.len() <= n_candidates);
        debug_assert!(pairs.windows(2).all(|w| w[0] < w[1]));
        Self {
            pairs,
            n_points,
            n_candidates,
        }
    }

    /// Returns the selected pairs, ascending.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Returns the number of selected pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair was selected.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of points the pool was built from.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns the number of candidate pairs considered.
    pub fn n_candidates(&self) -> usize {
        self.n_candidates
    }

    /// Consumes the result and returns the selected pairs.
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}
