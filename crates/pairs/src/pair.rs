//! Canonical point pairs.

use std::cmp::Ordering;

use serde::Serialize;

/// An unordered pair of distinct point indices with its squared distance.
///
/// Always stored in canonical form (`i < j`). Pairs are totally ordered by
/// `(sq_distance, i, j)`, which is the tie-break used by every selection in
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pair {
    i: usize,
    j: usize,
    sq_distance: u128,
}

impl Pair {
    /// Creates a canonical pair from two indices in either order.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn new(a: usize, b: usize, sq_distance: u128) -> Self {
        assert_ne!(a, b, "a pair needs two distinct points, got {a} twice");
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        Self { i, j, sq_distance }
    }

    /// Returns the smaller index.
    pub fn i(&self) -> usize {
        self.i
    }

    /// Returns the larger index.
    pub fn j(&self) -> usize {
        self.j
    }

    /// Returns both indices as `(i, j)` with `i < j`.
    pub fn indices(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Returns the squared Euclidean distance between the two points.
    pub fn sq_distance(&self) -> u128 {
        self.sq_distance
    }
}

impl Ord for Pair {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.sq_distance, self.i, self.j).cmp(&(other.sq_distance, other.i, other.j))
    }
}

impl PartialOrd for Pair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
