//! Closest-pair selection over fixed-width integer points.
//!
//! This crate stores points with fixed-width unsigned coordinates, evaluates
//! squared Euclidean distances in widened integer arithmetic, and selects
//! the K closest canonical pairs out of all `C(N, 2)` candidates.
//!
//! | Piece | Type | Notes |
//! |-------|------|-------|
//! | Point storage | [`PointStore`] | Row-major, indices assigned on insert |
//! | Distance | [`sq_distance`] | `i64` differences, `u128` sum |
//! | Batch selection | [`closest_pairs`] | Partition, then sort only K |
//! | Incremental selection | [`TopKSelector`] | Bounded `2K` buffer with cutoff |
//!
//! # Quick start
//!
//! ```
//! use nearlink_pairs::{PairConfig, closest_pairs_from_rows};
//!
//! let points = [[0u32, 0, 0], [1, 0, 0], [0, 1, 0], [10, 10, 10]];
//! let config = PairConfig::new(2).with_bit_width(8);
//!
//! let result = closest_pairs_from_rows(&points, &config).unwrap();
//! let indices: Vec<_> = result.pairs().iter().map(|p| p.indices()).collect();
//! assert_eq!(indices, vec![(0, 1), (0, 2)]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! closest_pairs()
//!   ├─ row_candidates()          (closest.rs, rows in parallel)
//!   │    └─ sq_distance()        (distance.rs)
//!   ├─ retain_k_smallest()       (select.rs, per row)
//!   └─ select_k_smallest()       (select.rs, global partition + sort)
//! ```

pub mod closest;
pub mod config;
pub mod distance;
pub mod error;
pub mod pair;
pub mod point;
pub mod result;

pub(crate) mod select;

pub use closest::{closest_pairs, closest_pairs_from_rows};
pub use config::PairConfig;
pub use distance::sq_distance;
pub use error::PairError;
pub use pair::Pair;
pub use point::PointStore;
pub use result::ClosestPairs;
pub use select::TopKSelector;

/// Number of canonical pairs among `n_points` points: `C(n, 2)`.
pub fn candidate_count(n_points: usize) -> usize {
    if n_points < 2 {
        return 0;
    }
    if n_points.is_multiple_of(2) {
        (n_points / 2) * (n_points - 1)
    } else {
        n_points * ((n_points - 1) / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_count_known_values() {
        assert_eq!(candidate_count(2), 1);
        assert_eq!(candidate_count(3), 3);
        assert_eq!(candidate_count(4), 6);
        assert_eq!(candidate_count(5), 10);
        assert_eq!(candidate_count(1000), 499_500);
    }

    #[test]
    fn test_candidate_count_degenerate() {
        assert_eq!(candidate_count(0), 0);
        assert_eq!(candidate_count(1), 0);
    }
}
