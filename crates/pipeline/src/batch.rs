//! Offline execution: every stage runs to completion before the next.

use nearlink_pairs::{Pair, PointStore, closest_pairs};

use crate::aggregate::rank_pairs;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::solution::Solution;

/// Runs the pipeline over fully materialised points.
///
/// Stores and validates every row, selects the K closest pairs with the
/// parallel batch selector, merges them in ascending order and ranks the
/// components.
///
/// # Errors
///
/// Returns [`PipelineError`] if the configuration is invalid, the point
/// count differs from the expected count, or a row is malformed.
#[tracing::instrument(skip_all, fields(n_points = rows.len()))]
pub fn solve_batch<R>(rows: &[R], config: &PipelineConfig) -> Result<Solution, PipelineError>
where
    R: AsRef<[u32]>,
{
    config.validate()?;
    config.check_point_count(rows.len())?;

    let store = PointStore::from_rows(config.pairs(), rows)?;
    let closest = closest_pairs(&store, config.pairs().k());
    let ranking = rank_pairs(
        store.len(),
        closest.pairs().iter().map(Pair::indices),
        config.rank(),
    )?;
    Ok(Solution::new(closest, ranking, None))
}

#[cfg(test)]
mod tests {
    use nearlink_components::RankConfig;
    use nearlink_pairs::{PairConfig, PairError};

    use super::*;

    fn config(k: usize, m: usize) -> PipelineConfig {
        PipelineConfig::new(PairConfig::new(k).with_bit_width(8), RankConfig::new(m))
    }

    #[test]
    fn test_line_of_points() {
        let rows = [[0u32, 0, 0], [1, 0, 0], [3, 0, 0], [6, 0, 0]];
        let solution = solve_batch(&rows, &config(2, 2)).unwrap();
        let idx: Vec<_> = solution.pairs().iter().map(Pair::indices).collect();
        assert_eq!(idx, vec![(0, 1), (1, 2)]);
        assert_eq!(solution.sizes(), vec![3, 1]);
        assert_eq!(solution.product(), 3);
        assert!(solution.ingest().is_none());
    }

    #[test]
    fn test_single_point() {
        let solution = solve_batch(&[[5u32, 5, 5]], &config(10, 3)).unwrap();
        assert!(solution.pairs().is_empty());
        assert_eq!(solution.sizes(), vec![1]);
        assert_eq!(solution.product(), 1);
    }

    #[test]
    fn test_no_points() {
        let rows: [[u32; 3]; 0] = [];
        let solution = solve_batch(&rows, &config(10, 3)).unwrap();
        assert!(solution.sizes().is_empty());
        assert_eq!(solution.product(), 1);
    }

    #[test]
    fn test_count_mismatch() {
        let rows = [[0u32, 0, 0], [1, 1, 1]];
        let result = solve_batch(&rows, &config(1, 1).with_expected_points(3));
        assert_eq!(
            result.unwrap_err(),
            PipelineError::PointCountMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_bad_row() {
        let rows = [vec![0u32, 0, 0], vec![1, 1]];
        let result = solve_batch(&rows, &config(1, 1));
        assert_eq!(
            result.unwrap_err(),
            PipelineError::Pairs(PairError::DimensionMismatch {
                index: 1,
                got: 2,
                dims: 3
            })
        );
    }
}
