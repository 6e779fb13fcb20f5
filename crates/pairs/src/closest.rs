//! Closest-pair entry points.

use rayon::prelude::*;
use tracing::debug;

use crate::candidate_count;
use crate::config::PairConfig;
use crate::distance::sq_distance;
use crate::error::PairError;
use crate::pair::Pair;
use crate::point::PointStore;
use crate::result::ClosestPairs;
use crate::select::{retain_k_smallest, select_k_smallest};

/// Evaluates every candidate pair of row `i` (`i` against `i+1..n`).
fn row_candidates(store: &PointStore, i: usize, out: &mut Vec<Pair>) {
    let anchor = store.get(i);
    out.extend(
        store
            .iter()
            .enumerate()
            .skip(i + 1)
            .map(|(j, other)| Pair::new(i, j, sq_distance(anchor, other))),
    );
}

/// Finds the `k` closest pairs among all points in `store`.
///
/// Traverses the upper triangle row by row: row `i` pairs point `i` with
/// every later point, so each canonical pair is evaluated exactly once. Rows
/// are evaluated in parallel; each row is pre-reduced to its own `k`
/// smallest before the global partition, and only the final `k` survivors
/// are sorted.
///
/// `k` larger than the candidate pool returns every pair. Fewer than two
/// points, or `k = 0`, return an empty result.
#[tracing::instrument(skip(store), fields(n_points = store.len()))]
pub fn closest_pairs(store: &PointStore, k: usize) -> ClosestPairs {
    let n_points = store.len();
    let n_candidates = candidate_count(n_points);
    let k_eff = k.min(n_candidates);

    if k_eff == 0 {
        debug!(n_candidates, "no pairs to select");
        return ClosestPairs::new(Vec::new(), n_points, n_candidates);
    }

    let mut pool: Vec<Pair> = (0..n_points)
        .into_par_iter()
        .flat_map_iter(|i| {
            let mut row = Vec::with_capacity(n_points - i - 1);
            row_candidates(store, i, &mut row);
            retain_k_smallest(&mut row, k_eff);
            row
        })
        .collect();
    debug!(n_candidates, pool = pool.len(), k_eff, "row pre-selection done");

    select_k_smallest(&mut pool, k_eff);
    ClosestPairs::new(pool, n_points, n_candidates)
}

/// Stores `rows` as points and finds the closest pairs.
///
/// Convenience wrapper around [`PointStore::from_rows`] and
/// [`closest_pairs`] using `config.k()`.
///
/// # Errors
///
/// Returns [`PairError`] if the configuration is invalid or a row does not
/// match the configured layout.
pub fn closest_pairs_from_rows<R>(
    rows: &[R],
    config: &PairConfig,
) -> Result<ClosestPairs, PairError>
where
    R: AsRef<[u32]>,
{
    let store = PointStore::from_rows(config, rows)?;
    Ok(closest_pairs(&store, config.k()))
}
