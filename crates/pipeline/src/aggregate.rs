//! Merging selected pairs and ranking the resulting components.

use nearlink_components::{ComponentRanking, RankConfig, UnionFind, rank_components};

use crate::error::PipelineError;

/// Merges `pairs` into a fresh forest over `n_points` nodes and ranks it.
pub(crate) fn rank_pairs<I>(
    n_points: usize,
    pairs: I,
    config: &RankConfig,
) -> Result<ComponentRanking, PipelineError>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut forest = UnionFind::new(n_points);
    forest.merge_pairs(pairs);
    finish(forest, config)
}

/// Flattens a fully merged forest and ranks its components.
pub(crate) fn finish(
    mut forest: UnionFind,
    config: &RankConfig,
) -> Result<ComponentRanking, PipelineError> {
    forest.flatten();
    Ok(rank_components(&forest, config)?)
}
