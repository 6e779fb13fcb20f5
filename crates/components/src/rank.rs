//! Top-M component ranking.

use std::cmp::Ordering;

use tracing::debug;

use crate::config::RankConfig;
use crate::error::ComponentError;
use crate::forest::UnionFind;
use crate::result::{ComponentRanking, RankedComponent};

/// Larger size first, then smaller root.
fn by_rank(a: &RankedComponent, b: &RankedComponent) -> Ordering {
    b.size.cmp(&a.size).then(a.root.cmp(&b.root))
}

/// Tallies the size of every component, in root order.
///
/// Resolves roots with [`UnionFind::root`], so the forest is only borrowed.
/// Flattening the forest first makes every lookup a single hop.
pub fn component_sizes(forest: &UnionFind) -> Vec<RankedComponent> {
    let n = forest.len();
    let mut counts = vec![0usize; n];
    for x in 0..n {
        counts[forest.root(x)] += 1;
    }
    counts
        .into_iter()
        .enumerate()
        .filter(|&(_, size)| size > 0)
        .map(|(root, size)| RankedComponent { root, size })
        .collect()
}

/// Reports the `top_m` largest components of a finished forest.
///
/// Components are selected by partitioning on (size descending, root
/// ascending) and only the selected ones are sorted. With fewer than
/// `top_m` components, all of them are reported and the product covers
/// only those sizes.
///
/// # Errors
///
/// Returns [`ComponentError::InvalidTopM`] for `top_m = 0`, or
/// [`ComponentError::ProductOverflow`] if the product exceeds `u64`.
#[tracing::instrument(
    skip(forest, config),
    fields(n_nodes = forest.len(), top_m = config.top_m())
)]
pub fn rank_components(
    forest: &UnionFind,
    config: &RankConfig,
) -> Result<ComponentRanking, ComponentError> {
    config.validate()?;
    let m = config.top_m();

    let mut components = component_sizes(forest);
    let n_components = components.len();
    debug_assert_eq!(
        components.iter().map(|c| c.size).sum::<usize>(),
        forest.len()
    );

    if components.len() > m {
        components.select_nth_unstable_by(m - 1, by_rank);
        components.truncate(m);
    }
    components.sort_unstable_by(by_rank);

    let product = components
        .iter()
        .try_fold(1u64, |acc, c| acc.checked_mul(c.size as u64))
        .ok_or_else(|| ComponentError::ProductOverflow {
            sizes: components.iter().map(|c| c.size).collect(),
        })?;

    debug!(
        n_components,
        reported = components.len(),
        product,
        "ranked components"
    );
    Ok(ComponentRanking::new(
        components,
        product,
        n_components,
        forest.len(),
    ))
}
