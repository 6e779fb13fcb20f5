//! Output of a pipeline run.

use nearlink_components::ComponentRanking;
use nearlink_pairs::{ClosestPairs, Pair};
use nearlink_stream::{ConsumerStats, ProducerStats};
use serde::Serialize;

/// Ingest counters from a streaming run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Producer-side counters, including stalls.
    pub producer: ProducerStats,
    /// Consumer-side counters, including padding.
    pub consumer: ConsumerStats,
}

/// The K closest pairs, the M largest components and their size product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    closest: ClosestPairs,
    ranking: ComponentRanking,
    #[serde(skip_serializing_if = "Option::is_none")]
    ingest: Option<IngestStats>,
}

impl Solution {
    pub(crate) fn new(
        closest: ClosestPairs,
        ranking: ComponentRanking,
        ingest: Option<IngestStats>,
    ) -> Self {
        Self {
            closest,
            ranking,
            ingest,
        }
    }

    /// Returns the selected pairs, ascending by `(distance, i, j)`.
    pub fn pairs(&self) -> &[Pair] {
        self.closest.pairs()
    }

    /// Returns the full closest-pair result.
    pub fn closest(&self) -> &ClosestPairs {
        &self.closest
    }

    /// Returns the component ranking.
    pub fn ranking(&self) -> &ComponentRanking {
        &self.ranking
    }

    /// Returns the reported component sizes, descending.
    pub fn sizes(&self) -> Vec<usize> {
        self.ranking.sizes()
    }

    /// Returns the product of the reported component sizes.
    pub fn product(&self) -> u64 {
        self.ranking.product()
    }

    /// Returns the number of points processed.
    pub fn n_points(&self) -> usize {
        self.closest.n_points()
    }

    /// Returns ingest counters for streaming runs, `None` for batch runs.
    pub fn ingest(&self) -> Option<&IngestStats> {
        self.ingest.as_ref()
    }

    /// Returns `true` if both solutions selected the same pairs and ranked
    /// the same components, ignoring ingest counters.
    pub fn same_answer(&self, other: &Self) -> bool {
        self.closest == other.closest && self.ranking == other.ranking
    }
}
