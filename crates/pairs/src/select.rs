//! Top-k closest pair selection.
//!
//! Both selectors partition the candidate pool so the k smallest pairs are
//! identified, then fully order only those k. Ordering is the total order on
//! [`Pair`] (distance, then `i`, then `j`), so results never depend on the
//! order candidates arrive in.

use tracing::trace;

use crate::pair::Pair;

/// Cap on the buffer reserved up front by [`TopKSelector::new`].
const MAX_INITIAL_RESERVE: usize = 1 << 16;

/// Keeps only the `k` smallest pairs of `pairs`, in unspecified order.
pub(crate) fn retain_k_smallest(pairs: &mut Vec<Pair>, k: usize) {
    if k == 0 {
        pairs.clear();
        return;
    }
    if pairs.len() > k {
        pairs.select_nth_unstable(k - 1);
        pairs.truncate(k);
    }
}

/// Reduces `pairs` to its `k` smallest elements, sorted ascending.
pub(crate) fn select_k_smallest(pairs: &mut Vec<Pair>, k: usize) {
    retain_k_smallest(pairs, k);
    pairs.sort_unstable();
}

/// Incremental top-k selector over a stream of candidate pairs.
///
/// Candidates are buffered up to `2k`; when the buffer fills it is
/// partitioned down to the `k` smallest and the largest survivor becomes a
/// cutoff that rejects later candidates outright. [`finish`](Self::finish)
/// partitions once more and sorts only the survivors, so the result equals
/// a batch selection over everything pushed.
///
/// # Example
///
/// ```
/// use nearlink_pairs::{Pair, TopKSelector};
///
/// let mut selector = TopKSelector::new(2);
/// selector.push(Pair::new(0, 1, 9));
/// selector.push(Pair::new(0, 2, 1));
/// selector.push(Pair::new(1, 2, 4));
///
/// let top = selector.finish();
/// assert_eq!(top, vec![Pair::new(0, 2, 1), Pair::new(1, 2, 4)]);
/// ```
#[derive(Debug, Clone)]
pub struct TopKSelector {
    k: usize,
    buffer: Vec<Pair>,
    cutoff: Option<Pair>,
    seen: usize,
}

impl TopKSelector {
    /// Creates a selector keeping the `k` smallest pairs.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            buffer: Vec::with_capacity(k.saturating_mul(2).min(MAX_INITIAL_RESERVE)),
            cutoff: None,
            seen: 0,
        }
    }

    /// Offers one candidate pair.
    pub fn push(&mut self, pair: Pair) {
        self.seen += 1;
        if self.k == 0 {
            return;
        }
        if let Some(cutoff) = self.cutoff
            && pair > cutoff
        {
            return;
        }
        if self.buffer.len() >= self.k.saturating_mul(2) {
            self.compact();
        }
        self.buffer.push(pair);
    }

    /// Returns the number of candidates offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the configured k.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the k smallest pairs seen so far, sorted ascending, without
    /// consuming the selector.
    pub fn snapshot(&self) -> Vec<Pair> {
        let mut pairs = self.buffer.clone();
        select_k_smallest(&mut pairs, self.k);
        pairs
    }

    /// Consumes the selector and returns the k smallest pairs, ascending.
    pub fn finish(mut self) -> Vec<Pair> {
        select_k_smallest(&mut self.buffer, self.k);
        self.buffer
    }

    fn compact(&mut self) {
        retain_k_smallest(&mut self.buffer, self.k);
        self.cutoff = self.buffer.iter().max().copied();
        trace!(
            seen = self.seen,
            cutoff = self.cutoff.map(|p| p.sq_distance()),
            "compacted top-k buffer"
        );
    }
}

impl Extend<Pair> for TopKSelector {
    fn extend<I: IntoIterator<Item = Pair>>(&mut self, iter: I) {
        for pair in iter {
            self.push(pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full-sort reference.
    fn brute_force(pairs: &[Pair], k: usize) -> Vec<Pair> {
        let mut all = pairs.to_vec();
        all.sort();
        all.truncate(k);
        all
    }

    fn sample_pairs() -> Vec<Pair> {
        // Deterministic but scrambled distances with plenty of ties.
        let mut pairs = Vec::new();
        for i in 0..12 {
            for j in (i + 1)..12 {
                let d = ((i * 7 + j * 13) % 11) as u128;
                pairs.push(Pair::new(i, j, d));
            }
        }
        pairs
    }

    #[test]
    fn test_select_matches_full_sort() {
        let pairs = sample_pairs();
        for k in [0, 1, 2, 5, 17, 65, 66, 100] {
            let mut got = pairs.clone();
            select_k_smallest(&mut got, k);
            assert_eq!(got, brute_force(&pairs, k), "k = {k}");
        }
    }

    #[test]
    fn test_retain_leaves_k_elements() {
        let mut pairs = sample_pairs();
        retain_k_smallest(&mut pairs, 10);
        assert_eq!(pairs.len(), 10);
        let mut reference = brute_force(&sample_pairs(), 10);
        pairs.sort();
        reference.sort();
        assert_eq!(pairs, reference);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let pairs = sample_pairs();
        for k in [0, 1, 3, 8, 30, 66, 200] {
            let mut selector = TopKSelector::new(k);
            selector.extend(pairs.iter().copied());
            assert_eq!(selector.seen(), pairs.len());
            assert_eq!(selector.finish(), brute_force(&pairs, k), "k = {k}");
        }
    }

    #[test]
    fn test_incremental_order_independent() {
        let pairs = sample_pairs();
        let mut forward = TopKSelector::new(9);
        forward.extend(pairs.iter().copied());
        let mut backward = TopKSelector::new(9);
        backward.extend(pairs.iter().rev().copied());
        assert_eq!(forward.finish(), backward.finish());
    }

    #[test]
    fn test_snapshot_tracks_prefix() {
        let pairs = sample_pairs();
        let mut selector = TopKSelector::new(4);
        for (n, &pair) in pairs.iter().enumerate() {
            selector.push(pair);
            assert_eq!(selector.snapshot(), brute_force(&pairs[..=n], 4));
        }
    }

    #[test]
    fn test_k_zero_keeps_nothing() {
        let mut selector = TopKSelector::new(0);
        selector.push(Pair::new(0, 1, 0));
        assert_eq!(selector.seen(), 1);
        assert!(selector.finish().is_empty());
    }

    #[test]
    fn test_fewer_candidates_than_k() {
        let mut selector = TopKSelector::new(10);
        selector.push(Pair::new(1, 2, 5));
        selector.push(Pair::new(0, 1, 5));
        assert_eq!(
            selector.finish(),
            vec![Pair::new(0, 1, 5), Pair::new(1, 2, 5)]
        );
    }
}
