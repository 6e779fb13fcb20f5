//! Pipelined execution: ingestion, evaluation and aggregation overlap.
//!
//! ```text
//! producer thread ──ingest port──▶ evaluator thread ──pair channel──▶ caller
//!  offer_points()                   PointStore + TopKSelector          UnionFind
//!  Frame::End                       PairFrame::End                     rank_components()
//! ```
//!
//! Every boundary is a bounded channel, so a fast stage stalls on a slow
//! one. Each channel closes with a sentinel; a channel that closes without
//! one means the upstream stage failed, and its error is reported instead.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread::{self, ScopedJoinHandle};

use nearlink_components::UnionFind;
use nearlink_pairs::{ClosestPairs, Pair, PointStore, TopKSelector, candidate_count, sq_distance};
use nearlink_stream::{Consumer, ConsumerStats, Schedule, StreamError, ingest_port};
use tracing::debug;

use crate::aggregate::finish;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::solution::{IngestStats, Solution};

/// What travels from the evaluator to the aggregator.
enum PairFrame {
    Pair(Pair),
    End,
}

/// What the evaluator reports once its input is exhausted.
struct Evaluated {
    n_points: usize,
    n_candidates: usize,
    ingest: ConsumerStats,
}

/// Runs the pipeline with ingestion, evaluation and aggregation on
/// concurrent stages.
///
/// Produces the same pairs and ranking as
/// [`solve_batch`](crate::solve_batch) for the same input and
/// configuration, under either schedule.
///
/// # Errors
///
/// Returns [`PipelineError`] if the configuration is invalid, the point
/// count differs from the expected count, a row is malformed, or the ingest
/// stream breaks its protocol.
///
/// # Panics
///
/// Re-raises a panic from any stage.
#[tracing::instrument(
    skip_all,
    fields(
        n_points = rows.len(),
        schedule = config.stream().schedule().name(),
        batch_size = config.stream().batch_size()
    )
)]
pub fn solve_streaming<R>(rows: &[R], config: &PipelineConfig) -> Result<Solution, PipelineError>
where
    R: AsRef<[u32]> + Sync,
{
    config.validate()?;
    config.check_point_count(rows.len())?;

    let n_points = rows.len();
    let (mut producer, consumer) = ingest_port::<Vec<u32>>(config.stream())?;
    let (pair_tx, pair_rx) = sync_channel(config.stream().capacity());

    thread::scope(|scope| -> Result<Solution, PipelineError> {
        let produced = scope.spawn(move || {
            producer.offer_points(n_points, |i| rows[i].as_ref().to_vec())?;
            producer.finish()
        });
        let evaluated = scope.spawn(move || evaluate(consumer, &pair_tx, config));

        let merged = aggregate(&pair_rx, n_points);

        // The evaluator's error is the root cause when both stages fail.
        let evaluated = join(evaluated)?;
        let produced = join(produced)?;
        let (forest, pairs) = merged.ok_or(StreamError::Truncated)?;

        let closest = ClosestPairs::new(pairs, evaluated.n_points, evaluated.n_candidates);
        let ranking = finish(forest, config.rank())?;
        let ingest = IngestStats {
            producer: produced,
            consumer: evaluated.ingest,
        };
        debug!(
            stalls = ingest.producer.stalls,
            padding = ingest.consumer.padding,
            "streaming run complete"
        );
        Ok(Solution::new(closest, ranking, Some(ingest)))
    })
}

/// Waits for a stage, re-raising its panic on this thread.
fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
}

/// Evaluator stage: stores incoming points, evaluates the pairs the schedule
/// exposes and keeps the K closest, then forwards them in ascending order.
fn evaluate(
    mut consumer: Consumer<Vec<u32>>,
    pair_tx: &SyncSender<PairFrame>,
    config: &PipelineConfig,
) -> Result<Evaluated, PipelineError> {
    let schedule = config.stream().schedule();
    let capacity = config.expected_points().unwrap_or(0);
    let mut store = PointStore::with_capacity(config.pairs(), capacity)?;
    let mut selector = TopKSelector::new(config.pairs().k());
    let mut anchor: Option<usize> = None;

    while let Some(batch) = consumer.next_batch()? {
        let line_end = batch.is_line_end();
        for item in batch.into_valid() {
            if item.index == store.len() {
                store.push(&item.value)?;
            }
            match schedule {
                Schedule::Points => {
                    let new = store.get(item.index);
                    for (i, old) in store.iter().enumerate().take(item.index) {
                        selector.push(Pair::new(i, item.index, sq_distance(old, new)));
                    }
                }
                Schedule::Triangular => match anchor {
                    None => anchor = Some(item.index),
                    Some(a) => {
                        let d = sq_distance(store.get(a), store.get(item.index));
                        selector.push(Pair::new(a, item.index, d));
                    }
                },
            }
        }
        if line_end {
            anchor = None;
        }
    }

    let n_points = store.len();
    let n_candidates = candidate_count(n_points);
    debug_assert_eq!(selector.seen(), n_candidates);
    debug!(n_points, n_candidates, k = selector.k(), "evaluation complete");

    for pair in selector.finish() {
        pair_tx
            .send(PairFrame::Pair(pair))
            .map_err(|_| StreamError::Disconnected)?;
    }
    pair_tx
        .send(PairFrame::End)
        .map_err(|_| StreamError::Disconnected)?;

    Ok(Evaluated {
        n_points,
        n_candidates,
        ingest: consumer.stats(),
    })
}

/// Aggregator stage: merges pairs as they arrive.
///
/// Returns `None` if the channel closed before its end marker.
fn aggregate(pair_rx: &Receiver<PairFrame>, n_points: usize) -> Option<(UnionFind, Vec<Pair>)> {
    let mut forest = UnionFind::new(n_points);
    let mut pairs = Vec::new();
    loop {
        match pair_rx.recv().ok()? {
            PairFrame::Pair(pair) => {
                let (i, j) = pair.indices();
                forest.union(i, j);
                pairs.push(pair);
            }
            PairFrame::End => break,
        }
    }
    debug!(merged = forest.merges(), n_sets = forest.n_sets(), "aggregation complete");
    Some((forest, pairs))
}
