//! The closest-pair component pipeline, end to end.
//!
//! Given N points, selects the K closest pairs, merges them into connected
//! components and reports the M largest components with the product of
//! their sizes. Two execution modes give identical answers:
//!
//! | Mode | Entry point | Shape |
//! |------|-------------|-------|
//! | [`Mode::Batch`] | [`solve_batch`] | Store all, select in parallel, merge, rank |
//! | [`Mode::Streaming`] | [`solve_streaming`] | Producer, evaluator and aggregator overlap |
//!
//! # Quick start
//!
//! ```
//! use nearlink_components::RankConfig;
//! use nearlink_pairs::PairConfig;
//! use nearlink_pipeline::{PipelineConfig, solve};
//!
//! let points = [[0u32, 0, 0], [1, 0, 0], [0, 1, 0], [10, 10, 10]];
//! let config = PipelineConfig::new(PairConfig::new(2).with_bit_width(8), RankConfig::new(2));
//!
//! let solution = solve(&points, &config).unwrap();
//! assert_eq!(solution.sizes(), vec![3, 1]);
//! assert_eq!(solution.product(), 3);
//! ```

mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod solution;
pub mod streaming;

pub use batch::solve_batch;
pub use config::{Mode, PipelineConfig};
pub use error::PipelineError;
pub use solution::{IngestStats, Solution};
pub use streaming::solve_streaming;

/// Runs the pipeline in the configured [`Mode`].
///
/// # Errors
///
/// Returns [`PipelineError`] from the selected mode.
pub fn solve<R>(rows: &[R], config: &PipelineConfig) -> Result<Solution, PipelineError>
where
    R: AsRef<[u32]> + Sync,
{
    match config.mode() {
        Mode::Batch => solve_batch(rows, config),
        Mode::Streaming => solve_streaming(rows, config),
    }
}
