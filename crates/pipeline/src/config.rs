//! Configuration for a full pipeline run.

use nearlink_components::RankConfig;
use nearlink_pairs::PairConfig;
use nearlink_stream::StreamConfig;

use crate::error::PipelineError;

/// How a run is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Materialise every point, then run each stage in turn.
    #[default]
    Batch,
    /// Run ingestion, evaluation and aggregation as concurrent stages.
    Streaming,
}

/// Configuration for a pipeline run.
///
/// Bundles the per-stage configurations with the execution mode and an
/// optional expected point count.
///
/// # Example
///
/// ```
/// use nearlink_components::RankConfig;
/// use nearlink_pairs::PairConfig;
/// use nearlink_pipeline::{Mode, PipelineConfig};
///
/// let config = PipelineConfig::new(PairConfig::new(1000), RankConfig::new(3))
///     .with_mode(Mode::Streaming)
///     .with_expected_points(1000);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pairs: PairConfig,
    rank: RankConfig,
    stream: StreamConfig,
    /// When set, the input must hold exactly this many points.
    expected_points: Option<usize>,
    mode: Mode,
}

impl PipelineConfig {
    /// Creates a batch-mode configuration with the default stream settings.
    pub fn new(pairs: PairConfig, rank: RankConfig) -> Self {
        Self {
            pairs,
            rank,
            stream: StreamConfig::default(),
            expected_points: None,
            mode: Mode::Batch,
        }
    }

    /// Sets the ingest stream configuration.
    pub fn with_stream(mut self, stream: StreamConfig) -> Self {
        self.stream = stream;
        self
    }

    /// Requires the input to hold exactly `n` points.
    pub fn with_expected_points(mut self, n: usize) -> Self {
        self.expected_points = Some(n);
        self
    }

    /// Sets the execution mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the pair selection configuration.
    pub fn pairs(&self) -> &PairConfig {
        &self.pairs
    }

    /// Returns the ranking configuration.
    pub fn rank(&self) -> &RankConfig {
        &self.rank
    }

    /// Returns the ingest stream configuration.
    pub fn stream(&self) -> &StreamConfig {
        &self.stream
    }

    /// Returns the expected point count, if one is set.
    pub fn expected_points(&self) -> Option<usize> {
        self.expected_points
    }

    /// Returns the execution mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Validates every stage configuration.
    ///
    /// The stream configuration is checked in both modes so a config file
    /// that is only ever run in batch mode still fails on bad stream values.
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.pairs.validate()?;
        self.rank.validate()?;
        self.stream.validate()?;
        if self.expected_points == Some(0) {
            return Err(PipelineError::InvalidExpectedCount);
        }
        Ok(())
    }

    /// Checks `got` against the expected point count.
    pub(crate) fn check_point_count(&self, got: usize) -> Result<(), PipelineError> {
        match self.expected_points {
            Some(expected) if expected != got => {
                Err(PipelineError::PointCountMismatch { expected, got })
            }
            _ => Ok(()),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(PairConfig::default(), RankConfig::default())
    }
}
