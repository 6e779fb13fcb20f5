//! Configuration for the ingest port.

use crate::error::StreamError;
use crate::schedule::Schedule;

/// Configuration for an ingest port.
///
/// # Example
///
/// ```
/// use nearlink_stream::{Schedule, StreamConfig};
///
/// let config = StreamConfig::new(4)
///     .with_capacity(2)
///     .with_schedule(Schedule::Triangular);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Slots per batch.
    batch_size: usize,
    /// Frames the channel buffers before the producer stalls.
    capacity: usize,
    /// Line layout the producer follows and the consumer checks.
    schedule: Schedule,
}

impl StreamConfig {
    /// Creates a configuration with the given batch size.
    ///
    /// Defaults: `capacity = 16`, `schedule = Points`.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            capacity: 16,
            schedule: Schedule::Points,
        }
    }

    /// Sets the channel capacity in frames.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the line schedule.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Returns the number of slots per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the channel capacity in frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the line schedule.
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `batch_size` or `capacity` is zero.
    pub fn validate(&self) -> Result<(), StreamError> {
        if self.batch_size < 1 {
            return Err(StreamError::InvalidBatchSize {
                batch_size: self.batch_size,
            });
        }
        if self.capacity < 1 {
            return Err(StreamError::InvalidCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
