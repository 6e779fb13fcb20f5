//! Error types for the nearlink-stream crate.

/// Error type for all fallible operations in the nearlink-stream crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// Returned when the configured batch size is zero.
    #[error("batch_size must be >= 1, got {batch_size}")]
    InvalidBatchSize {
        /// The invalid batch size.
        batch_size: usize,
    },

    /// Returned when the configured channel capacity is zero.
    #[error("capacity must be >= 1, got {capacity}")]
    InvalidCapacity {
        /// The invalid capacity.
        capacity: usize,
    },

    /// Returned when a batch does not carry exactly `batch_size` slots.
    #[error("batch has {got} slots, expected {expected}")]
    BatchSizeMismatch {
        /// Configured batch size.
        expected: usize,
        /// Slots in the offending batch.
        got: usize,
    },

    /// Returned when a valid slot's index breaks the schedule's order.
    #[error("line {line}: expected index {expected}, got {got}")]
    IndexOutOfOrder {
        /// Line the slot belongs to.
        line: usize,
        /// Index the schedule requires next.
        expected: usize,
        /// Index actually received.
        got: usize,
    },

    /// Returned when the end marker arrives while a line is still open.
    #[error("end of stream inside line {line}: its last batch had no line end")]
    UnterminatedLine {
        /// The open line.
        line: usize,
    },

    /// Returned when the producer went away without sending the end marker.
    #[error("stream closed before the end marker")]
    Truncated,

    /// Returned when the consumer went away while the producer was offering.
    #[error("consumer disconnected")]
    Disconnected,
}
