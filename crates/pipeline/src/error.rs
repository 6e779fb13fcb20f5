//! Error types for the nearlink-pipeline crate.

use nearlink_components::ComponentError;
use nearlink_pairs::PairError;
use nearlink_stream::StreamError;

/// Error type for all fallible operations in the nearlink-pipeline crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    /// Point layout, storage or distance configuration failed.
    #[error(transparent)]
    Pairs(#[from] PairError),

    /// Component ranking failed.
    #[error(transparent)]
    Components(#[from] ComponentError),

    /// The ingest stream failed or broke its protocol.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Returned when the expected point count is configured as zero.
    #[error("expected point count must be >= 1, got 0")]
    InvalidExpectedCount,

    /// Returned when the input does not hold the configured number of points.
    #[error("expected {expected} points, got {got}")]
    PointCountMismatch {
        /// Configured point count.
        expected: usize,
        /// Points actually supplied.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PipelineError::InvalidExpectedCount.to_string(),
            "expected point count must be >= 1, got 0"
        );
        assert_eq!(
            PipelineError::PointCountMismatch {
                expected: 4,
                got: 3
            }
            .to_string(),
            "expected 4 points, got 3"
        );
    }

    #[test]
    fn test_wrapped_messages_are_transparent() {
        let inner = StreamError::Truncated;
        assert_eq!(PipelineError::from(inner.clone()).to_string(), inner.to_string());
        let inner = ComponentError::InvalidTopM { m: 0 };
        assert_eq!(PipelineError::from(inner.clone()).to_string(), inner.to_string());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync + 'static>() {}
        assert_impl::<PipelineError>();
    }
}
