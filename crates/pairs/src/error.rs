//! Error types for the nearlink-pairs crate.

/// Error type for all fallible operations in the nearlink-pairs crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairError {
    /// Returned when the dimension count is zero.
    #[error("dims must be >= 1, got {dims}")]
    InvalidDims {
        /// The invalid dimension count.
        dims: usize,
    },

    /// Returned when the coordinate bit width is zero or wider than a `u32`.
    #[error("bit_width must be in 1..=32, got {bit_width}")]
    InvalidBitWidth {
        /// The invalid bit width.
        bit_width: u32,
    },

    /// Returned when a point has the wrong number of coordinates.
    #[error("point {index} has {got} coordinates, expected {dims}")]
    DimensionMismatch {
        /// Index the point would have been assigned.
        index: usize,
        /// Number of coordinates supplied.
        got: usize,
        /// Configured dimension count.
        dims: usize,
    },

    /// Returned when a coordinate does not fit in the configured bit width.
    #[error("point {index} axis {axis}: coordinate {value} exceeds {bit_width}-bit range")]
    CoordinateOutOfRange {
        /// Index the point would have been assigned.
        index: usize,
        /// Axis of the offending coordinate.
        axis: usize,
        /// The offending value.
        value: u32,
        /// Configured coordinate bit width.
        bit_width: u32,
    },
}
