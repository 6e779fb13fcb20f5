//! Error types for the nearlink-components crate.

/// Error type for all fallible operations in the nearlink-components crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    /// Returned when the number of components to report is zero.
    #[error("top_m must be >= 1, got {m}")]
    InvalidTopM {
        /// The invalid m value.
        m: usize,
    },

    /// Returned when the product of the reported sizes does not fit in a `u64`.
    #[error("product of component sizes {sizes:?} overflows u64")]
    ProductOverflow {
        /// The sizes whose product overflowed.
        sizes: Vec<usize>,
    },
}
