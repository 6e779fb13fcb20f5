//! Configuration for closest-pair queries.

use crate::error::PairError;

/// Configuration for a closest-pair query.
///
/// Describes the point layout (dimension count and coordinate bit width) and
/// how many closest pairs to keep. Use the builder methods to customise.
///
/// # Example
///
/// ```
/// use nearlink_pairs::PairConfig;
///
/// let config = PairConfig::new(10).with_dims(3).with_bit_width(16);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairConfig {
    /// Number of closest pairs to keep.
    k: usize,
    /// Coordinates per point.
    dims: usize,
    /// Width of every coordinate in bits.
    bit_width: u32,
}

impl PairConfig {
    /// Creates a new configuration keeping the `k` closest pairs.
    ///
    /// Defaults: `dims = 3`, `bit_width = 24`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            dims: 3,
            bit_width: 24,
        }
    }

    /// Sets the number of coordinates per point.
    pub fn with_dims(mut self, dims: usize) -> Self {
        self.dims = dims;
        self
    }

    /// Sets the coordinate bit width.
    pub fn with_bit_width(mut self, bit_width: u32) -> Self {
        self.bit_width = bit_width;
        self
    }

    /// Sets the number of closest pairs to keep.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Returns the number of closest pairs to keep.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of coordinates per point.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the coordinate bit width.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Largest coordinate value admitted by the bit width.
    pub fn max_coordinate(&self) -> u32 {
        if self.bit_width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.bit_width) - 1
        }
    }

    /// Validates this configuration.
    ///
    /// `k = 0` is valid and yields an empty selection. Returns an error if
    /// `dims` is zero or `bit_width` is outside `1..=32`. Every such layout
    /// has exact squared distances.
    pub fn validate(&self) -> Result<(), PairError> {
        if self.dims < 1 {
            return Err(PairError::InvalidDims { dims: self.dims });
        }
        if self.bit_width < 1 || self.bit_width > 32 {
            return Err(PairError::InvalidBitWidth {
                bit_width: self.bit_width,
            });
        }
        Ok(())
    }
}

impl Default for PairConfig {
    fn default() -> Self {
        Self::new(1000)
    }
}
