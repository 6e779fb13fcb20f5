//! Flat row-major storage for fixed-width integer points.

use crate::config::PairConfig;
use crate::error::PairError;

/// Owns the points of one run and assigns each a stable index.
///
/// Coordinates are stored row-major in a single buffer (`[len × dims]`).
/// Indices are assigned in insertion order starting at 0 and never change;
/// stored points are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointStore {
    coords: Vec<u32>,
    dims: usize,
    bit_width: u32,
    max_coordinate: u32,
}

impl PointStore {
    /// Creates an empty store for the layout described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PairError`] if the configuration is invalid.
    pub fn new(config: &PairConfig) -> Result<Self, PairError> {
        Self::with_capacity(config, 0)
    }

    /// Creates an empty store with room for `n_points` points.
    ///
    /// # Errors
    ///
    /// Returns [`PairError`] if the configuration is invalid.
    pub fn with_capacity(config: &PairConfig, n_points: usize) -> Result<Self, PairError> {
        config.validate()?;
        Ok(Self {
            coords: Vec::with_capacity(n_points * config.dims()),
            dims: config.dims(),
            bit_width: config.bit_width(),
            max_coordinate: config.max_coordinate(),
        })
    }

    /// Builds a store from a sequence of rows, indexing them in order.
    ///
    /// # Errors
    ///
    /// Returns [`PairError`] if the configuration is invalid or any row has
    /// the wrong length or an out-of-range coordinate.
    pub fn from_rows<R>(config: &PairConfig, rows: &[R]) -> Result<Self, PairError>
    where
        R: AsRef<[u32]>,
    {
        let mut store = Self::with_capacity(config, rows.len())?;
        for row in rows {
            store.push(row.as_ref())?;
        }
        Ok(store)
    }

    /// Appends a point and returns its assigned index.
    ///
    /// # Errors
    ///
    /// Returns [`PairError::DimensionMismatch`] if `point` does not have
    /// exactly `dims` coordinates, or [`PairError::CoordinateOutOfRange`] if
    /// a coordinate exceeds the configured bit width. The store is unchanged
    /// on error.
    pub fn push(&mut self, point: &[u32]) -> Result<usize, PairError> {
        let index = self.len();
        if point.len() != self.dims {
            return Err(PairError::DimensionMismatch {
                index,
                got: point.len(),
                dims: self.dims,
            });
        }
        if let Some((axis, &value)) = point
            .iter()
            .enumerate()
            .find(|&(_, &v)| v > self.max_coordinate)
        {
            return Err(PairError::CoordinateOutOfRange {
                index,
                axis,
                value,
                bit_width: self.bit_width,
            });
        }
        self.coords.extend_from_slice(point);
        Ok(index)
    }

    /// Returns the coordinates of point `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &[u32] {
        assert!(
            index < self.len(),
            "point index {index} out of range for {} points",
            self.len()
        );
        &self.coords[index * self.dims..(index + 1) * self.dims]
    }

    /// Iterates over stored points in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.coords.chunks_exact(self.dims)
    }

    /// Returns the number of stored points.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dims
    }

    /// Returns `true` if no point has been stored.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the number of coordinates per point.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the flat row-major coordinate buffer.
    pub fn as_flat(&self) -> &[u32] {
        &self.coords
    }
}
