//! Line layouts for offering a point set.

use std::ops::Range;

/// How a point set is split into lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Schedule {
    /// One line carrying every point once, in index order.
    #[default]
    Points,
    /// Line `i` carries points `i..n`; its first point is the line's anchor.
    ///
    /// Each line pairs the anchor with every later point, so the lines
    /// together cover the upper triangle of the pair matrix.
    Triangular,
}

impl Schedule {
    /// Returns the index ranges of the lines for `n_points` points.
    pub fn lines(self, n_points: usize) -> Box<dyn Iterator<Item = Range<usize>>> {
        match self {
            Self::Points => Box::new(std::iter::once(0..n_points)),
            Self::Triangular => Box::new((0..n_points).map(move |i| i..n_points)),
        }
    }

    /// Index the first valid slot of `line` must carry.
    pub fn first_index(self, line: usize) -> usize {
        match self {
            Self::Points => 0,
            Self::Triangular => line,
        }
    }

    /// Returns the schedule's name as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Triangular => "triangular",
        }
    }
}
