//! Configuration for component ranking.

use crate::error::ComponentError;

/// Configuration for ranking the components of a finished forest.
///
/// # Example
///
/// ```
/// use nearlink_components::RankConfig;
///
/// let config = RankConfig::new(3);
/// assert_eq!(config.top_m(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankConfig {
    /// Number of largest components to report.
    top_m: usize,
}

impl RankConfig {
    /// Creates a configuration reporting the `top_m` largest components.
    pub fn new(top_m: usize) -> Self {
        Self { top_m }
    }

    /// Returns the number of components to report.
    pub fn top_m(&self) -> usize {
        self.top_m
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `top_m` is zero.
    pub fn validate(&self) -> Result<(), ComponentError> {
        if self.top_m < 1 {
            return Err(ComponentError::InvalidTopM { m: self.top_m });
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(RankConfig::default().top_m(), 3);
    }

    #[test]
    fn test_validate_zero() {
        assert_eq!(
            RankConfig::new(0).validate(),
            Err(ComponentError::InvalidTopM { m: 0 })
        );
    }
}
