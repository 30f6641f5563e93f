//! Tabu Search configuration.

use crate::error::{BalanceError, Result};

/// Default number of rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default tabu list capacity.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Which entry leaves the tabu list when an append overflows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Eviction {
    /// Drop the oldest entry, keeping a window of the most recent states.
    #[default]
    Oldest,
    /// Drop the entry that was just appended. Once full, the list keeps
    /// the first `max_size` states it saw.
    Newest,
}

/// What a round does when the current candidate admits no move.
///
/// This only happens with a single processor or without tasks, and both
/// cases are already perfectly balanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyNeighborhood {
    /// End the search and return the best state found so far.
    #[default]
    Stop,
    /// Fail with [`BalanceError::DegenerateNeighborhood`].
    Error,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_balance::tabu::{Eviction, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_max_size(20)
///     .with_eviction(Eviction::Newest);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.max_size, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of rounds to run.
    pub max_iterations: usize,
    /// Capacity of the tabu list.
    pub max_size: usize,
    /// Overflow policy of the tabu list.
    pub eviction: Eviction,
    /// Outcome of a round without neighbors.
    pub empty_neighborhood: EmptyNeighborhood,
    /// Score neighbors with rayon. Requires the `parallel` feature;
    /// ignored otherwise. Results are identical either way.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_size: DEFAULT_MAX_SIZE,
            eviction: Eviction::default(),
            empty_neighborhood: EmptyNeighborhood::default(),
            parallel: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the tabu list overflow policy.
    pub fn with_eviction(mut self, eviction: Eviction) -> Self {
        self.eviction = eviction;
        self
    }

    /// Sets the empty-neighborhood outcome.
    pub fn with_empty_neighborhood(mut self, policy: EmptyNeighborhood) -> Self {
        self.empty_neighborhood = policy;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`BalanceError::InvalidTabuSize`] if `max_size` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.max_size < 1 {
            return Err(BalanceError::InvalidTabuSize(self.max_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.max_size, 100);
        assert_eq!(config.eviction, Eviction::Oldest);
        assert_eq!(config.empty_neighborhood, EmptyNeighborhood::Stop);
        assert!(!config.parallel);
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(10)
            .with_max_size(3)
            .with_eviction(Eviction::Newest)
            .with_empty_neighborhood(EmptyNeighborhood::Error)
            .with_parallel(true);

        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.max_size, 3);
        assert_eq!(config.eviction, Eviction::Newest);
        assert_eq!(config.empty_neighborhood, EmptyNeighborhood::Error);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_size() {
        let config = TabuConfig::default().with_max_size(0);
        assert_eq!(config.validate(), Err(BalanceError::InvalidTabuSize(0)));
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        assert!(TabuConfig::default().with_max_iterations(0).validate().is_ok());
    }
}
