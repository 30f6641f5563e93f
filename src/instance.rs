//! Reproducible random task lists.
//!
//! Only benchmarks and tests draw instances from here; the search itself
//! never uses randomness.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator of task weights.
///
/// # Examples
///
/// ```
/// use u_balance::instance::TaskGenerator;
///
/// let tasks = TaskGenerator::new(42).with_weight_range(1..=9).generate(20);
/// assert_eq!(tasks.len(), 20);
/// assert!(tasks.iter().all(|&w| (1..=9).contains(&w)));
/// assert_eq!(tasks, TaskGenerator::new(42).with_weight_range(1..=9).generate(20));
/// ```
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    seed: u64,
    weights: RangeInclusive<u64>,
}

impl TaskGenerator {
    /// Creates a generator drawing weights in `1..=30`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            weights: 1..=30,
        }
    }

    /// Sets the weight range. A lower bound of 0 is raised to 1, and an
    /// empty range collapses to its lower bound.
    pub fn with_weight_range(mut self, weights: RangeInclusive<u64>) -> Self {
        let lo = (*weights.start()).max(1);
        let hi = (*weights.end()).max(lo);
        self.weights = lo..=hi;
        self
    }

    /// Draws `count` weights.
    pub fn generate(&self, count: usize) -> Vec<u64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..count)
            .map(|_| rng.random_range(self.weights.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproducible() {
        let generator = TaskGenerator::new(7);
        assert_eq!(generator.generate(50), generator.generate(50));
    }

    #[test]
    fn test_zero_lower_bound_raised() {
        let tasks = TaskGenerator::new(1).with_weight_range(0..=2).generate(200);
        assert!(tasks.iter().all(|&w| (1..=2).contains(&w)));
    }

    #[test]
    fn test_inverted_range_collapses() {
        let tasks = TaskGenerator::new(3).with_weight_range(5..=2).generate(10);
        assert!(tasks.iter().all(|&w| w == 5));
    }
}
