//! Load-imbalance scoring.
//!
//! The fitness of an assignment is `Σ_p |mean − load_p|`, where `mean` is
//! the total task weight divided by the processor count. Lower is better
//! and `0.0` means every processor carries exactly the mean load.

use crate::neighbor::Move;
use crate::state::State;

/// Scores `state` by its summed absolute deviation from the mean load.
///
/// # Examples
///
/// ```
/// use u_balance::{fitness, initial_state};
///
/// let s0 = initial_state(3, &[5, 3, 8]).unwrap();
/// let mean = 16.0 / 3.0;
/// assert_eq!(fitness(&s0), (mean - 16.0_f64).abs() + mean + mean);
/// ```
pub fn fitness(state: &State) -> f64 {
    LoadProfile::new(state).fitness()
}

/// Per-processor loads of a base state, cached for scoring its neighbors.
///
/// Scoring a move through the profile costs `O(P)` and performs the same
/// floating-point operations, in the same order, as [`fitness`] on the
/// materialized neighbor, so both give identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadProfile {
    loads: Vec<u64>,
    mean: f64,
}

impl LoadProfile {
    /// Captures the loads of `state`.
    pub fn new(state: &State) -> Self {
        let loads = state.loads();
        let total: u64 = loads.iter().sum();
        let mean = total as f64 / loads.len() as f64;
        Self { loads, mean }
    }

    /// Mean load per processor.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Loads in processor order.
    pub fn loads(&self) -> &[u64] {
        &self.loads
    }

    /// Fitness of the base state.
    pub fn fitness(&self) -> f64 {
        self.loads
            .iter()
            .fold(0.0, |acc, &load| acc + (self.mean - load as f64).abs())
    }

    /// Fitness of the neighbor produced by `mv`, where `weight` is the
    /// weight of the task it relocates.
    pub fn fitness_after(&self, mv: &Move, weight: u64) -> f64 {
        self.loads.iter().enumerate().fold(0.0, |acc, (p, &load)| {
            let load = if p == mv.source {
                load - weight
            } else if p == mv.destination {
                load + weight
            } else {
                load
            };
            acc + (self.mean - load as f64).abs()
        })
    }
}
