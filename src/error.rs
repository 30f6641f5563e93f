//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while configuring or running a balancing search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Fewer than one processor was requested.
    #[error("must provide at least one processor, got {0}")]
    InvalidProcessorCount(usize),

    /// A task has zero weight.
    #[error("task at index {index} has zero weight")]
    InvalidTask {
        /// Position of the offending task in the input list.
        index: usize,
    },

    /// The task weights do not sum within `u64`.
    #[error("total task weight overflows u64")]
    LoadOverflow,

    /// The tabu list was given no room.
    #[error("tabu list size must be at least 1, got {0}")]
    InvalidTabuSize(usize),

    /// The current candidate admits no move and the configuration asks
    /// for this to be reported.
    #[error("state admits no neighbors at iteration {iteration}")]
    DegenerateNeighborhood {
        /// Round in which the empty neighborhood was met.
        iteration: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BalanceError>;
