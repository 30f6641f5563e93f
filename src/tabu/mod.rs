//! Tabu Search (TS) over task assignments.
//!
//! A single-solution trajectory metaheuristic that keeps a bounded memory
//! (the tabu list) of recently accepted states and refuses to move back to
//! them, so the search keeps walking instead of settling into the first
//! local optimum.
//!
//! The search is fully deterministic: no randomness, fixed neighbor order,
//! and first-strictly-better tie-breaking.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::{
    EmptyNeighborhood, Eviction, TabuConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SIZE,
};
pub use list::TabuList;
pub use runner::{tabu_search, Step, TabuResult, TabuRunner, TabuSearch};
