//! Deterministic tabu search for balancing weighted tasks across identical
//! processors.
//!
//! Given `P` processors and a list of positive task weights, the search
//! looks for an assignment whose per-processor loads are as close as
//! possible to the mean load. The pieces, leaf-first:
//!
//! - [`state`]: task-to-processor assignments in canonical (sorted) form.
//! - [`neighbor`]: the single-task-move neighborhood, enumerated as
//!   [`Move`] deltas in a fixed order.
//! - [`fitness`]: summed absolute deviation from the mean load.
//! - [`tabu`]: the tabu list, configuration, and search loop.
//! - [`instance`]: seeded random task lists for experiments.
//!
//! # Example
//!
//! ```
//! use u_balance::{fitness, format_result, initial_state, tabu_search};
//!
//! let tasks = [6, 4, 5, 6, 7, 8, 5, 6, 7, 9, 12, 5, 9, 34, 11, 2, 3, 4, 6, 21];
//! let best = tabu_search(4, &tasks, 100, 100).unwrap();
//! assert!(fitness(&best) < fitness(&initial_state(4, &tasks).unwrap()));
//! println!("{}", format_result(&best));
//! ```

pub mod error;
pub mod fitness;
pub mod instance;
pub mod neighbor;
pub mod state;
pub mod tabu;

pub use error::{BalanceError, Result};
pub use fitness::{fitness, LoadProfile};
pub use neighbor::{moves, neighbor_count, neighbors, Move};
pub use state::{format_result, initial_state, State};
pub use tabu::{tabu_search, TabuConfig, TabuResult, TabuRunner};
