//! Single-task-move neighborhood.
//!
//! The neighborhood of a state holds every assignment reachable by taking
//! one task off its processor and placing it on another one. Neighbors are
//! enumerated as [`Move`]s over the base state and only turned into full
//! [`State`]s when needed.
//!
//! Enumeration order is fixed (source ascending, then task index ascending,
//! then destination ascending) and selection logic depends on it for
//! tie-breaking.

use crate::state::State;

/// Relocation of one task to another processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Processor the task is taken from.
    pub source: usize,
    /// Index of the task in the source's sorted sequence.
    pub task_index: usize,
    /// Processor the task is placed on. Never equal to `source`.
    pub destination: usize,
}

impl Move {
    /// Weight of the task this move relocates.
    ///
    /// # Panics
    ///
    /// Panics if the move does not fit `state`.
    pub fn weight(&self, state: &State) -> u64 {
        state.tasks(self.source)[self.task_index]
    }

    /// Materializes the neighbor this move produces from `state`.
    ///
    /// The result is an independent copy; `state` is left untouched.
    pub fn apply(&self, state: &State) -> State {
        let mut next = state.clone();
        next.relocate(self.source, self.task_index, self.destination);
        next
    }
}

/// Lazy iterator over the moves of a state, in canonical order.
#[derive(Debug, Clone)]
pub struct Moves<'a> {
    state: &'a State,
    source: usize,
    task_index: usize,
    destination: usize,
}

impl Iterator for Moves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let processors = self.state.processor_count();
        loop {
            if self.source >= processors {
                return None;
            }
            if self.task_index >= self.state.tasks(self.source).len() {
                self.source += 1;
                self.task_index = 0;
                self.destination = 0;
                continue;
            }
            if self.destination >= processors {
                self.task_index += 1;
                self.destination = 0;
                continue;
            }
            if self.destination == self.source {
                self.destination += 1;
                continue;
            }

            let mv = Move {
                source: self.source,
                task_index: self.task_index,
                destination: self.destination,
            };
            self.destination += 1;
            return Some(mv);
        }
    }
}

/// Enumerates the moves of `state` without building any neighbor.
pub fn moves(state: &State) -> Moves<'_> {
    Moves {
        state,
        source: 0,
        task_index: 0,
        destination: 0,
    }
}

/// Number of neighbors of `state`: `T·(P−1)`.
pub fn neighbor_count(state: &State) -> usize {
    state.task_count() * state.processor_count().saturating_sub(1)
}

/// Builds every neighbor of `state` as an independent [`State`].
///
/// # Examples
///
/// ```
/// use u_balance::{initial_state, neighbors};
///
/// let s0 = initial_state(3, &[5, 3, 8]).unwrap();
/// let ns = neighbors(&s0);
/// assert_eq!(ns.len(), 6);
/// assert_eq!(ns[0].tasks(0), &[5, 8]);
/// assert_eq!(ns[0].tasks(1), &[3]);
/// ```
pub fn neighbors(state: &State) -> Vec<State> {
    let mut out = Vec::with_capacity(neighbor_count(state));
    out.extend(moves(state).map(|mv| mv.apply(state)));
    out
}
