//! Task-to-processor assignments.
//!
//! A [`State`] maps every processor index in `0..P` to the weights of the
//! tasks it currently runs. Each per-processor sequence is kept sorted
//! ascending, which gives every assignment a single canonical form: two
//! states are equal exactly when every processor holds the same sequence.

use std::fmt;

use crate::error::{BalanceError, Result};
use crate::fitness::fitness;

/// A complete assignment of tasks to processors.
///
/// # Examples
///
/// ```
/// use u_balance::initial_state;
///
/// let s0 = initial_state(3, &[5, 3, 8]).unwrap();
/// assert_eq!(s0.tasks(0), &[3, 5, 8]);
/// assert!(s0.tasks(1).is_empty());
/// assert_eq!(s0.total_load(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<u64>>", into = "Vec<Vec<u64>>")
)]
pub struct State {
    processors: Vec<Vec<u64>>,
}

/// Sums `weights`, rejecting zero weights and totals past `u64::MAX`.
///
/// Every load and partial sum of a state is bounded by its total, so a
/// state that passes this check can be summed freely.
fn checked_total<'a>(weights: impl IntoIterator<Item = &'a u64>) -> Result<u64> {
    weights
        .into_iter()
        .enumerate()
        .try_fold(0u64, |total, (index, &weight)| {
            if weight == 0 {
                return Err(BalanceError::InvalidTask { index });
            }
            total.checked_add(weight).ok_or(BalanceError::LoadOverflow)
        })
}

impl State {
    /// Builds a state from an explicit assignment, one task list per
    /// processor. Each list is sorted into canonical order.
    ///
    /// # Errors
    ///
    /// [`BalanceError::InvalidProcessorCount`] if `processors` is empty,
    /// [`BalanceError::InvalidTask`] if any weight is zero (the index
    /// counts tasks in processor order), [`BalanceError::LoadOverflow`] if
    /// the weights do not sum within `u64`.
    pub fn from_assignment(mut processors: Vec<Vec<u64>>) -> Result<Self> {
        if processors.is_empty() {
            return Err(BalanceError::InvalidProcessorCount(0));
        }
        checked_total(processors.iter().flatten())?;
        for tasks in &mut processors {
            tasks.sort_unstable();
        }
        Ok(Self { processors })
    }

    /// Number of processors `P`.
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Total number of tasks `T` across all processors.
    pub fn task_count(&self) -> usize {
        self.processors.iter().map(Vec::len).sum()
    }

    /// Sorted task weights assigned to `processor`.
    ///
    /// # Panics
    ///
    /// Panics if `processor >= self.processor_count()`.
    pub fn tasks(&self, processor: usize) -> &[u64] {
        &self.processors[processor]
    }

    /// Iterates over the per-processor task lists in processor order.
    pub fn processors(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        self.processors.iter().map(Vec::as_slice)
    }

    /// Summed weight on `processor`.
    pub fn load(&self, processor: usize) -> u64 {
        self.processors[processor].iter().sum()
    }

    /// Summed weight of every processor, in processor order.
    pub fn loads(&self) -> Vec<u64> {
        self.processors.iter().map(|tasks| tasks.iter().sum()).collect()
    }

    /// Summed weight of all tasks.
    pub fn total_load(&self) -> u64 {
        self.processors.iter().flatten().sum()
    }

    /// All task weights, sorted ascending, regardless of placement.
    ///
    /// Two states reachable from one another by moves always return the
    /// same multiset.
    pub fn task_multiset(&self) -> Vec<u64> {
        let mut all: Vec<u64> = self.processors.iter().flatten().copied().collect();
        all.sort_unstable();
        all
    }

    /// Moves the task at `index` on `source` to `destination`, keeping the
    /// destination sorted.
    pub(crate) fn relocate(&mut self, source: usize, index: usize, destination: usize) {
        let weight = self.processors[source].remove(index);
        let target = &mut self.processors[destination];
        let at = target.partition_point(|&w| w <= weight);
        target.insert(at, weight);
    }
}

/// Builds the starting assignment: every task, sorted ascending, on
/// processor 0 and all other processors empty.
///
/// # Errors
///
/// [`BalanceError::InvalidProcessorCount`] when `processor_count < 1`,
/// [`BalanceError::InvalidTask`] when a task has zero weight,
/// [`BalanceError::LoadOverflow`] when the weights do not sum within `u64`.
pub fn initial_state(processor_count: usize, tasks: &[u64]) -> Result<State> {
    if processor_count < 1 {
        return Err(BalanceError::InvalidProcessorCount(processor_count));
    }
    checked_total(tasks)?;

    let mut processors = vec![Vec::new(); processor_count];
    let mut first = tasks.to_vec();
    first.sort_unstable();
    processors[0] = first;

    Ok(State { processors })
}

/// Renders one line per processor with its tasks and load, then a blank
/// line and the fitness of the whole assignment.
///
/// ```
/// use u_balance::{format_result, initial_state};
///
/// let s0 = initial_state(2, &[2, 1]).unwrap();
/// assert_eq!(format_result(&s0), "0\t|\t[1, 2]\t->\t3\n1\t|\t[]\t->\t0\n\ndelta: 3.0");
/// ```
pub fn format_result(state: &State) -> String {
    state.to_string()
}

impl TryFrom<Vec<Vec<u64>>> for State {
    type Error = BalanceError;

    fn try_from(processors: Vec<Vec<u64>>) -> Result<Self> {
        Self::from_assignment(processors)
    }
}

impl From<State> for Vec<Vec<u64>> {
    fn from(state: State) -> Self {
        state.processors
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, tasks) in self.processors().enumerate() {
            let load: u64 = tasks.iter().sum();
            writeln!(f, "{id}\t|\t{tasks:?}\t->\t{load}")?;
        }
        write!(f, "\ndelta: {:?}", fitness(self))
    }
}
