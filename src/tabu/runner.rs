//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Put every task on processor 0; this state is both the best state and
//!    the current candidate, and the first tabu entry
//! 2. At each round:
//!    a. Enumerate the moves of the current candidate
//!    b. Seed the new candidate with the first neighbor, tabu or not
//!    c. Scan the neighbors in order and take any non-tabu neighbor that is
//!    strictly better than the running candidate
//!    d. Update the best state if the candidate beats it
//!    e. Append the candidate to the tabu list
//! 3. Stop after `max_iterations` rounds
//!
//! When every neighbor is tabu the candidate stays at the seed, which may
//! be worse than the previous candidate and may already be tabu. The search
//! can cycle in that case.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use log::{debug, trace, warn};

use super::config::{EmptyNeighborhood, TabuConfig};
use super::list::TabuList;
use crate::error::{BalanceError, Result};
use crate::fitness::{fitness, LoadProfile};
use crate::neighbor::{moves, Move};
use crate::state::{initial_state, State};

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best state found.
    pub best: State,
    /// Fitness of the best state.
    pub best_fitness: f64,
    /// Rounds executed.
    pub iterations: usize,
    /// Round (1-based) that produced the best state; 0 if the initial state
    /// was never improved.
    pub best_iteration: usize,
    /// Best fitness after each round.
    pub fitness_history: Vec<f64>,
}

/// Outcome of [`TabuSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A round ran.
    Advanced,
    /// No round ran: the iteration budget is spent or the candidate has no
    /// neighbors.
    Finished,
}

/// A Tabu Search in progress.
///
/// Holds the best state, the current candidate and the tabu list, and
/// advances one round per [`step`](Self::step).
///
/// # Examples
///
/// ```
/// use u_balance::tabu::{Step, TabuConfig, TabuSearch};
///
/// let config = TabuConfig::default().with_max_iterations(5);
/// let mut search = TabuSearch::new(2, &[4, 3, 1], config).unwrap();
/// while search.step().unwrap() == Step::Advanced {
///     assert!(search.tabu_list().len() <= 100);
/// }
/// assert_eq!(search.iteration(), 5);
/// assert_eq!(search.best_fitness(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch {
    config: TabuConfig,
    best: State,
    best_fitness: f64,
    best_iteration: usize,
    candidate: State,
    tabu: TabuList,
    iteration: usize,
    history: Vec<f64>,
    exhausted: bool,
}

impl TabuSearch {
    /// Prepares a search from the all-on-processor-0 assignment.
    ///
    /// # Errors
    ///
    /// Any error of [`initial_state`] or [`TabuConfig::validate`].
    pub fn new(processor_count: usize, tasks: &[u64], config: TabuConfig) -> Result<Self> {
        let s0 = initial_state(processor_count, tasks)?;
        Self::from_state(s0, config)
    }

    /// Prepares a search starting from `state`.
    ///
    /// # Errors
    ///
    /// Any error of [`TabuConfig::validate`].
    pub fn from_state(state: State, config: TabuConfig) -> Result<Self> {
        config.validate()?;

        let best_fitness = fitness(&state);
        debug!(
            "tabu search start: {} processors, {} tasks, fitness {best_fitness}",
            state.processor_count(),
            state.task_count()
        );

        let mut tabu = TabuList::new(config.max_size, config.eviction);
        tabu.push(state.clone());

        Ok(Self {
            history: Vec::with_capacity(config.max_iterations),
            config,
            best: state.clone(),
            best_fitness,
            best_iteration: 0,
            candidate: state,
            tabu,
            iteration: 0,
            exhausted: false,
        })
    }

    /// Runs one round.
    ///
    /// # Errors
    ///
    /// [`BalanceError::DegenerateNeighborhood`] when the candidate has no
    /// neighbors and the configuration asks for an error.
    pub fn step(&mut self) -> Result<Step> {
        if self.exhausted || self.iteration >= self.config.max_iterations {
            return Ok(Step::Finished);
        }

        let base = &self.candidate;
        let all: Vec<Move> = moves(base).collect();
        let Some(seed) = all.first() else {
            return self.on_empty_neighborhood();
        };

        let profile = LoadProfile::new(base);
        let scores = self.score(&profile, &all);

        let mut chosen = seed.apply(base);
        let mut chosen_fitness = scores[0];
        for (mv, &score) in all.iter().zip(&scores).skip(1) {
            if score >= chosen_fitness {
                continue;
            }
            let neighbor = mv.apply(base);
            if self.tabu.contains(&neighbor) {
                continue;
            }
            chosen = neighbor;
            chosen_fitness = score;
        }

        self.iteration += 1;
        trace!(
            "round {}: {} neighbors, candidate fitness {chosen_fitness}",
            self.iteration,
            all.len()
        );

        if chosen_fitness < self.best_fitness {
            debug!(
                "round {}: best fitness {} -> {chosen_fitness}",
                self.iteration, self.best_fitness
            );
            self.best = chosen.clone();
            self.best_fitness = chosen_fitness;
            self.best_iteration = self.iteration;
        }

        self.tabu.push(chosen.clone());
        self.candidate = chosen;
        self.history.push(self.best_fitness);

        Ok(Step::Advanced)
    }

    fn on_empty_neighborhood(&mut self) -> Result<Step> {
        match self.config.empty_neighborhood {
            EmptyNeighborhood::Stop => {
                warn!(
                    "round {}: candidate has no neighbors, stopping",
                    self.iteration + 1
                );
                self.exhausted = true;
                Ok(Step::Finished)
            }
            EmptyNeighborhood::Error => Err(BalanceError::DegenerateNeighborhood {
                iteration: self.iteration + 1,
            }),
        }
    }

    fn score(&self, profile: &LoadProfile, all: &[Move]) -> Vec<f64> {
        let base = &self.candidate;

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;
                return all
                    .par_iter()
                    .map(|mv| profile.fitness_after(mv, mv.weight(base)))
                    .collect();
            }
        }

        all.iter()
            .map(|mv| profile.fitness_after(mv, mv.weight(base)))
            .collect()
    }

    /// Runs the remaining rounds and returns the result.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn run(mut self) -> Result<TabuResult> {
        while self.step()? == Step::Advanced {}

        debug!(
            "tabu search done: {} rounds, best fitness {} at round {}",
            self.iteration, self.best_fitness, self.best_iteration
        );

        Ok(TabuResult {
            best: self.best,
            best_fitness: self.best_fitness,
            iterations: self.iteration,
            best_iteration: self.best_iteration,
            fitness_history: self.history,
        })
    }

    /// Best state found so far.
    pub fn best(&self) -> &State {
        &self.best
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Candidate selected by the last round (the start state before any).
    pub fn best_candidate(&self) -> &State {
        &self.candidate
    }

    /// Current tabu memory.
    pub fn tabu_list(&self) -> &TabuList {
        &self.tabu
    }

    /// Rounds executed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best fitness after each executed round.
    pub fn fitness_history(&self) -> &[f64] {
        &self.history
    }

    /// Active configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Balances `tasks` over `processor_count` processors.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_balance::tabu::{TabuConfig, TabuRunner};
    ///
    /// let config = TabuConfig::default().with_max_iterations(50);
    /// let result = TabuRunner::run(2, &[1, 1], &config).unwrap();
    /// assert_eq!(result.best_fitness, 0.0);
    /// assert_eq!(result.iterations, 50);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`TabuSearch::new`] and [`TabuSearch::step`].
    pub fn run(processor_count: usize, tasks: &[u64], config: &TabuConfig) -> Result<TabuResult> {
        TabuSearch::new(processor_count, tasks, config.clone())?.run()
    }
}

/// Runs Tabu Search with `max_iter` rounds and a tabu list of `max_size`
/// states, returning the best state found.
///
/// Use [`DEFAULT_MAX_ITERATIONS`](super::DEFAULT_MAX_ITERATIONS) and
/// [`DEFAULT_MAX_SIZE`](super::DEFAULT_MAX_SIZE) for the usual settings.
///
/// # Errors
///
/// See [`TabuSearch::new`].
pub fn tabu_search(
    processor_count: usize,
    tasks: &[u64],
    max_iter: usize,
    max_size: usize,
) -> Result<State> {
    let config = TabuConfig::default()
        .with_max_iterations(max_iter)
        .with_max_size(max_size);
    TabuRunner::run(processor_count, tasks, &config).map(|result| result.best)
}
