//! The solver contract shared by the search engines.
//!
//! Both engines take a [`SolverConfig`] and return a [`Timetable`]: every
//! measurable duration mapped to a lighting schedule. Only the breadth-first
//! engine guarantees that each schedule uses the fewest ropes; the
//! depth-first engine keeps the first schedule it discovers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::breadth_first::BreadthFirstSolver;
use crate::depth_first::DepthFirstSolver;
use crate::pruning::Prune;
use crate::rope::Timetable;

/// Configuration for a solve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Number of ropes available
    pub num_ropes: usize,
    /// Time for one rope to burn end to end, lit from one end
    pub burn_time: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_ropes: 3,
            burn_time: 60.0,
        }
    }
}

impl SolverConfig {
    pub fn new(num_ropes: usize, burn_time: f64) -> Self {
        Self {
            num_ropes,
            burn_time,
        }
    }

    /// Reject burn times the finish-time rule cannot work with.
    ///
    /// The engines themselves never call this; they run on whatever they
    /// are given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.burn_time.is_finite() {
            return Err(ConfigError::NonFiniteBurnTime(self.burn_time));
        }
        if self.burn_time <= 0.0 {
            return Err(ConfigError::NonPositiveBurnTime(self.burn_time));
        }
        Ok(())
    }
}

/// Invalid solver configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("rope burn time must be positive, got {0}")]
    NonPositiveBurnTime(f64),
    #[error("rope burn time must be a finite number, got {0}")]
    NonFiniteBurnTime(f64),
}

/// Counters collected during a solve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States whose candidate lightings were enumerated
    pub states_expanded: usize,
    pub pruned_no_information: usize,
    pub pruned_ends_reversed: usize,
    pub pruned_dominated: usize,
    pub time_elapsed_ms: u64,
}

impl SearchStats {
    pub fn record_prune(&mut self, prune: Prune) {
        match prune {
            Prune::NoNewInformation => self.pruned_no_information += 1,
            Prune::EndsReversed => self.pruned_ends_reversed += 1,
            Prune::Dominated => self.pruned_dominated += 1,
        }
    }

    pub fn total_pruned(&self) -> usize {
        self.pruned_no_information + self.pruned_ends_reversed + self.pruned_dominated
    }
}

/// A search engine enumerating measurable durations.
pub trait RopeSolver {
    fn config(&self) -> &SolverConfig;

    /// Run the search, also returning what it cost.
    fn solve_with_stats(&self) -> (Timetable, SearchStats);

    /// Run the search. Pure: identical configs give identical timetables.
    fn solve(&self) -> Timetable {
        self.solve_with_stats().0
    }
}

/// Which engine to run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Fewest ropes per duration
    #[default]
    BreadthFirst,
    /// First schedule found per duration
    DepthFirst,
}

impl Strategy {
    pub fn solver(self, config: SolverConfig) -> Box<dyn RopeSolver> {
        match self {
            Strategy::BreadthFirst => Box::new(BreadthFirstSolver::new(config)),
            Strategy::DepthFirst => Box::new(DepthFirstSolver::new(config)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
        }
    }
}

/// Solve `config` with the chosen engine.
pub fn solve(strategy: Strategy, config: &SolverConfig) -> Timetable {
    strategy.solver(config.clone()).solve()
}
