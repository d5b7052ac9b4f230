//! Exhaustive depth-first enumeration.
//!
//! Walks every lighting order recursively, one level per rope. The first
//! schedule to reach a duration is kept, even if a shorter one turns up on a
//! later branch; use [`crate::breadth_first`] when minimality matters.

use std::collections::btree_map::Entry;
use std::time::Instant;

use tracing::{debug, trace};

use crate::pruning::{candidate_lightings, check_candidate};
use crate::rope::{trivial_timetable, Minutes, Timetable};
use crate::solver::{RopeSolver, SearchStats, SolverConfig};
use crate::state::SearchState;

/// Depth-first engine, first discovery wins
#[derive(Debug, Clone, Default)]
pub struct DepthFirstSolver {
    config: SolverConfig,
}

impl DepthFirstSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl RopeSolver for DepthFirstSolver {
    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn solve_with_stats(&self) -> (Timetable, SearchStats) {
        let start_time = Instant::now();
        debug!(
            num_ropes = self.config.num_ropes,
            burn_time = self.config.burn_time,
            "depth-first search started"
        );

        let mut runner = DfsRunner::new(&self.config);
        runner.explore(&SearchState::initial(self.config.num_ropes));

        let DfsRunner {
            timetable,
            mut stats,
            ..
        } = runner;
        stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

        debug!(
            times = timetable.len(),
            states_expanded = stats.states_expanded,
            pruned = stats.total_pruned(),
            "depth-first search finished"
        );
        (timetable, stats)
    }
}

/// Carries the accumulators through the recursion.
struct DfsRunner<'a> {
    config: &'a SolverConfig,
    timetable: Timetable,
    stats: SearchStats,
}

impl<'a> DfsRunner<'a> {
    fn new(config: &'a SolverConfig) -> Self {
        Self {
            config,
            timetable: trivial_timetable(),
            stats: SearchStats::default(),
        }
    }

    fn explore(&mut self, state: &SearchState) {
        if state.ropes_remaining == 0 {
            return;
        }
        self.stats.states_expanded += 1;

        for candidate in candidate_lightings(&state.available, self.config.burn_time) {
            if let Some(prune) = check_candidate(&candidate, &state.available) {
                self.stats.record_prune(prune);
                continue;
            }

            let next = state.extend(&candidate);

            if let Entry::Vacant(entry) = self.timetable.entry(Minutes(candidate.finish_time)) {
                trace!(
                    time = candidate.finish_time,
                    ropes = next.instructions.len(),
                    "new time"
                );
                entry.insert(next.instructions.clone());
            }

            self.explore(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rope::RopeInstruction;

    fn solve(num_ropes: usize, burn_time: f64) -> Timetable {
        DepthFirstSolver::new(SolverConfig::new(num_ropes, burn_time)).solve()
    }

    #[test]
    fn test_zero_ropes() {
        let table = solve(0, 60.0);
        assert_eq!(table, trivial_timetable());
    }

    #[test]
    fn test_single_rope() {
        let table = solve(1, 60.0);

        let mut expected = trivial_timetable();
        expected.insert(Minutes(30.0), vec![RopeInstruction::new(1, 0.0, 0.0, 60.0)]);
        expected.insert(Minutes(60.0), vec![RopeInstruction::new(1, 0.0, 60.0, 60.0)]);
        assert_eq!(table, expected);
    }

    #[test]
    fn test_first_discovery_wins() {
        // The both-ends branch is explored first, so 60 is first reached as
        // a second rope after it, not by the single rope burned from one end.
        let table = solve(2, 60.0);

        assert_eq!(
            table[&Minutes(60.0)],
            vec![
                RopeInstruction::new(1, 0.0, 0.0, 60.0),
                RopeInstruction::new(2, 0.0, 60.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_two_ropes_times() {
        let table = solve(2, 60.0);
        let times: Vec<f64> = table.keys().map(|m| m.value()).collect();
        assert_eq!(times, vec![0.0, 30.0, 45.0, 60.0, 90.0, 120.0]);
    }

    #[test]
    fn test_stats_are_counted() {
        let (_, stats) = DepthFirstSolver::new(SolverConfig::new(2, 60.0)).solve_with_stats();
        assert!(stats.states_expanded > 1);
        assert!(stats.pruned_no_information > 0);
        assert_eq!(stats.pruned_dominated, 0);
    }
}
