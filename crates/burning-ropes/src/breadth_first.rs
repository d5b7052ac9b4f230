//! Breadth-first enumeration with minimal rope counts.
//!
//! States leave the frontier in order of ropes used, so the first schedule
//! recorded for a duration is one of the shortest. A later, strictly
//! shorter schedule still replaces a recorded one, which covers a duration
//! enqueued twice before either copy is dequeued.

use std::collections::VecDeque;
use std::time::Instant;

use tracing::{debug, trace};

use crate::pruning::{candidate_lightings, check_candidate, is_dominated, Prune};
use crate::rope::{Minutes, Timetable};
use crate::solver::{RopeSolver, SearchStats, SolverConfig};
use crate::state::SearchState;

/// Breadth-first engine, fewest ropes per duration
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSolver {
    config: SolverConfig,
}

impl BreadthFirstSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl RopeSolver for BreadthFirstSolver {
    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn solve_with_stats(&self) -> (Timetable, SearchStats) {
        let start_time = Instant::now();
        let burn_time = self.config.burn_time;
        debug!(
            num_ropes = self.config.num_ropes,
            burn_time, "breadth-first search started"
        );

        let mut stats = SearchStats::default();
        let mut timetable = Timetable::new();
        let mut frontier: VecDeque<SearchState> = VecDeque::new();
        frontier.push_back(SearchState::initial(self.config.num_ropes));

        while let Some(state) = frontier.pop_front() {
            let time = Minutes(state.most_precise_time);
            let improves = timetable
                .get(&time)
                .map_or(true, |known| state.instructions.len() < known.len());
            if improves {
                trace!(
                    time = time.value(),
                    ropes = state.instructions.len(),
                    "recorded time"
                );
                timetable.insert(time, state.instructions.clone());
            }

            if state.ropes_remaining == 0 {
                continue;
            }
            stats.states_expanded += 1;

            let rope_count = state.instructions.len() + 1;
            for candidate in candidate_lightings(&state.available, burn_time) {
                if let Some(prune) = check_candidate(&candidate, &state.available) {
                    stats.record_prune(prune);
                    continue;
                }

                if is_dominated(&timetable, candidate.finish_time, rope_count) {
                    stats.record_prune(Prune::Dominated);
                    continue;
                }

                frontier.push_back(state.extend(&candidate));
            }
        }

        stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;
        debug!(
            times = timetable.len(),
            states_expanded = stats.states_expanded,
            pruned = stats.total_pruned(),
            "breadth-first search finished"
        );
        (timetable, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rope::{trivial_timetable, RopeInstruction};

    fn solve(num_ropes: usize, burn_time: f64) -> Timetable {
        BreadthFirstSolver::new(SolverConfig::new(num_ropes, burn_time)).solve()
    }

    #[test]
    fn test_zero_ropes() {
        assert_eq!(solve(0, 60.0), trivial_timetable());
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
    fn test_two_ropes_minimal_schedules() {
        let table = solve(2, 60.0);

        let mut expected = trivial_timetable();
        expected.insert(Minutes(30.0), vec![RopeInstruction::new(1, 0.0, 0.0, 60.0)]);
        expected.insert(
            Minutes(45.0),
            vec![
                RopeInstruction::new(1, 0.0, 0.0, 60.0),
                RopeInstruction::new(2, 0.0, 30.0, 60.0),
            ],
        );
        expected.insert(Minutes(60.0), vec![RopeInstruction::new(1, 0.0, 60.0, 60.0)]);
        expected.insert(
            Minutes(90.0),
            vec![
                RopeInstruction::new(1, 0.0, 0.0, 60.0),
                RopeInstruction::new(2, 30.0, 90.0, 60.0),
            ],
        );
        expected.insert(
            Minutes(120.0),
            vec![
                RopeInstruction::new(1, 0.0, 60.0, 60.0),
                RopeInstruction::new(2, 60.0, 120.0, 60.0),
            ],
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_other_burn_time_scales() {
        let table = solve(2, 10.0);
        let times: Vec<f64> = table.keys().map(|m| m.value()).collect();
        assert_eq!(times, vec![0.0, 5.0, 7.5, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_dominated_branches_are_pruned() {
        let (_, stats) = BreadthFirstSolver::new(SolverConfig::new(3, 60.0)).solve_with_stats();
        assert!(stats.pruned_dominated > 0);
        assert!(stats.pruned_no_information > 0);
    }
}
