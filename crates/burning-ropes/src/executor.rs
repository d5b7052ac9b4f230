//! Schedule replay with consistency checks and metrics tracking.
//!
//! Replays a lighting schedule rope by rope, the way someone following it
//! would: each end can only be lit at a moment already observable (the start,
//! or some earlier rope finishing). The replay stops at the first
//! instruction that could not be carried out as written.

use std::collections::BTreeSet;

use crate::rope::{finish_time, unlit_end, Minutes, RopeInstruction};

/// Result status of a replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// Every instruction checked out
    Measured,
    /// Rope ids are not 1, 2, 3, ... in schedule order
    RopeOutOfOrder { rope_id: usize },
    /// Second end lit before the first
    EndsReversed { rope_id: usize },
    /// An end is lit at a moment nobody can observe yet
    UnknownMoment { rope_id: usize },
    /// The recorded finish time disagrees with the burn rule
    WrongFinishTime { rope_id: usize },
}

/// Metrics collected during a replay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayMetrics {
    pub ropes_used: usize,
    /// Distinct moments at which at least one end is lit
    pub lighting_moments: usize,
    pub both_ends_together: usize,
    pub one_end_only: usize,
}

/// Result of replaying a schedule
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayResult {
    pub status: ReplayStatus,
    pub metrics: ReplayMetrics,
    /// Finish time of the last rope (0 for an empty schedule), if measured
    pub measured: Option<Minutes>,
}

/// Replay `instructions` for ropes that take `burn_time` to burn through.
pub fn execute(instructions: &[RopeInstruction], burn_time: f64) -> ReplayResult {
    let mut metrics = ReplayMetrics::default();
    let mut known = vec![0.0];
    let mut lit_at: BTreeSet<Minutes> = BTreeSet::new();

    let stopped = |status, metrics| ReplayResult {
        status,
        metrics,
        measured: None,
    };

    for (index, instruction) in instructions.iter().enumerate() {
        let rope_id = instruction.rope_id;

        if rope_id != index + 1 {
            return stopped(ReplayStatus::RopeOutOfOrder { rope_id }, metrics);
        }

        if instruction.t1 > instruction.t2 {
            return stopped(ReplayStatus::EndsReversed { rope_id }, metrics);
        }

        let second_end_known = known.contains(&instruction.t2)
            || instruction.t2 == unlit_end(instruction.t1, burn_time);
        if !known.contains(&instruction.t1) || !second_end_known {
            return stopped(ReplayStatus::UnknownMoment { rope_id }, metrics);
        }

        if instruction.finish_time != finish_time(instruction.t1, instruction.t2, burn_time) {
            return stopped(ReplayStatus::WrongFinishTime { rope_id }, metrics);
        }

        metrics.ropes_used += 1;
        lit_at.insert(Minutes(instruction.t1));
        if instruction.lights_both_ends() {
            metrics.both_ends_together += 1;
        } else if instruction.burns_from_one_end() {
            metrics.one_end_only += 1;
        } else {
            lit_at.insert(Minutes(instruction.t2));
        }

        known.push(instruction.finish_time);
    }

    metrics.lighting_moments = lit_at.len();
    let measured = instructions
        .last()
        .map_or(Minutes::ZERO, |last| Minutes(last.finish_time));

    ReplayResult {
        status: ReplayStatus::Measured,
        metrics,
        measured: Some(measured),
    }
}

/// Does the schedule replay cleanly and measure exactly `time`?
pub fn verify_schedule(time: Minutes, instructions: &[RopeInstruction], burn_time: f64) -> bool {
    let result = execute(instructions, burn_time);
    result.status == ReplayStatus::Measured && result.measured == Some(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forty_five_minutes() -> Vec<RopeInstruction> {
        vec![
            RopeInstruction::new(1, 0.0, 0.0, 60.0),
            RopeInstruction::new(2, 0.0, 30.0, 60.0),
        ]
    }

    #[test]
    fn test_empty_schedule_measures_zero() {
        let result = execute(&[], 60.0);
        assert_eq!(result.status, ReplayStatus::Measured);
        assert_eq!(result.measured, Some(Minutes::ZERO));
        assert_eq!(result.metrics, ReplayMetrics::default());
    }

    #[test]
    fn test_simple_replay() {
        let result = execute(&forty_five_minutes(), 60.0);

        assert_eq!(result.status, ReplayStatus::Measured);
        assert_eq!(result.measured, Some(Minutes(45.0)));
        assert_eq!(result.metrics.ropes_used, 2);
        assert_eq!(result.metrics.both_ends_together, 1);
        assert_eq!(result.metrics.one_end_only, 0);
        // 0 (rope 1 both ends, rope 2 first end) and 30 (rope 2 other end)
        assert_eq!(result.metrics.lighting_moments, 2);
        assert!(verify_schedule(Minutes(45.0), &forty_five_minutes(), 60.0));
        assert!(!verify_schedule(Minutes(30.0), &forty_five_minutes(), 60.0));
    }

    #[test]
    fn test_one_end_only() {
        let schedule = vec![RopeInstruction::new(1, 0.0, 60.0, 60.0)];
        let result = execute(&schedule, 60.0);

        assert_eq!(result.status, ReplayStatus::Measured);
        assert_eq!(result.metrics.one_end_only, 1);
        assert_eq!(result.metrics.lighting_moments, 1);
    }

    #[test]
    fn test_unknown_moment() {
        // nothing finishes at 20, so nobody can tell when to light rope 1
        let schedule = vec![RopeInstruction::new(1, 0.0, 20.0, 60.0)];
        assert_eq!(
            execute(&schedule, 60.0).status,
            ReplayStatus::UnknownMoment { rope_id: 1 }
        );
    }

    #[test]
    fn test_reversed_and_misnumbered() {
        let reversed = vec![
            RopeInstruction::new(1, 0.0, 0.0, 60.0),
            RopeInstruction::new(2, 30.0, 0.0, 60.0),
        ];
        assert_eq!(
            execute(&reversed, 60.0).status,
            ReplayStatus::EndsReversed { rope_id: 2 }
        );

        let misnumbered = vec![RopeInstruction::new(2, 0.0, 0.0, 60.0)];
        assert_eq!(
            execute(&misnumbered, 60.0).status,
            ReplayStatus::RopeOutOfOrder { rope_id: 2 }
        );
    }

    #[test]
    fn test_wrong_finish_time() {
        let mut schedule = forty_five_minutes();
        schedule[1].finish_time = 50.0;

        let result = execute(&schedule, 60.0);
        assert_eq!(result.status, ReplayStatus::WrongFinishTime { rope_id: 2 });
        assert_eq!(result.measured, None);
        assert_eq!(result.metrics.ropes_used, 1);
    }
}
