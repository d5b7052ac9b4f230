//! Rope model types: moments in time, lighting instructions and the
//! finish-time rule that ties them together.
//!
//! These types serialize to the camelCase JSON emitted by the CLI.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A moment (or duration) measured in the same unit as the rope burn time.
///
/// Wraps an `f64` with a total order so it can key a `BTreeMap`. Every value
/// the search produces is a sum of halvings of the burn time, so equality is
/// exact for realistic inputs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Minutes {
    fn from(value: f64) -> Self {
        Minutes(value)
    }
}

impl PartialEq for Minutes {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops a trailing ".0" (30.0 prints as "30")
        fmt::Display::fmt(&self.0, f)
    }
}

/// When a rope lit at `t1` and `t2` finishes, given its end-to-end burn time.
///
/// Between `t1` and `t2` the rope burns from one end; from `t2` on, the
/// remaining `burn_time - (t2 - t1)` burns from both ends in half the time:
/// `t2 + (burn_time - (t2 - t1)) / 2 == (t1 + t2 + burn_time) / 2`.
///
/// Lighting only one end is expressed by passing `t2 = t1 + burn_time`,
/// which yields `t1 + burn_time`.
pub fn finish_time(t1: f64, t2: f64, burn_time: f64) -> f64 {
    (t1 + t2 + burn_time) / 2.0
}

/// The sentinel "second lighting" of a rope that is only ever lit from one
/// end: the moment it would finish burning from `t1` alone.
pub fn unlit_end(t1: f64, burn_time: f64) -> f64 {
    t1 + burn_time
}

/// One rope of a schedule: which rope, when each end is lit, when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RopeInstruction {
    /// 1-based, in the order ropes are consumed
    pub rope_id: usize,
    pub t1: f64,
    pub t2: f64,
    pub finish_time: f64,
}

impl RopeInstruction {
    /// Build an instruction, computing its finish time from the burn time.
    pub fn new(rope_id: usize, t1: f64, t2: f64, burn_time: f64) -> Self {
        Self {
            rope_id,
            t1,
            t2,
            finish_time: finish_time(t1, t2, burn_time),
        }
    }

    /// Both ends lit at the same moment
    pub fn lights_both_ends(&self) -> bool {
        self.t1 == self.t2
    }

    /// The second end is the unlit-end sentinel, i.e. the rope burns
    /// through from its first end alone.
    pub fn burns_from_one_end(&self) -> bool {
        self.t1 != self.t2 && self.t2 == self.finish_time
    }
}

/// Every measurable duration mapped to a schedule that measures it,
/// ordered by duration.
pub type Timetable = BTreeMap<Minutes, Vec<RopeInstruction>>;

/// A timetable holding only the trivial entry: zero minutes, no ropes.
pub fn trivial_timetable() -> Timetable {
    let mut table = Timetable::new();
    table.insert(Minutes::ZERO, Vec::new());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_time_both_ends_together() {
        assert_eq!(finish_time(0.0, 0.0, 60.0), 30.0);
        assert_eq!(finish_time(45.0, 45.0, 60.0), 75.0);
    }

    #[test]
    fn test_finish_time_staggered_ends() {
        // one end at 0, other end at 30: 30 min from one side, then 15 more
        assert_eq!(finish_time(0.0, 30.0, 60.0), 45.0);
        assert_eq!(finish_time(30.0, 45.0, 60.0), 67.5);
    }

    #[test]
    fn test_unlit_end_sentinel_burns_full_length() {
        for t1 in [0.0, 30.0, 52.5] {
            let t2 = unlit_end(t1, 60.0);
            assert_eq!(finish_time(t1, t2, 60.0), t1 + 60.0);
        }
    }

    #[test]
    fn test_instruction_kinds() {
        let both = RopeInstruction::new(1, 0.0, 0.0, 60.0);
        assert!(both.lights_both_ends());
        assert!(!both.burns_from_one_end());
        assert_eq!(both.finish_time, 30.0);

        let one = RopeInstruction::new(1, 0.0, 60.0, 60.0);
        assert!(!one.lights_both_ends());
        assert!(one.burns_from_one_end());

        let staggered = RopeInstruction::new(2, 0.0, 30.0, 60.0);
        assert!(!staggered.lights_both_ends());
        assert!(!staggered.burns_from_one_end());
    }

    #[test]
    fn test_minutes_order_and_display() {
        let mut times = vec![Minutes(60.0), Minutes(52.5), Minutes(0.0), Minutes(30.0)];
        times.sort();
        assert_eq!(
            times,
            vec![Minutes(0.0), Minutes(30.0), Minutes(52.5), Minutes(60.0)]
        );
        assert_eq!(Minutes(30.0).to_string(), "30");
        assert_eq!(Minutes(52.5).to_string(), "52.5");
        assert_eq!(Minutes(56.25).to_string(), "56.25");
    }

    #[test]
    fn test_instruction_json_shape() {
        let json = serde_json::to_value(RopeInstruction::new(2, 0.0, 30.0, 60.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ropeId": 2, "t1": 0.0, "t2": 30.0, "finishTime": 45.0 })
        );
    }

    #[test]
    fn test_trivial_timetable() {
        let table = trivial_timetable();
        assert_eq!(table.len(), 1);
        assert!(table[&Minutes::ZERO].is_empty());
    }
}
