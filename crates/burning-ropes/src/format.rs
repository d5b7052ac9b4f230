//! Human-readable rendering of schedules and timetables.
//!
//! A schedule is regrouped by moment: everything to light at that moment,
//! and which rope finishing marks it. For example:
//!
//! ```text
//! 45 minutes - 2 ropes
//! 0 min   : To start, light both ends of rope 1 and light one end of rope 2.
//! 30 min  : When rope 1 has finished, light the other end of rope 2.
//! 45 min  : When rope 2 has finished, you've reached your time!
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::rope::{Minutes, RopeInstruction, Timetable};
use crate::solver::SolverConfig;

/// Which end(s) of a rope to light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhichEnd {
    First,
    Second,
    Both,
}

/// Light one or both ends of a rope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RopeAction {
    pub rope_id: usize,
    pub which_end: WhichEnd,
}

impl fmt::Display for RopeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.which_end {
            WhichEnd::First => write!(f, "light one end of rope {}", self.rope_id),
            WhichEnd::Second => write!(f, "light the other end of rope {}", self.rope_id),
            WhichEnd::Both => write!(f, "light both ends of rope {}", self.rope_id),
        }
    }
}

/// Everything that happens at one moment of a schedule
#[derive(Debug, Clone, PartialEq)]
pub struct Moment {
    pub time: Minutes,
    /// Rope whose finishing signals this moment; `None` at the start
    pub finished_rope: Option<usize>,
    pub actions: Vec<RopeAction>,
}

impl Moment {
    fn new(time: Minutes) -> Self {
        Self {
            time,
            finished_rope: None,
            actions: Vec::new(),
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = format!("{} min", self.time);
        write!(f, "{:<8}: ", time)?;

        match self.finished_rope {
            None => write!(f, "To start, ")?,
            Some(rope_id) => write!(f, "When rope {} has finished, ", rope_id)?,
        }

        match self.actions.as_slice() {
            [] => write!(f, "you've reached your time!"),
            [only] => write!(f, "{}.", only),
            [first, second] => write!(f, "{} and {}.", first, second),
            [init @ .., last] => {
                for action in init {
                    write!(f, "{}, ", action)?;
                }
                write!(f, "and {}.", last)
            }
        }
    }
}

/// Regroup a schedule into its moments, ascending.
pub fn moments(instructions: &[RopeInstruction]) -> Vec<Moment> {
    let mut by_time: BTreeMap<Minutes, Moment> = BTreeMap::new();

    let mut act = |time: f64, rope_id: usize, which_end: WhichEnd| {
        by_time
            .entry(Minutes(time))
            .or_insert_with(|| Moment::new(Minutes(time)))
            .actions
            .push(RopeAction { rope_id, which_end });
    };

    for instruction in instructions {
        let rope_id = instruction.rope_id;
        if instruction.lights_both_ends() {
            act(instruction.t1, rope_id, WhichEnd::Both);
        } else {
            act(instruction.t1, rope_id, WhichEnd::First);
            // a second end at the finish time is the one-end-only sentinel
            if !instruction.burns_from_one_end() {
                act(instruction.t2, rope_id, WhichEnd::Second);
            }
        }
    }

    for instruction in instructions {
        let time = Minutes(instruction.finish_time);
        let moment = by_time.entry(time).or_insert_with(|| Moment::new(time));
        // first rope to finish here keeps the credit
        moment.finished_rope.get_or_insert(instruction.rope_id);
    }

    by_time.into_values().collect()
}

/// Heading plus one line per moment for measuring `time`.
pub fn describe(time: Minutes, instructions: &[RopeInstruction]) -> Vec<String> {
    let ropes = instructions.len();
    let mut lines = vec![format!(
        "{} minutes - {} {}",
        time,
        ropes,
        if ropes == 1 { "rope" } else { "ropes" }
    )];

    lines.extend(moments(instructions).iter().map(|m| m.to_string()));

    if lines.len() == 1 {
        lines.push("You don't need rope to measure 0 minutes...".to_string());
    }

    lines
}

/// Totals for a whole timetable
pub fn summary(timetable: &Timetable, config: &SolverConfig) -> String {
    let times: Vec<String> = timetable.keys().map(|t| t.to_string()).collect();

    [
        format!(
            "Number of ropes: {}, Rope burn time: {}",
            config.num_ropes,
            Minutes(config.burn_time)
        ),
        format!("Number of possible times: {}", timetable.len()),
        "Possible times:".to_string(),
        times.join(", "),
    ]
    .join("\n")
}
