//! Candidate generation and pruning rules shared by both search engines.
//!
//! A candidate is one way to light the next rope: a first end at some moment
//! already reached, and a second end at the same or a later-positioned
//! moment, or at the unlit-end sentinel. The rules below discard candidates
//! that cannot contribute a new duration, or that only repeat a state
//! reached through a symmetric ordering of the same ropes.

use crate::rope::{finish_time, unlit_end, Minutes, Timetable};

/// A possible lighting of the next rope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub t1: f64,
    pub t2: f64,
    pub finish_time: f64,
}

/// Reason a candidate was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prune {
    /// The rope would finish at a moment this state already knows.
    NoNewInformation,
    /// `t1 > t2`, the mirror of a state explored through another branch.
    EndsReversed,
    /// The timetable already measures this time with no more ropes.
    Dominated,
}

/// Every candidate lighting from the given available moments, in search
/// order.
///
/// For the moment at position `i`, the second end ranges over positions
/// `i..` of the available list followed by the sentinel `t1 + burn_time`.
/// Second ends before position `i` are never produced.
pub fn candidate_lightings(available: &[f64], burn_time: f64) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (i, &t1) in available.iter().enumerate() {
        let sentinel = unlit_end(t1, burn_time);
        for &t2 in available[i..].iter().chain(std::iter::once(&sentinel)) {
            candidates.push(Candidate {
                t1,
                t2,
                finish_time: finish_time(t1, t2, burn_time),
            });
        }
    }

    candidates
}

/// Check a candidate against the state it would extend.
///
/// The available list is kept in insertion order, so a later-positioned
/// moment may still be earlier than `t1`; the reversed-ends rule catches
/// those.
pub fn check_candidate(candidate: &Candidate, available: &[f64]) -> Option<Prune> {
    if available.contains(&candidate.finish_time) {
        return Some(Prune::NoNewInformation);
    }

    if candidate.t1 > candidate.t2 {
        return Some(Prune::EndsReversed);
    }

    None
}

/// Whether `timetable` already measures `time` using at most `rope_count`
/// ropes.
pub fn is_dominated(timetable: &Timetable, time: f64, rope_count: usize) -> bool {
    timetable
        .get(&Minutes(time))
        .map_or(false, |known| rope_count >= known.len())
}
