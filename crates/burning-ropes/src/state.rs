//! Search state: what has been lit so far and which moments it made
//! observable.

use smallvec::SmallVec;

use crate::pruning::Candidate;
use crate::rope::RopeInstruction;

/// Moments reached so far, in the order they were reached. Always starts
/// with 0.
pub type Moments = SmallVec<[f64; 8]>;

/// A node of the search. Never mutated; successors are derived by copying.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub available: Moments,
    pub ropes_remaining: usize,
    /// Finish time of the most recently lit rope (0 before any rope)
    pub most_precise_time: f64,
    pub instructions: Vec<RopeInstruction>,
}

impl SearchState {
    /// Nothing lit yet, only the start moment known
    pub fn initial(num_ropes: usize) -> Self {
        let mut available = Moments::new();
        available.push(0.0);
        Self {
            available,
            ropes_remaining: num_ropes,
            most_precise_time: 0.0,
            instructions: Vec::new(),
        }
    }

    /// 1-based id the next rope will get
    pub fn next_rope_id(&self) -> usize {
        self.instructions.len() + 1
    }

    /// The state reached by lighting the next rope as `candidate` says.
    pub fn extend(&self, candidate: &Candidate) -> Self {
        let mut available = self.available.clone();
        available.push(candidate.finish_time);

        let mut instructions = Vec::with_capacity(self.instructions.len() + 1);
        instructions.extend_from_slice(&self.instructions);
        instructions.push(RopeInstruction {
            rope_id: self.next_rope_id(),
            t1: candidate.t1,
            t2: candidate.t2,
            finish_time: candidate.finish_time,
        });

        Self {
            available,
            ropes_remaining: self.ropes_remaining.saturating_sub(1),
            most_precise_time: candidate.finish_time,
            instructions,
        }
    }
}
