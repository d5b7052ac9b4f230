//! Rope timer library.
//!
//! Enumerates every duration that can be measured exactly by burning a fixed
//! number of identical ropes, lighting ends at the start or whenever another
//! rope finishes. Each duration comes with a lighting schedule; the
//! breadth-first engine guarantees the schedule uses the fewest ropes.

pub mod breadth_first;
pub mod depth_first;
pub mod executor;
pub mod format;
pub mod pruning;
pub mod rope;
pub mod solver;
pub mod state;

// Re-export main types
pub use breadth_first::BreadthFirstSolver;
pub use depth_first::DepthFirstSolver;
pub use executor::{execute, verify_schedule, ReplayMetrics, ReplayResult, ReplayStatus};
pub use rope::{finish_time, Minutes, RopeInstruction, Timetable};
pub use solver::{solve, ConfigError, RopeSolver, SearchStats, SolverConfig, Strategy};
