//! Command implementations

pub mod roster;
pub mod simple;
pub mod simulate;

pub use roster::{lookup, run_roster};
pub use simple::run_simple;
pub use simulate::{RoundOutcome, SimulationConfig, SimulationResult, run_simulation, summarize};
