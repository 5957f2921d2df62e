//! Automatic guessers
//!
//! Used by the `simulate` command to play rounds without a human.

mod engine;
pub mod strategy;

pub use engine::{Solver, is_consistent};
pub use strategy::{ConsistentStrategy, RandomStrategy, Strategy, StrategyType};
