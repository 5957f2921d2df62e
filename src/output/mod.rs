//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_persona_card, print_result_banner, print_round, print_roster, print_simulation_result,
};
