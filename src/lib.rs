//! Personadle
//!
//! A Wordle-style game where the answer is a Persona name of any length.
//! Letters are scored green/yellow/gray, a hint reveals one letter of the
//! answer after each miss, and six misses end the round.
//!
//! # Quick Start
//!
//! ```rust
//! use personadle::core::Persona;
//! use personadle::game::{GameStatus, Round};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let round = Round::new(Persona::fallback());
//!
//! let round = round.submit_guess("Arsine", &mut rng);
//! assert_eq!(round.status(), GameStatus::Playing);
//!
//! let round = round.submit_guess("ARSENE", &mut rng);
//! assert_eq!(round.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine, hint and keyboard
pub mod game;

// Persona pool loading
pub mod roster;

// Automatic guessers
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
