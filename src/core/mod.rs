//! Core domain types for Personadle
//!
//! Personas, per-letter feedback and the affinity display table.
//! Everything here is pure: no randomness, no I/O.

pub mod affinity;
mod feedback;
mod persona;

pub use affinity::{Affinity, AffinityLabel, affinity_for};
pub use feedback::{Feedback, LetterStatus, evaluate_guess, evaluate_letter, fold_char};
pub use persona::{Persona, PersonaError};
