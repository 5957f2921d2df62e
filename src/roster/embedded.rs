//! Embedded roster
//!
//! The default Persona list compiled into the binary.

/// JSON array of Persona records shipped with the game
pub const EMBEDDED_ROSTER: &str = include_str!("../../data/personas.json");
