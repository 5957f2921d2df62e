//! Roster inspection command
//!
//! Lists the roster or prints a single Persona's card.

use crate::core::Persona;
use crate::output::{print_persona_card, print_roster};
use crate::roster::Roster;
use anyhow::{Result, anyhow};

/// Find a Persona by name or lookup key
///
/// # Errors
///
/// Returns an error naming the query if no entry matches.
pub fn lookup<'a>(roster: &'a Roster, query: &str) -> Result<&'a Persona> {
    roster
        .find(query)
        .ok_or_else(|| anyhow!("No persona named '{query}' in the roster"))
}

/// List every entry, or show one entry when `query` is given
///
/// # Errors
///
/// Returns an error if `query` does not match any entry.
pub fn run_roster(roster: &Roster, query: Option<&str>) -> Result<()> {
    match query {
        Some(query) => print_persona_card(lookup(roster, query)?),
        None => print_roster(roster),
    }
    Ok(())
}
