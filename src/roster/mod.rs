//! Persona rosters
//!
//! The candidate pool a round picks its target from. A roster is never empty:
//! when no usable record survives loading, it holds the built-in fallback.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_ROSTER;
pub use loader::RosterError;

use crate::core::Persona;
use rand::Rng;
use rustc_hash::FxHashSet;

/// A non-empty list of guessable Personas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    personas: Vec<Persona>,
}

impl Roster {
    /// Build a roster, dropping records that cannot be played
    ///
    /// Records with blank or untypeable names and repeated ids are skipped.
    /// If nothing is left the roster falls back to [`Persona::fallback`].
    #[must_use]
    pub fn new(records: Vec<Persona>) -> Self {
        let mut seen = FxHashSet::default();
        let personas: Vec<Persona> = records
            .into_iter()
            .filter(|p| match p.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("skipping roster entry: {e}");
                    false
                }
            })
            .filter(|p| {
                let fresh = seen.insert(p.id);
                if !fresh {
                    tracing::warn!(id = p.id, name = %p.name, "skipping duplicate roster id");
                }
                fresh
            })
            .collect();

        if personas.is_empty() {
            tracing::warn!("roster is empty, using the built-in persona");
            return Self::fallback();
        }

        Self { personas }
    }

    /// The single-entry roster used when nothing else is available
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            personas: vec![Persona::fallback()],
        }
    }

    /// The roster compiled into the binary
    ///
    /// # Errors
    /// Returns `RosterError::Parse` if the embedded data is malformed.
    pub fn embedded() -> Result<Self, RosterError> {
        loader::from_json_str(EMBEDDED_ROSTER).map(Self::new)
    }

    /// Pick a uniformly random entry
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Persona {
        &self.personas[rng.random_range(0..self.personas.len())]
    }

    /// Find an entry by name or lookup key
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.matches(query))
    }

    #[inline]
    #[must_use]
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Never true: empty input falls back to the built-in Persona
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Persona> {
        self.personas.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Persona;
    type IntoIter = std::slice::Iter<'a, Persona>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn persona(id: u32, name: &str) -> Persona {
        Persona {
            id,
            name: name.to_string(),
            query: name.to_lowercase(),
            ..Persona::fallback()
        }
    }

    #[test]
    fn empty_roster_falls_back() {
        let roster = Roster::new(Vec::new());
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.personas()[0].name, "Arsene");
    }

    #[test]
    fn unplayable_entries_are_dropped() {
        let roster = Roster::new(vec![
            persona(1, "Pixie"),
            persona(2, ""),
            persona(3, "Jack-o'-Lantern"),
            persona(1, "Pixie Again"),
            persona(4, "Jack Frost"),
        ]);
        let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pixie", "Jack Frost"]);
    }

    #[test]
    fn all_invalid_falls_back() {
        let roster = Roster::new(vec![persona(9, "   ")]);
        assert_eq!(roster, Roster::fallback());
    }

    #[test]
    fn pick_is_uniform_enough() {
        let roster = Roster::new(vec![persona(1, "Pixie"), persona(2, "Angel")]);
        let mut rng = StdRng::seed_from_u64(5);
        let picks: Vec<u32> = (0..200).map(|_| roster.pick(&mut rng).id).collect();
        assert!(picks.contains(&1));
        assert!(picks.contains(&2));
    }

    #[test]
    fn find_by_name() {
        let roster = Roster::new(vec![persona(1, "Pixie"), persona(2, "Jack Frost")]);
        assert_eq!(roster.find("jack frost").map(|p| p.id), Some(2));
        assert!(roster.find("Lucifer").is_none());
    }

    #[test]
    fn embedded_roster_loads() {
        let roster = Roster::embedded().unwrap();
        assert!(roster.len() > 20);
        assert!(roster.find("Arsene").is_some());
        assert!(roster.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn embedded_roster_has_short_and_spaced_names() {
        let roster = Roster::embedded().unwrap();
        assert!(roster.iter().any(|p| p.name_len() < 5));
        assert!(roster.iter().any(|p| p.name.contains(' ')));
    }
}
