//! Persona records
//!
//! A Persona is the guessable entity of a round. Only `name` affects gameplay;
//! every other field is carried for display.

use serde::Deserialize;
use thiserror::Error;

/// A single roster entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Persona {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub arcana: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub magic: u32,
    #[serde(default)]
    pub endurance: u32,
    #[serde(default)]
    pub agility: u32,
    #[serde(default)]
    pub luck: u32,
    #[serde(default)]
    pub weak: Vec<String>,
    #[serde(default)]
    pub resists: Vec<String>,
    #[serde(default)]
    pub reflects: Vec<String>,
    #[serde(default)]
    pub absorbs: Vec<String>,
    #[serde(default)]
    pub nullifies: Vec<String>,
    #[serde(default)]
    pub dlc: u8,
    #[serde(default)]
    pub query: String,
}

/// Reasons a record cannot be used as a round target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonaError {
    #[error("persona #{0} has an empty name")]
    EmptyName(u32),
    #[error("persona #{id} name {name:?} contains characters that cannot be typed")]
    Untypeable { id: u32, name: String },
}

impl Persona {
    /// The built-in entity used when no roster is available
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: 1,
            name: "Arsene".to_string(),
            arcana: "Fool".to_string(),
            level: 1,
            description: "A gentleman thief who appears in Arsène Lupin stories.".to_string(),
            image: "https://megatenwiki.com/images/1/1a/P5_Arsene_Artwork.png".to_string(),
            strength: 2,
            magic: 2,
            endurance: 2,
            agility: 3,
            luck: 1,
            weak: vec!["Electric".to_string()],
            resists: Vec::new(),
            reflects: Vec::new(),
            absorbs: Vec::new(),
            nullifies: Vec::new(),
            dlc: 0,
            query: "arsene".to_string(),
        }
    }

    /// Number of characters in the name (the required guess length)
    #[inline]
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// Check that the name can be entered through the input adapter
    ///
    /// # Errors
    /// Returns `PersonaError` if the name is blank or contains anything other
    /// than ASCII letters and spaces.
    pub fn validate(&self) -> Result<(), PersonaError> {
        if self.name.trim().is_empty() {
            return Err(PersonaError::EmptyName(self.id));
        }

        if !self.name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(PersonaError::Untypeable {
                id: self.id,
                name: self.name.clone(),
            });
        }

        Ok(())
    }

    /// Base stats in display order
    #[must_use]
    pub fn stats(&self) -> [(&'static str, u32); 5] {
        [
            ("St", self.strength),
            ("Ma", self.magic),
            ("En", self.endurance),
            ("Ag", self.agility),
            ("Lu", self.luck),
        ]
    }

    /// Does the name or lookup key match `query` (case-insensitive)?
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query) || self.query.eq_ignore_ascii_case(query)
    }
}
