//! Roster loading
//!
//! Reads Persona records from JSON, either embedded or from a file.

use super::Roster;
use crate::core::Persona;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading roster data
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse roster data")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of Persona records
///
/// # Errors
/// Returns `RosterError::Parse` if the text is not a valid record array.
///
/// # Examples
/// ```
/// use personadle::roster::loader::from_json_str;
///
/// let records = from_json_str(r#"[{"id": 1, "name": "Pixie"}]"#).unwrap();
/// assert_eq!(records[0].name, "Pixie");
/// ```
pub fn from_json_str(json: &str) -> Result<Vec<Persona>, RosterError> {
    Ok(serde_json::from_str(json)?)
}

/// Read Persona records from a JSON file
///
/// # Errors
/// Returns `RosterError::Io` if the file cannot be read, or
/// `RosterError::Parse` if its contents are malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Persona>, RosterError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = from_json_str(&content)?;
    tracing::info!(count = records.len(), path = %path.display(), "roster loaded");
    Ok(records)
}

/// Load a roster, never failing
///
/// `None` selects the embedded roster. Any loading error is logged and the
/// single built-in Persona is used instead.
#[must_use]
pub fn load_or_fallback(path: Option<&Path>) -> Roster {
    let loaded = match path {
        Some(path) => load_from_file(path).map(Roster::new),
        None => Roster::embedded(),
    };

    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load roster, using the built-in persona");
        Roster::fallback()
    })
}
