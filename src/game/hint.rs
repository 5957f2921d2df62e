//! Progressive hint
//!
//! Each qualifying attempt discloses one more character of the target name
//! at a random, not-yet-revealed position. Names shorter than
//! [`SHORT_NAME_THRESHOLD`] only reveal on even attempts so they are not
//! given away after a couple of guesses.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

/// Names shorter than this reveal a letter every other attempt
pub const SHORT_NAME_THRESHOLD: usize = 5;

/// Placeholder for undisclosed positions
pub const HINT_PLACEHOLDER: char = '_';

/// The hint shown to the player: rendered text plus disclosed positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    text: String,
    revealed: BTreeSet<usize>,
}

impl Hint {
    /// A hint with nothing disclosed yet
    #[must_use]
    pub fn hidden(target_name: &str) -> Self {
        let revealed = BTreeSet::new();
        Self {
            text: render_hint(target_name, &revealed),
            revealed,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    /// True until the first position is disclosed
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Advance for the given (already incremented) attempt number
    #[must_use]
    pub fn advance<R: Rng + ?Sized>(&self, target_name: &str, attempt: usize, rng: &mut R) -> Self {
        let (text, revealed) = advance_hint(target_name, attempt, &self.revealed, rng);
        Self { text, revealed }
    }
}

/// Render `target_name` with every non-revealed position masked
#[must_use]
pub fn render_hint(target_name: &str, revealed: &BTreeSet<usize>) -> String {
    target_name
        .chars()
        .enumerate()
        .map(|(i, c)| if revealed.contains(&i) { c } else { HINT_PLACEHOLDER })
        .collect()
}

/// Compute the hint after `attempt` submitted guesses
///
/// Returns the new hint text and revealed set. The set only ever grows, by at
/// most one position per call. Attempt `0`, odd attempts on short names, and a
/// fully revealed name all leave the hint as it was.
pub fn advance_hint<R: Rng + ?Sized>(
    target_name: &str,
    attempt: usize,
    revealed: &BTreeSet<usize>,
    rng: &mut R,
) -> (String, BTreeSet<usize>) {
    let name_len = target_name.chars().count();
    let mut revealed = revealed.clone();
    revealed.retain(|&i| i < name_len);

    let throttled = name_len < SHORT_NAME_THRESHOLD && attempt % 2 != 0;
    if attempt == 0 || throttled {
        return (render_hint(target_name, &revealed), revealed);
    }

    let available: Vec<usize> = (0..name_len).filter(|i| !revealed.contains(i)).collect();
    if let Some(&position) = available.choose(rng) {
        tracing::trace!(position, attempt, "hint position revealed");
        revealed.insert(position);
    }

    (render_hint(target_name, &revealed), revealed)
}
