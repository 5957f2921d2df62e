//! On-screen keyboard colouring
//!
//! Aggregates every submitted guess into one status per letter.

use crate::core::fold_char;
use rustc_hash::FxHashMap;

/// Keyboard layout used by the renderers
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Aggregated status of a keyboard key
///
/// Ordered by precedence: a key reported `Correct` by any guess stays
/// `Correct` regardless of what other guesses say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum KeyStatus {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

/// Status of `letter` after all `guesses` against `target_name`
///
/// - `Correct` if some guess placed it where the target has it
/// - `Present` if it was guessed and occurs in the target
/// - `Absent` if it was guessed but the target lacks it
/// - `Unused` otherwise
#[must_use]
pub fn key_status<S: AsRef<str>>(letter: char, guesses: &[S], target_name: &str) -> KeyStatus {
    let letter = fold_char(letter);
    let target: Vec<char> = target_name.chars().map(fold_char).collect();
    let in_target = target.contains(&letter);

    let mut status = KeyStatus::Unused;
    for guess in guesses {
        let guess: Vec<char> = guess.as_ref().chars().map(fold_char).collect();
        if !guess.contains(&letter) {
            continue;
        }

        let placed = guess
            .iter()
            .zip(&target)
            .any(|(&g, &t)| g == letter && t == letter);

        let this = if placed {
            KeyStatus::Correct
        } else if in_target {
            KeyStatus::Present
        } else {
            KeyStatus::Absent
        };
        status = status.max(this);
    }

    status
}

/// Status of every letter `a..=z`
#[must_use]
pub fn keyboard_statuses<S: AsRef<str>>(
    guesses: &[S],
    target_name: &str,
) -> FxHashMap<char, KeyStatus> {
    ('a'..='z')
        .map(|letter| (letter, key_status(letter, guesses, target_name)))
        .collect()
}
