//! Round state and transitions
//!
//! A [`Round`] is an immutable snapshot. Every operation borrows the current
//! round and returns the next one, so presentation code only ever reads.

use super::hint::Hint;
use super::keyboard::{KeyStatus, keyboard_statuses};
use crate::core::{Feedback, Persona};
use crate::roster::Roster;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Attempt budget per round
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a round; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(label)
    }
}

/// Why a submission was dropped
///
/// Submissions are never reported to the player as errors; this only lets
/// front-ends explain why Enter did nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("nothing to submit")]
    Empty,
    #[error("the round is already {0}")]
    Finished(GameStatus),
    #[error("the name has {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// State of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Persona,
    guesses: Vec<String>,
    current_guess: String,
    attempts: usize,
    status: GameStatus,
    used_letters: BTreeSet<char>,
    hint: Hint,
}

impl Round {
    /// Start a round for a known target
    #[must_use]
    pub fn new(target: Persona) -> Self {
        let hint = Hint::hidden(&target.name);
        Self {
            target,
            guesses: Vec::new(),
            current_guess: String::new(),
            attempts: 0,
            status: GameStatus::Playing,
            used_letters: BTreeSet::new(),
            hint,
        }
    }

    /// Start a round for a uniformly random roster entry
    #[must_use]
    pub fn random<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        let target = roster.pick(rng).clone();
        tracing::debug!(id = target.id, "new round");
        Self::new(target)
    }

    /// Replace this round with a fresh one; the same target may come up again
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, roster: &Roster, rng: &mut R) -> Self {
        Self::random(roster, rng)
    }

    /// Check whether `guess` would be accepted
    ///
    /// # Errors
    /// Returns the `Rejection` that would make [`Round::submit_guess`] a no-op.
    pub fn check_guess(&self, guess: &str) -> Result<(), Rejection> {
        if guess.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.status.is_finished() {
            return Err(Rejection::Finished(self.status));
        }

        let expected = self.target.name_len();
        let actual = guess.chars().count();
        if actual != expected {
            return Err(Rejection::WrongLength { expected, actual });
        }

        Ok(())
    }

    /// Submit a guess
    ///
    /// Invalid submissions (empty, wrong length, round over) return an
    /// unchanged copy of the round.
    #[must_use]
    pub fn submit_guess<R: Rng + ?Sized>(&self, raw_input: &str, rng: &mut R) -> Self {
        if let Err(reason) = self.check_guess(raw_input) {
            tracing::trace!(%reason, "guess ignored");
            return self.clone();
        }

        let mut next = self.clone();

        next.used_letters.extend(
            raw_input
                .chars()
                .filter(|&c| c != ' ')
                .flat_map(char::to_lowercase),
        );

        next.guesses.push(raw_input.to_string());
        next.attempts += 1;

        if raw_input.to_lowercase() == next.target.name.to_lowercase() {
            next.status = GameStatus::Won;
        } else if next.attempts >= MAX_ATTEMPTS {
            next.status = GameStatus::Lost;
        }

        next.hint = next.hint.advance(&next.target.name, next.attempts, rng);
        next.current_guess.clear();

        tracing::debug!(
            attempts = next.attempts,
            status = %next.status,
            hint = next.hint.text(),
            "guess accepted"
        );

        next
    }

    /// Submit the in-progress buffer
    #[must_use]
    pub fn submit<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let guess = self.current_guess.clone();
        self.submit_guess(&guess, rng)
    }

    /// Append a keystroke to the buffer
    ///
    /// Only ASCII letters and space are accepted, up to the name length.
    #[must_use]
    pub fn type_char(&self, c: char) -> Self {
        let acceptable = c.is_ascii_alphabetic() || c == ' ';
        if !acceptable
            || self.status.is_finished()
            || self.current_guess.chars().count() >= self.target.name_len()
        {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_guess.push(c);
        next
    }

    /// Drop the last buffered character
    #[must_use]
    pub fn backspace(&self) -> Self {
        let mut next = self.clone();
        next.current_guess.pop();
        next
    }

    /// Replace the buffer with free text
    ///
    /// Applies the same constraints as key-by-key entry: letters and
    /// whitespace only, at most the name length.
    #[must_use]
    pub fn set_input(&self, text: &str) -> Self {
        let acceptable = text
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
        if !acceptable || self.status.is_finished() || text.chars().count() > self.target.name_len()
        {
            return self.clone();
        }

        let mut next = self.clone();
        next.current_guess = text.to_string();
        next
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Persona {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Letters used across all guesses, lowercase, spaces excluded
    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        self.hint.text()
    }

    #[inline]
    #[must_use]
    pub const fn revealed_positions(&self) -> &BTreeSet<usize> {
        self.hint.revealed()
    }

    /// The hint box is only worth showing once something is disclosed
    #[must_use]
    pub fn hint_visible(&self) -> bool {
        !self.hint.is_blank() && self.status == GameStatus::Playing
    }

    /// Submitted guesses with their feedback
    pub fn rows(&self) -> impl Iterator<Item = (&str, Feedback)> + '_ {
        self.guesses
            .iter()
            .map(|g| (g.as_str(), Feedback::calculate(g, &self.target.name)))
    }

    /// Keyboard colouring derived from the guess history
    #[must_use]
    pub fn keyboard(&self) -> FxHashMap<char, KeyStatus> {
        keyboard_statuses(&self.guesses, &self.target.name)
    }

    /// Emoji summary of the played rows, headed by the score
    ///
    /// A lost or unfinished round scores `X`.
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = if self.status == GameStatus::Won {
            self.attempts.to_string()
        } else {
            "X".to_string()
        };

        let mut grid = format!("Personadle {score}/{MAX_ATTEMPTS}");
        for (_, feedback) in self.rows() {
            grid.push('\n');
            grid.push_str(&feedback.to_emoji());
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round_for(name: &str) -> Round {
        Round::new(Persona {
            name: name.to_string(),
            ..Persona::fallback()
        })
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn new_round_is_blank() {
        let round = round_for("Arsene");
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.attempts(), 0);
        assert!(round.guesses().is_empty());
        assert!(round.used_letters().is_empty());
        assert_eq!(round.hint(), "______");
        assert!(!round.hint_visible());
        assert_eq!(round.remaining_attempts(), 6);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let round = round_for("Arsene").submit_guess("ARSENE", &mut rng());
        assert_eq!(round.status(), GameStatus::Won);
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.guesses(), &["ARSENE".to_string()]);
    }

    #[test]
    fn six_misses_lose() {
        let mut rng = rng();
        let mut round = round_for("Arsene");
        for guess in ["Arsine", "Pixies", "Angels", "Kelpie", "Silkys", "Oberon"] {
            assert_eq!(round.status(), GameStatus::Playing);
            round = round.submit_guess(guess, &mut rng);
        }
        assert_eq!(round.status(), GameStatus::Lost);
        assert_eq!(round.attempts(), 6);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut rng = rng();
        let mut round = round_for("Arsene");
        for _ in 0..5 {
            round = round.submit_guess("zzzzzz", &mut rng);
        }
        round = round.submit_guess("arsene", &mut rng);
        assert_eq!(round.status(), GameStatus::Won);
        assert_eq!(round.attempts(), 6);
    }

    #[test]
    fn wrong_length_is_ignored() {
        let round = round_for("Arsene");
        let next = round.submit_guess("Arsen", &mut rng());
        assert_eq!(next, round);
        assert_eq!(
            round.check_guess("Arsen"),
            Err(Rejection::WrongLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn empty_guess_is_ignored() {
        let round = round_for("Arsene");
        assert_eq!(round.submit_guess("", &mut rng()), round);
        assert_eq!(round.check_guess(""), Err(Rejection::Empty));
    }

    #[test]
    fn share_grid_lists_rows() {
        let mut rng = rng();
        let round = round_for("Arsene")
            .submit_guess("Arsine", &mut rng)
            .submit_guess("ARSENE", &mut rng);
        assert_eq!(round.share_grid(), "Personadle 2/6\n🟩🟩🟩⬜🟩🟩\n🟩🟩🟩🟩🟩🟩");
        assert_eq!(round_for("Arsene").share_grid(), "Personadle X/6");
    }

    #[test]
    fn lost_round_is_frozen() {
        let mut rng = rng();
        let mut lost = round_for("Arsene");
        for _ in 0..MAX_ATTEMPTS {
            lost = lost.submit_guess("arsine", &mut rng);
        }
        assert_eq!(lost.status(), GameStatus::Lost);

        let after = lost.submit_guess("arsene", &mut rng);
        assert_eq!(after.attempts(), MAX_ATTEMPTS);
        assert_eq!(after.guesses(), lost.guesses());
        assert_eq!(after.status(), GameStatus::Lost);
        assert_eq!(after, lost);
        assert_eq!(lost.check_guess("arsene"), Err(Rejection::Finished(GameStatus::Lost)));
    }

    #[test]
    fn finished_round_is_frozen() {
        let mut rng = rng();
        let won = round_for("Arsene").submit_guess("arsene", &mut rng);
        let after = won.submit_guess("arsine", &mut rng);
        assert_eq!(after, won);
        assert_eq!(won.check_guess("arsine"), Err(Rejection::Finished(GameStatus::Won)));
        assert_eq!(won.type_char('a'), won);
    }

    #[test]
    fn used_letters_are_lowercase_and_skip_spaces() {
        let round = round_for("Jack Frost").submit_guess("JACK FROZE", &mut rng());
        let letters: String = round.used_letters().iter().collect();
        assert_eq!(letters, "acefjkorz");
    }

    #[test]
    fn spaced_name_wins_with_exact_spacing() {
        let round = round_for("Jack Frost").submit_guess("jack frost", &mut rng());
        assert_eq!(round.status(), GameStatus::Won);

        let round = round_for("Jack Frost").submit_guess("jackfrost ", &mut rng());
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn submit_clears_buffer() {
        let mut round = round_for("Ose");
        for c in "ose".chars() {
            round = round.type_char(c);
        }
        assert_eq!(round.current_guess(), "ose");
        let round = round.submit(&mut rng());
        assert_eq!(round.current_guess(), "");
        assert_eq!(round.status(), GameStatus::Won);
    }

    #[test]
    fn typing_respects_length_and_charset() {
        let mut round = round_for("Ose");
        for c in ['o', '1', '-', 's', 'e', 'x'] {
            round = round.type_char(c);
        }
        assert_eq!(round.current_guess(), "ose");

        let round = round.backspace().backspace();
        assert_eq!(round.current_guess(), "o");

        let empty = round_for("Ose").backspace();
        assert_eq!(empty.current_guess(), "");
    }

    #[test]
    fn free_text_input_constraints() {
        let round = round_for("Jack Frost");
        assert_eq!(round.set_input("jack fr").current_guess(), "jack fr");
        assert_eq!(round.set_input("jack-frost").current_guess(), "");
        assert_eq!(round.set_input("jack frosty").current_guess(), "");
    }

    #[test]
    fn hint_advances_with_each_guess_on_long_names() {
        let mut rng = rng();
        let mut round = round_for("Arsene");
        round = round.submit_guess("zzzzzz", &mut rng);
        assert_eq!(round.revealed_positions().len(), 1);
        assert!(round.hint_visible());
        round = round.submit_guess("zzzzzz", &mut rng);
        assert_eq!(round.revealed_positions().len(), 2);
        assert_eq!(round.hint().chars().count(), 6);
    }

    #[test]
    fn hint_hidden_once_finished() {
        let round = round_for("Arsene").submit_guess("Arsene", &mut rng());
        assert_eq!(round.revealed_positions().len(), 1);
        assert!(!round.hint_visible());
    }

    #[test]
    fn rows_pair_guesses_with_feedback() {
        let round = round_for("Arsene").submit_guess("Arsine", &mut rng());
        let rows: Vec<_> = round.rows().collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Arsine");
        assert_eq!(rows[0].1.to_string(), "GGG-GG");
    }

    #[test]
    fn keyboard_tracks_history() {
        let round = round_for("Arsene").submit_guess("Arsine", &mut rng());
        let keys = round.keyboard();
        assert_eq!(keys[&'i'], KeyStatus::Absent);
        assert_eq!(keys[&'a'], KeyStatus::Correct);
    }

    #[test]
    fn reset_starts_fresh() {
        let roster = Roster::new(vec![Persona::fallback()]);
        let mut rng = rng();
        let played = round_for("Arsene").submit_guess("Arsine", &mut rng);
        let fresh = played.reset(&roster, &mut rng);
        assert_eq!(fresh.attempts(), 0);
        assert_eq!(fresh.status(), GameStatus::Playing);
        assert_eq!(fresh.target().name, "Arsene");
        assert!(fresh.used_letters().is_empty());
        assert_eq!(fresh.hint(), "______");
    }
}
