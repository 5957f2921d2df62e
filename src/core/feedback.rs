//! Per-letter guess feedback
//!
//! Every letter of a guess row is classified on its own:
//! - Correct: the target has the same letter at the same position
//! - Present: the letter appears somewhere else in the target
//! - Absent: the letter does not appear in the target
//!
//! There is no duplicate-letter accounting. A letter guessed twice but present
//! once in the target is marked at both positions. This is looser than
//! Wordle's rules.

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji tile for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Lowercase a single char without changing the char count of a name
#[inline]
#[must_use]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Classify `letter` guessed at `position` against `target_name`
///
/// Comparison is case-insensitive and positions are counted in chars.
///
/// # Examples
/// ```
/// use personadle::core::{LetterStatus, evaluate_letter};
///
/// assert_eq!(evaluate_letter('a', 0, "Arsene"), LetterStatus::Correct);
/// assert_eq!(evaluate_letter('E', 0, "Arsene"), LetterStatus::Present);
/// assert_eq!(evaluate_letter('z', 0, "Arsene"), LetterStatus::Absent);
/// ```
#[must_use]
pub fn evaluate_letter(letter: char, position: usize, target_name: &str) -> LetterStatus {
    let letter = fold_char(letter);

    if target_name.chars().nth(position).map(fold_char) == Some(letter) {
        LetterStatus::Correct
    } else if target_name.chars().any(|c| fold_char(c) == letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Classify every letter of `guess` against `target_name`
#[must_use]
pub fn evaluate_guess(guess: &str, target_name: &str) -> Vec<LetterStatus> {
    guess
        .chars()
        .enumerate()
        .map(|(i, c)| evaluate_letter(c, i, target_name))
        .collect()
}

/// Feedback for one submitted row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Calculate the feedback `guess` receives against `target_name`
    #[must_use]
    pub fn calculate(guess: &str, target_name: &str) -> Self {
        Self(evaluate_guess(guess, target_name))
    }

    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Render as a row of emoji tiles
    ///
    /// # Examples
    /// ```
    /// use personadle::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("Arsine", "Arsene");
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let ch = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn arsine_against_arsene() {
        assert_eq!(
            evaluate_guess("Arsine", "Arsene"),
            vec![Correct, Correct, Correct, Absent, Correct, Correct]
        );
    }

    #[test]
    fn evaluation_is_case_insensitive() {
        assert_eq!(evaluate_letter('A', 0, "arsene"), Correct);
        assert_eq!(evaluate_letter('a', 0, "ARSENE"), Correct);
        assert_eq!(evaluate_letter('S', 0, "arsene"), Present);
    }

    #[test]
    fn evaluation_is_deterministic() {
        for _ in 0..10 {
            assert_eq!(evaluate_letter('e', 3, "Arsene"), Correct);
            assert_eq!(evaluate_letter('n', 0, "Arsene"), Present);
        }
    }

    #[test]
    fn duplicate_letters_are_not_consumed() {
        // "Pixie" has a single 'p'; both p's of the guess still light up
        assert_eq!(
            evaluate_guess("ppppp", "Pixie"),
            vec![Correct, Present, Present, Present, Present]
        );
        // Wordle would mark only one 'e' of "eeeee" against "Arsene" as present;
        // here the unmatched positions are all present
        assert_eq!(
            evaluate_guess("eeeeee", "Arsene"),
            vec![Present, Present, Present, Correct, Present, Correct]
        );
    }

    #[test]
    fn spaces_are_evaluated_like_letters() {
        let row = evaluate_guess("Jack Frost", "Jack Frost");
        assert_eq!(row[4], Correct);
        assert_eq!(evaluate_letter(' ', 0, "Jack Frost"), Present);
        assert_eq!(evaluate_letter(' ', 0, "Arsene"), Absent);
    }

    #[test]
    fn position_beyond_target_is_never_correct() {
        assert_eq!(evaluate_letter('e', 10, "Arsene"), Present);
        assert_eq!(evaluate_letter('q', 10, "Arsene"), Absent);
    }

    #[test]
    fn feedback_display_and_emoji() {
        let fb = Feedback::calculate("Arsine", "Arsene");
        assert_eq!(fb.to_string(), "GGG-GG");
        assert_eq!(fb.to_emoji(), "🟩🟩🟩⬜🟩🟩");
        assert_eq!(Feedback::calculate("enesra", "Arsene").to_string(), "YYYYYY");
    }
}
