//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, affinity_for};
use crate::game::KeyStatus;
use colored::{ColoredString, Colorize, CustomColor};

/// One coloured letter tile
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black().bold(),
    }
}

/// A submitted guess rendered as coloured tiles
#[must_use]
pub fn guess_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(c, &s)| letter_tile(c, s).to_string())
        .collect()
}

/// Empty tiles for rows not played yet
#[must_use]
pub fn empty_row(len: usize) -> String {
    " · ".repeat(len).bright_black().to_string()
}

/// A keyboard key coloured by its aggregated status
#[must_use]
pub fn key_cap(letter: char, status: KeyStatus) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match status {
        KeyStatus::Correct => text.green().bold(),
        KeyStatus::Present => text.yellow().bold(),
        KeyStatus::Absent => text.bright_black(),
        KeyStatus::Unused => text.white(),
    }
}

/// Hint text with spaced-out letters, e.g. `A _ _ e _ _`
#[must_use]
pub fn spaced_hint(hint: &str) -> String {
    hint.chars()
        .map(|c| if c == ' ' { '·' } else { c })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Element names in their affinity colours, comma separated
#[must_use]
pub fn affinity_names(elements: &[String]) -> String {
    elements
        .iter()
        .map(|e| {
            let a = affinity_for(e);
            let (r, g, b) = a.color;
            a.name.custom_color(CustomColor::new(r, g, b)).bold().to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Attempt indicator: filled dots for used attempts
#[must_use]
pub fn attempt_dots(attempts: usize, max: usize) -> String {
    let used = attempts.min(max);
    format!("{}{}", "●".repeat(used), "○".repeat(max - used))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_row_uppercases_letters() {
        plain();
        let fb = Feedback::calculate("Arsine", "Arsene");
        assert_eq!(guess_row("Arsine", &fb), " A  R  S  I  N  E ");
    }

    #[test]
    fn spaced_hint_marks_spaces() {
        assert_eq!(spaced_hint("J___ F____"), "J _ _ _ · F _ _ _ _");
        assert_eq!(spaced_hint(""), "");
    }

    #[test]
    fn affinity_names_join_elements() {
        plain();
        let elements = vec!["Electric".to_string(), "Gun".to_string()];
        assert_eq!(affinity_names(&elements), "Electric, Gun");
        assert_eq!(affinity_names(&[]), "");
    }

    #[test]
    fn attempt_dots_fill_left_to_right() {
        assert_eq!(attempt_dots(0, 6), "○○○○○○");
        assert_eq!(attempt_dots(2, 6), "●●○○○○");
        assert_eq!(attempt_dots(9, 6), "●●●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
