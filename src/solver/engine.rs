//! Automatic player
//!
//! Narrows the roster using only what a player can see (feedback rows and
//! the hint) and asks a strategy for the next guess.

use super::strategy::Strategy;
use crate::core::{Feedback, Persona, fold_char};
use crate::game::{HINT_PLACEHOLDER, Round};
use crate::roster::Roster;
use rand::Rng;

/// Automatic player
///
/// Coordinates guessing using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    roster: &'a Roster,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and roster
    pub const fn new(strategy: S, roster: &'a Roster) -> Self {
        Self { strategy, roster }
    }

    #[must_use]
    pub const fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// Roster entries of the target's length not guessed yet
    #[must_use]
    pub fn pool(&self, round: &Round) -> Vec<&'a Persona> {
        let name_len = round.target().name_len();
        self.roster
            .iter()
            .filter(|p| p.name_len() == name_len)
            .filter(|p| !round.guesses().iter().any(|g| g.eq_ignore_ascii_case(&p.name)))
            .collect()
    }

    /// Choose the next guess, or `None` once the round is over or the pool is exhausted
    pub fn next_guess<R: Rng + ?Sized>(&self, round: &Round, rng: &mut R) -> Option<&'a Persona> {
        if round.is_finished() {
            return None;
        }
        self.strategy.select_guess(round, &self.pool(round), rng)
    }

    /// Keep guessing until the round ends or nothing is left to try
    #[must_use]
    pub fn play_out<R: Rng + ?Sized>(&self, mut round: Round, rng: &mut R) -> Round {
        while let Some(guess) = self.next_guess(&round, rng) {
            round = round.submit_guess(&guess.name, rng);
        }
        round
    }
}

/// Could `candidate` be the target given the round's feedback and hint?
#[must_use]
pub fn is_consistent(candidate: &str, round: &Round) -> bool {
    let hint_matches = candidate.chars().count() == round.hint().chars().count()
        && candidate
            .chars()
            .zip(round.hint().chars())
            .all(|(c, h)| h == HINT_PLACEHOLDER || fold_char(c) == fold_char(h));

    hint_matches
        && round
            .rows()
            .all(|(guess, observed)| Feedback::calculate(guess, candidate) == observed)
}
