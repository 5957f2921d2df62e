//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::engine::is_consistent;
use crate::core::Persona;
use crate::game::Round;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select a guess from `pool` for the current round
    ///
    /// `pool` holds roster entries of the right length that were not guessed
    /// yet. Returns `None` if the pool is empty.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        round: &Round,
        pool: &[&'a Persona],
        rng: &mut R,
    ) -> Option<&'a Persona>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Only guess names consistent with all feedback so far (default)
    Consistent(ConsistentStrategy),
    /// Ignore feedback entirely
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        round: &Round,
        pool: &[&'a Persona],
        rng: &mut R,
    ) -> Option<&'a Persona> {
        match self {
            Self::Consistent(s) => s.select_guess(round, pool, rng),
            Self::Random(s) => s.select_guess(round, pool, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "consistent", "random".
    /// Defaults to consistent if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Consistent(ConsistentStrategy),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Consistent(_) => "consistent",
            Self::Random(_) => "random",
        }
    }
}

/// Picks uniformly among names that agree with every feedback row and the hint
///
/// Falls back to any pool entry when nothing is consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        round: &Round,
        pool: &[&'a Persona],
        rng: &mut R,
    ) -> Option<&'a Persona> {
        let consistent: Vec<&'a Persona> = pool
            .iter()
            .copied()
            .filter(|p| is_consistent(&p.name, round))
            .collect();

        consistent
            .choose(rng)
            .or_else(|| pool.choose(rng))
            .copied()
    }
}

/// Picks uniformly among all remaining names of the right length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        _round: &Round,
        pool: &[&'a Persona],
        rng: &mut R,
    ) -> Option<&'a Persona> {
        pool.choose(rng).copied()
    }
}
