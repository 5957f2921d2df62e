//! Simulation command
//!
//! Plays many rounds with an automatic guesser and aggregates the outcomes.

use crate::game::{GameStatus, Round};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub rounds: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, seed: u64) -> Self {
        Self {
            rounds,
            seed,
            show_progress: true,
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub target: String,
    pub status: GameStatus,
    pub attempts: usize,
}

/// Aggregated simulation statistics
pub struct SimulationResult {
    pub strategy: String,
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    /// Rounds abandoned because the guesser ran out of names
    pub unfinished: usize,
    /// Winning rounds keyed by attempts used
    pub distribution: FxHashMap<usize, usize>,
    pub average_attempts: f64,
    /// Targets lost most often, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Play `config.rounds` independent rounds in parallel
///
/// Round `i` is seeded with `config.seed + i`, so results are reproducible
/// regardless of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a fixed literal).
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<S>,
    strategy_name: &str,
    config: &SimulationConfig,
) -> SimulationResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    tracing::info!(rounds = config.rounds, seed = config.seed, strategy = strategy_name, "simulation started");
    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let round = Round::random(solver.roster(), &mut rng);
            let round = solver.play_out(round, &mut rng);
            pb.inc(1);
            RoundOutcome {
                target: round.target().name.clone(),
                status: round.status(),
                attempts: round.attempts(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(strategy_name, &outcomes, duration)
}

/// Aggregate per-round outcomes
#[must_use]
pub fn summarize(strategy_name: &str, outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut losses: FxHashMap<&str, usize> = FxHashMap::default();
    let mut won = 0;
    let mut lost = 0;
    let mut win_attempts = 0;

    for outcome in outcomes {
        match outcome.status {
            GameStatus::Won => {
                won += 1;
                win_attempts += outcome.attempts;
                *distribution.entry(outcome.attempts).or_insert(0) += 1;
            }
            GameStatus::Lost => {
                lost += 1;
                *losses.entry(outcome.target.as_str()).or_insert(0) += 1;
            }
            GameStatus::Playing => {}
        }
    }

    let mut hardest: Vec<(String, usize)> = losses
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(5);

    SimulationResult {
        strategy: strategy_name.to_string(),
        rounds: outcomes.len(),
        won,
        lost,
        unfinished: outcomes.len() - won - lost,
        distribution,
        average_attempts: if won > 0 {
            win_attempts as f64 / won as f64
        } else {
            0.0
        },
        hardest,
        duration,
    }
}
