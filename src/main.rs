//! Personadle - CLI
//!
//! Guess-the-Persona game with TUI and line modes, plus a simulator that
//! plays rounds automatically.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use personadle::{
    commands::{SimulationConfig, run_roster, run_simple, run_simulation},
    interactive::{App, run_tui},
    output::print_simulation_result,
    roster::{Roster, loader::load_or_fallback},
    solver::{Solver, StrategyType},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "personadle",
    about = "Guess the Persona: a Wordle-style game over Persona names",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Roster JSON file (default: built-in roster)
    #[arg(short, long, global = true)]
    roster: Option<PathBuf>,

    /// Seed for reproducible target selection and hints
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Guessing strategy for simulate: consistent (default), random
    #[arg(short, long, global = true, default_value = "consistent")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Let the solver play many rounds and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },

    /// List the roster, or show one Persona
    Roster {
        /// Name to look up
        name: Option<String>,
    },
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so a play session only logs when a log file or
/// `RUST_LOG` is given.
fn init_logging(verbose: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    if tui && log_file.is_none() && !from_env {
        return Ok(());
    }

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!("personadle={level}"))
    };

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let roster = load_or_fallback(cli.roster.as_deref());
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, personas = roster.len(), "starting");

    match command {
        Commands::Play => run_play_command(&roster, seed),
        Commands::Simple => run_simple(&roster, &mut StdRng::seed_from_u64(seed)),
        Commands::Simulate { rounds } => {
            run_simulate_command(&cli.strategy, &roster, rounds, seed);
            Ok(())
        }
        Commands::Roster { name } => run_roster(&roster, name.as_deref()),
    }
}

fn run_play_command(roster: &Roster, seed: u64) -> Result<()> {
    let app = App::new(roster, seed);
    run_tui(app)
}

fn run_simulate_command(strategy_name: &str, roster: &Roster, rounds: usize, seed: u64) {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, roster);

    println!(
        "Simulating {rounds} rounds over {} personas (seed {seed})...",
        roster.len()
    );
    let config = SimulationConfig::new(rounds, seed);
    let result = run_simulation(&solver, strategy.name(), &config);
    print_simulation_result(&result);
}
