//! Simple interactive CLI mode
//!
//! Line-based game for terminals without TUI support.

use crate::game::Round;
use crate::output::{print_result_banner, print_round};
use crate::roster::Roster;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-based game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 PERSONADLE - Guess the Persona!              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a name and press Enter. Letters and spaces only.");
    println!("Commands: '/new' for a new round, '/quit' to exit\n");

    let mut round = Round::random(roster, rng);

    loop {
        print_round(&round);

        if round.is_finished() {
            print_result_banner(&round);

            match get_user_input(&mut input, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    round = round.reset(roster, rng);
                    println!("\n🔄 New round started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let prompt = format!("Guess ({} letters)", round.target().name_len());
        let Some(line) = get_user_input(&mut input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "/new" | "/n" => {
                round = round.reset(roster, rng);
                println!("\n🔄 New round started!\n");
            }
            _ => match apply_line(&round, &line, rng) {
                Ok(next) => round = next,
                Err(message) => println!("❌ {message}\n"),
            },
        }
    }
}

/// Feed a typed line through the input constraints and submit it
///
/// Returns the next round, or a message explaining why nothing happened.
fn apply_line<R: Rng + ?Sized>(round: &Round, line: &str, rng: &mut R) -> Result<Round, String> {
    let typed = round.set_input(line);
    if typed.current_guess() != line {
        return Err(format!(
            "Use letters and spaces only, at most {} characters",
            round.target().name_len()
        ));
    }

    typed.check_guess(line).map_err(|reason| reason.to_string())?;
    Ok(typed.submit(rng))
}

/// Prompt and read one trimmed line; `None` on end of input
fn get_user_input<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
