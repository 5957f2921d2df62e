//! Display functions for game state and command results

use super::formatters::{
    affinity_names, attempt_dots, create_progress_bar, empty_row, guess_row, key_cap, spaced_hint,
};
use crate::commands::SimulationResult;
use crate::core::Persona;
use crate::game::{GameStatus, KEYBOARD_ROWS, Round};
use crate::roster::Roster;
use colored::Colorize;

/// Print the board, hint, used letters and keyboard for a round
pub fn print_round(round: &Round) {
    let name_len = round.target().name_len();

    println!(
        "\nAttempts: {} {}/{}",
        attempt_dots(round.attempts(), round.max_attempts()).red(),
        round.attempts(),
        round.max_attempts()
    );

    if round.hint_visible() {
        println!("Hint:     {}", spaced_hint(round.hint()).bright_yellow().bold());
    }
    if !round.is_finished() {
        let persona = round.target();
        for (label, elements) in [("Weak", &persona.weak), ("Resists", &persona.resists)] {
            if !elements.is_empty() {
                println!("{:<10}{}", format!("{label}:"), affinity_names(elements));
            }
        }
    }
    println!();

    for (guess, feedback) in round.rows() {
        println!("  {}", guess_row(guess, &feedback));
    }
    for _ in round.attempts()..round.max_attempts() {
        println!("  {}", empty_row(name_len));
    }

    if !round.used_letters().is_empty() && !round.is_finished() {
        let used: String = round
            .used_letters()
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("\nUsed letters: {}", used.bright_white());
    }

    let keys = round.keyboard();
    println!();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let caps: Vec<String> = row
            .chars()
            .map(|c| key_cap(c, keys.get(&c).copied().unwrap_or_default()).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent), caps.join(" "));
    }
}

/// Print the end-of-round banner naming the target
pub fn print_result_banner(round: &Round) {
    let persona = round.target();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.status() {
        GameStatus::Won => {
            println!("{}", "    🎉  Congratulations!  🎉".bright_green().bold());
            println!(
                "  You guessed it in {} {}! It was {}!",
                round.attempts(),
                if round.attempts() == 1 { "try" } else { "tries" },
                persona.name.bright_yellow().bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "    💀  Game Over  💀".red().bold());
            println!("  The answer was: {}", persona.name.bright_yellow().bold());
        }
        GameStatus::Playing => {}
    }
    println!("{}", "═".repeat(60).bright_cyan());

    print_persona_card(persona);

    for line in round.share_grid().lines() {
        println!("  {line}");
    }
    println!();
}

/// Print a Persona's arcana, level, stats, description and affinities
pub fn print_persona_card(persona: &Persona) {
    println!(
        "\n  {}  {}  Lv {}",
        persona.name.bright_white().bold(),
        format!("[{}]", persona.arcana).black().on_yellow(),
        persona.level
    );

    let stats: Vec<String> = persona
        .stats()
        .iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect();
    println!("  {}", stats.join("  ").bright_black());

    if !persona.description.is_empty() {
        println!("\n  {}", persona.description);
    }

    let groups = [
        ("Weak", &persona.weak),
        ("Resists", &persona.resists),
        ("Reflects", &persona.reflects),
        ("Absorbs", &persona.absorbs),
        ("Nullifies", &persona.nullifies),
    ];
    for (label, elements) in groups {
        if elements.is_empty() {
            continue;
        }
        println!("  {label:<10} {}", affinity_names(elements));
    }
    println!();
}

/// Print every roster entry, one per line
pub fn print_roster(roster: &Roster) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ({} personas)", "ROSTER".bright_cyan().bold(), roster.len());
    println!("{}", "─".repeat(60).cyan());

    for persona in roster {
        println!(
            "  {:>3}  {:<16} {:<12} Lv {:>2}  {} letters",
            persona.id,
            persona.name,
            persona.arcana,
            persona.level,
            persona.name_len()
        );
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.rounds > 0 {
        result.won as f64 / result.rounds as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    println!("   Won / Lost:       {} / {}", result.won.to_string().green(), result.lost.to_string().red());
    if result.unfinished > 0 {
        println!("   Gave up:          {}", result.unfinished);
    }
    println!("   Average attempts: {:.2} (wins only)", result.average_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=6 {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = if result.rounds > 0 {
            count as f64 / result.rounds as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n💀 {}", "Most missed:".bright_cyan().bold());
        for (name, losses) in &result.hardest {
            println!("   {name:<16} {losses}");
        }
    }
}
