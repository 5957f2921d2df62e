//! TUI application state and logic

use crate::game::{GameStatus, MAX_ATTEMPTS, Rejection, Round};
use crate::roster::Roster;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub roster: &'a Roster,
    pub round: Round,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Result panel open after a round ends
    pub show_result: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    /// Wins indexed by attempts used (index 0 unused)
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, round: &Round) {
        self.total_games += 1;
        match round.status() {
            GameStatus::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                if let Some(slot) = self.guess_distribution.get_mut(round.attempts()) {
                    *slot += 1;
                }
            }
            GameStatus::Lost => self.current_streak = 0,
            GameStatus::Playing => {}
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(roster: &'a Roster, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = Round::random(roster, &mut rng);

        let mut app = Self {
            roster,
            round,
            rng,
            messages: Vec::new(),
            stats: Statistics::default(),
            show_result: false,
            should_quit: false,
        };
        app.announce_round();
        app
    }

    fn announce_round(&mut self) {
        let len = self.round.target().name_len();
        self.add_message(
            &format!("Guess the Persona! The name has {len} characters."),
            MessageStyle::Info,
        );
    }

    /// Submit the typed guess
    pub fn submit(&mut self) {
        let guess = self.round.current_guess().to_string();

        match self.round.check_guess(&guess) {
            Ok(()) => {}
            Err(Rejection::Empty) => return,
            Err(reason) => {
                self.add_message(&format!("Not submitted: {reason}"), MessageStyle::Error);
                return;
            }
        }

        self.round = self.round.submit_guess(&guess, &mut self.rng);

        match self.round.status() {
            GameStatus::Won => {
                self.stats.record(&self.round);
                self.show_result = true;
                let celebration = match self.round.attempts() {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    _ => "PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Lost => {
                self.stats.record(&self.round);
                self.show_result = true;
                let text = format!("Out of attempts. It was {}.", self.round.target().name);
                self.add_message(&text, MessageStyle::Error);
            }
            GameStatus::Playing => {
                let text = format!("{} attempts left", self.round.remaining_attempts());
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.round = self.round.reset(self.roster, &mut self.rng);
        self.show_result = false;
        self.messages.clear();
        self.announce_round();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.show_result {
                    self.show_result = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab => self.new_game(),
            KeyCode::Enter => {
                if self.round.is_finished() {
                    self.new_game();
                } else {
                    self.submit();
                }
            }
            KeyCode::Backspace => self.round = self.round.backspace(),
            KeyCode::Char(c) => self.round = self.round.type_char(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("tui loop failed: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    let stats = &app.stats;
    tracing::info!(games = stats.total_games, won = stats.games_won, "session finished");
    Ok(())
}
