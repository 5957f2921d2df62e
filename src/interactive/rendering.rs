//! TUI rendering with ratatui
//!
//! Board, hint, keyboard and result panel for the Personadle game.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, Persona, affinity_for};
use crate::game::{GameStatus, KEYBOARD_ROWS, KeyStatus, Round};
use crate::output::formatters::{attempt_dots, spaced_hint};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board_panel(f, &app.round, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, &app.round, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_result && app.round.is_finished() {
        let area = f.area();
        render_result(f, &app.round, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("PERSONADLE - Guess the Persona!")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_board_panel(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Attempts and hint
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Used letters
        ])
        .split(area);

    render_progress(f, round, chunks[0]);
    render_board(f, round, chunks[1]);
    render_used_letters(f, round, chunks[2]);
}

fn render_progress(f: &mut Frame, round: &Round, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::raw("Attempts: "),
        Span::styled(
            attempt_dots(round.attempts(), round.max_attempts()),
            Style::default().fg(Color::Red),
        ),
        Span::raw(format!(" {}/{}", round.attempts(), round.max_attempts())),
    ])];

    if round.hint_visible() {
        lines.push(Line::from(vec![
            Span::raw("Hint:     "),
            Span::styled(
                spaced_hint(round.hint()).to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn tile_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, round: &Round, area: Rect) {
    let name_len = round.target().name_len();
    let mut lines: Vec<Line> = Vec::with_capacity(round.max_attempts());

    for (guess, feedback) in round.rows() {
        let tiles: Vec<Span> = guess
            .chars()
            .zip(feedback.statuses())
            .map(|(c, &status)| {
                if c == ' ' {
                    Span::raw("   ")
                } else {
                    Span::styled(format!(" {} ", c.to_ascii_uppercase()), tile_style(status))
                }
            })
            .collect();
        lines.push(Line::from(tiles));
    }

    if round.status() == GameStatus::Playing {
        let typed: Vec<char> = round.current_guess().chars().collect();
        let tiles: Vec<Span> = (0..name_len)
            .map(|i| match typed.get(i) {
                Some(' ') => Span::raw("   "),
                Some(c) => Span::styled(
                    format!(" {} ", c.to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                None => Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            })
            .collect();
        lines.push(Line::from(tiles));
    }

    while lines.len() < round.max_attempts() {
        lines.push(Line::styled(
            " · ".repeat(name_len),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board ({name_len} letters) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_used_letters(f: &mut Frame, round: &Round, area: Rect) {
    let used = round
        .used_letters()
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let paragraph = Paragraph::new(used)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .title(" Used Letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(4), // Affinity clues
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.round, chunks[0]);
    render_clues(f, &app.round, chunks[1]);
    render_messages(f, app, chunks[2]);
}

/// Weak and Resists of the target, shown while the round is open
fn render_clues(f: &mut Frame, round: &Round, area: Rect) {
    let lines: Vec<Line> = if round.status() == GameStatus::Playing {
        let persona = round.target();
        [("Weak", &persona.weak), ("Resists", &persona.resists)]
            .into_iter()
            .map(|(label, elements)| {
                if elements.is_empty() {
                    Line::from(vec![
                        Span::styled(format!("{label:<10}"), Style::default().fg(Color::Gray)),
                        Span::styled("none", Style::default().fg(Color::DarkGray)),
                    ])
                } else {
                    affinity_line(label, elements)
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let clues = Paragraph::new(lines).block(
        Block::default()
            .title(" Affinities ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(clues, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect) {
    let keys = round.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let status = keys.get(&c).copied().unwrap_or_default();
                    [
                        Span::styled(c.to_ascii_uppercase().to_string(), key_style(status)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, round: &Round, area: Rect) {
    let (title, color) = match round.status() {
        GameStatus::Playing => (" Type a name | Enter: submit | Backspace: delete ", Color::Yellow),
        GameStatus::Won => (" Solved! | Enter: new round ", Color::Green),
        GameStatus::Lost => (" Out of attempts | Enter: new round ", Color::Red),
    };

    let input = Paragraph::new(round.current_guess().to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Tab: New Round | Esc: Quit | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn affinity_line<'a>(label: &'a str, elements: &'a [String]) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!("{label:<10}"),
        Style::default().fg(Color::Gray),
    )];
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(", "));
        }
        let affinity = affinity_for(element);
        let (r, g, b) = affinity.color;
        spans.push(Span::styled(
            format!("{} {}", affinity.icon, affinity.name),
            Style::default()
                .fg(Color::Rgb(r, g, b))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn persona_lines(persona: &Persona) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(
            persona.name.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Arcana: {}   Level: {}", persona.arcana, persona.level)),
        Line::from(
            persona
                .stats()
                .iter()
                .map(|(label, value)| format!("{label} {value}"))
                .collect::<Vec<_>>()
                .join("  "),
        )
        .style(Style::default().fg(Color::DarkGray)),
        Line::from(""),
    ];

    if !persona.description.is_empty() {
        lines.push(Line::from(persona.description.as_str()));
        lines.push(Line::from(""));
    }

    let groups = [
        ("Weak", &persona.weak),
        ("Resists", &persona.resists),
        ("Reflects", &persona.reflects),
        ("Absorbs", &persona.absorbs),
        ("Nullifies", &persona.nullifies),
    ];
    for (label, elements) in groups {
        if !elements.is_empty() {
            lines.push(affinity_line(label, elements));
        }
    }

    lines
}

fn render_result(f: &mut Frame, round: &Round, area: Rect) {
    let (headline, color) = match round.status() {
        GameStatus::Won => (
            format!(
                "Congratulations! Solved in {} {}.",
                round.attempts(),
                if round.attempts() == 1 { "try" } else { "tries" }
            ),
            Color::Green,
        ),
        _ => ("Game over. The Persona was:".to_string(), Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(persona_lines(round.target()));
    lines.push(Line::from(""));
    lines.extend(round.share_grid().lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(
        Line::from("Enter: new round | Esc: close").style(Style::default().fg(Color::DarkGray)),
    );

    let popup = centered_rect(70, 80, area);
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
