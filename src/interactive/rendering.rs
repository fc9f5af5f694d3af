//! TUI rendering with ratatui
//!
//! Projects a round snapshot onto gallows, blanks, keyboard, and status
//! widgets every frame.

use super::app::{App, InputMode, KeyState, MessageStyle};
use crate::game::{MAX_TRIALS, Outcome};
use crate::output::formatters::{blanks_line, gallows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Virtual keyboard rows
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Virtual keys
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word + messages
        ])
        .split(chunks[1]);

    render_gallows_panel(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    // Virtual keyboard
    render_keyboard(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Terminal Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Gallows art
            Constraint::Length(3), // Trials gauge
        ])
        .split(area);

    let art = Paragraph::new(gallows(app.round.trials_used()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(art, chunks[0]);

    render_trials_gauge(f, app, chunks[1]);
}

fn render_trials_gauge(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.round.trials_remaining();
    let color = match remaining {
        4..=u8::MAX => Color::Green,
        2 | 3 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Trials ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(f64::from(remaining) / f64::from(MAX_TRIALS))
        .label(format!("{remaining}/{MAX_TRIALS} trials left"));

    f.render_widget(gauge, area);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Secret word
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_secret_word(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_secret_word(f: &mut Frame, app: &App, area: Rect) {
    // Once the round ends the full word is shown
    let (text, style) = match app.round.outcome() {
        Outcome::Won => (
            spaced_word(app.round.word().text()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Outcome::Lost => (
            spaced_word(app.round.word().text()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Outcome::Ongoing => (
            blanks_line(app.round.blanks()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(text, style)),
        Line::from(Span::styled(
            format!("{} letters", app.round.word().len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Secret Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.hint_offered() {
        " Virtual Keys | '?' for a hint "
    } else {
        " Virtual Keys "
    };

    let mut lines = Vec::with_capacity(KEY_ROWS.len());
    for row in KEY_ROWS {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for letter in row.chars() {
            spans.push(key_span(app, letter));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn key_span(app: &App, letter: char) -> Span<'static> {
    let label = letter.to_ascii_uppercase().to_string();
    let style = match app.key_state(letter) {
        KeyState::Hit => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyState::Miss => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        KeyState::Suppressed => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        KeyState::Untried => Style::default().fg(Color::White),
    };
    Span::styled(label, style)
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Playing => format!("Round {}", app.stats.total_rounds + 1),
        InputMode::RoundOver => "Round over".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Won: {}/{} | Win Rate: {:.0}%",
        app.stats.rounds_won,
        app.stats.total_rounds,
        if app.stats.total_rounds > 0 {
            app.stats.rounds_won as f64 / app.stats.total_rounds as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let hint_text = if app.round.hint_used() {
        "Hint: spent"
    } else if app.hint_offered() {
        "Hint: ready ('?')"
    } else {
        "Hint: locked"
    };
    let hint = Paragraph::new(hint_text).alignment(Alignment::Center);
    f.render_widget(hint, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | a-z: Guess",
        InputMode::RoundOver => "Esc: Quit | Enter: New Word",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn spaced_word(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
