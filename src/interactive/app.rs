//! TUI application state and logic

use crate::core::Word;
use crate::game::{GuessOutcome, MAX_TRIALS, Outcome, Round, pick_word};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashSet;
use std::io;

/// Application state
pub struct App<'a> {
    words: &'a [Word],
    pub round: Round,
    /// Letters disabled by the hint, kept apart from the guessed set
    pub suppressed: FxHashSet<char>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

/// Render state of one virtual key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Untried,
    Hit,
    Miss,
    Suppressed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_rounds: usize,
    pub rounds_won: usize,
    pub hints_taken: usize,
    /// Rounds bucketed by wrong guesses spent (index 6 = losses)
    pub miss_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Fails if the word pool is empty.
    pub fn new(words: &'a [Word], mut rng: StdRng) -> Result<Self> {
        let word = pick_word(words, &mut rng)
            .context("word list is empty")?
            .clone();

        let mut app = Self {
            words,
            round: Round::new(word),
            suppressed: FxHashSet::default(),
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };

        app.add_message(
            &format!("Welcome! The word has {} letters.", app.round.word().len()),
            MessageStyle::Info,
        );
        app.add_message("Type letters to guess.", MessageStyle::Info);

        Ok(app)
    }

    /// Apply a letter key press to the current round
    pub fn guess(&mut self, letter: char) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        match self.round.guess(letter) {
            GuessOutcome::Hit(positions) => {
                let count = positions.len();
                self.add_message(
                    &format!(
                        "'{}' appears {} {}!",
                        letter.to_ascii_uppercase(),
                        count,
                        if count == 1 { "time" } else { "times" }
                    ),
                    MessageStyle::Success,
                );
            }
            GuessOutcome::Miss { trials_remaining } => {
                self.add_message(
                    &format!(
                        "No '{}' ({trials_remaining} {} left)",
                        letter.to_ascii_uppercase(),
                        if trials_remaining == 1 {
                            "trial"
                        } else {
                            "trials"
                        }
                    ),
                    MessageStyle::Error,
                );
                if self.hint_offered() {
                    self.add_message("Press '?' for a hint!", MessageStyle::Info);
                }
            }
            GuessOutcome::Ignored => {
                self.add_message(
                    &format!("Already tried '{}'", letter.to_ascii_uppercase()),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Over => {}
        }

        if self.round.is_over() {
            self.finish_round();
        }
    }

    /// Start a fresh round with a newly drawn word
    pub fn new_round(&mut self) {
        if let Some(word) = pick_word(self.words, &mut self.rng) {
            self.round = Round::new(word.clone());
            self.suppressed.clear();
            self.input_mode = InputMode::Playing;
            self.messages.clear();
            self.add_message(
                &format!("New word with {} letters. Good luck!", self.round.word().len()),
                MessageStyle::Info,
            );
        }
    }

    /// Take the one-shot hint, if the view currently offers it
    pub fn request_hint(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        if !self.hint_offered() {
            if self.round.hint_used() {
                self.add_message("The hint is already spent.", MessageStyle::Error);
            } else {
                self.add_message(
                    "Hints unlock on your last trial.",
                    MessageStyle::Error,
                );
            }
            return;
        }

        if let Some(eliminated) = self.round.hint(&mut self.rng) {
            self.suppressed.extend(eliminated.iter().copied());
            self.stats.hints_taken += 1;

            let mut letters: Vec<char> = eliminated;
            letters.sort_unstable();
            let listed: Vec<String> = letters
                .iter()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect();
            self.add_message(
                &format!("Not in the word: {}", listed.join(", ")),
                MessageStyle::Success,
            );
        }
    }

    /// View policy: the hint is offered on the last trial, once per round
    #[must_use]
    pub fn hint_offered(&self) -> bool {
        !self.round.hint_used()
            && self.round.outcome() == Outcome::Ongoing
            && self.round.trials_remaining() <= 1
    }

    /// Render state of a virtual key
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        if self.round.has_guessed(letter) {
            if self.round.word().has_letter(letter.to_ascii_lowercase() as u8) {
                KeyState::Hit
            } else {
                KeyState::Miss
            }
        } else if self.suppressed.contains(&letter.to_ascii_lowercase()) {
            KeyState::Suppressed
        } else {
            KeyState::Untried
        }
    }

    fn finish_round(&mut self) {
        let misses = usize::from(self.round.trials_used());
        self.stats.total_rounds += 1;
        self.stats.miss_distribution[misses.min(usize::from(MAX_TRIALS))] += 1;
        self.input_mode = InputMode::RoundOver;

        match self.round.outcome() {
            Outcome::Won => {
                self.stats.rounds_won += 1;

                let celebration = match self.round.trials_used() {
                    0 => "🏆 FLAWLESS! Not a single miss!",
                    1 => "⭐ Excellent! Only one miss!",
                    2 | 3 => "✨ Nice work!",
                    4 | 5 => "😅 Phew! That was close!",
                    _ => "🎉 Solved!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(
                    &format!(
                        "💀 Out of trials! The word was {}",
                        self.round.word().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
            }
            Outcome::Ongoing => {}
        }

        self.add_message(
            "Press Enter for a new word or Esc to quit.",
            MessageStyle::Info,
        );
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
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

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.new_round();
                    }
                    _ => {
                        // Between rounds, ignore other keys
                    }
                },
                InputMode::Playing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('?') => {
                        app.request_hint();
                    }
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        // Every letter key is a guess; controls are
                        // non-letter keys only
                        app.guess(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app_with(words: &[Word]) -> App<'_> {
        App::new(words, StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn new_app_fails_on_empty_pool() {
        let words: Vec<Word> = vec![];
        assert!(App::new(&words, StdRng::seed_from_u64(5)).is_err());
    }

    #[test]
    fn guessing_updates_key_state() {
        let words = words_from_slice(&["apple"]);
        let mut app = app_with(&words);

        app.guess('a');
        assert_eq!(app.key_state('a'), KeyState::Hit);

        app.guess('z');
        assert_eq!(app.key_state('z'), KeyState::Miss);

        assert_eq!(app.key_state('b'), KeyState::Untried);
    }

    #[test]
    fn winning_flips_to_round_over_and_counts() {
        let words = words_from_slice(&["ox"]);
        let mut app = app_with(&words);

        app.guess('o');
        app.guess('x');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_rounds, 1);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.miss_distribution[0], 1);
    }

    #[test]
    fn losing_records_six_misses() {
        let words = words_from_slice(&["ox"]);
        let mut app = app_with(&words);

        for letter in ['a', 'b', 'c', 'd', 'e', 'f'] {
            app.guess(letter);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 0);
        assert_eq!(app.stats.miss_distribution[6], 1);
    }

    #[test]
    fn guesses_ignored_between_rounds() {
        let words = words_from_slice(&["ox"]);
        let mut app = app_with(&words);

        app.guess('o');
        app.guess('x');
        let trials = app.round.trials_remaining();

        app.guess('q');
        assert_eq!(app.round.trials_remaining(), trials);
        assert_eq!(app.stats.total_rounds, 1);
    }

    #[test]
    fn new_round_resets_suppressed_keys() {
        let words = words_from_slice(&["apple"]);
        let mut app = app_with(&words);

        for letter in ['b', 'c', 'd', 'f', 'g'] {
            app.guess(letter);
        }
        assert!(app.hint_offered());
        app.request_hint();
        assert!(!app.suppressed.is_empty());

        app.input_mode = InputMode::RoundOver;
        app.new_round();
        assert!(app.suppressed.is_empty());
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn hint_refused_before_last_trial() {
        let words = words_from_slice(&["apple"]);
        let mut app = app_with(&words);

        assert!(!app.hint_offered());
        app.request_hint();
        assert!(!app.round.hint_used());
        assert!(app.suppressed.is_empty());
    }

    #[test]
    fn hint_marks_keys_suppressed_not_guessed() {
        let words = words_from_slice(&["apple"]);
        let mut app = app_with(&words);

        for letter in ['b', 'c', 'd', 'f', 'g'] {
            app.guess(letter);
        }
        app.request_hint();

        let suppressed: Vec<char> = app.suppressed.iter().copied().collect();
        assert!(!suppressed.is_empty());
        for letter in suppressed {
            assert_eq!(app.key_state(letter), KeyState::Suppressed);
            assert!(!app.round.has_guessed(letter));
        }
        assert_eq!(app.stats.hints_taken, 1);
    }
}
