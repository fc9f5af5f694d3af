//! Round state machine
//!
//! A Round owns one secret word and tracks reveal progress, remaining trials,
//! the guessed-letter set, and the one-shot hint flag. Views render snapshots
//! of this state; they never mutate it directly.

use crate::core::{Blanks, Word};
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::FxHashSet;

/// Wrong guesses allowed before the round is lost
pub const MAX_TRIALS: u8 = 6;

/// Upper bound on letters a single hint may eliminate
pub const MAX_HINT_LETTERS: usize = 6;

/// Terminal status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Placeholders and trials both remain
    Ongoing,
    /// Every letter revealed
    Won,
    /// Trials exhausted with placeholders remaining
    Lost,
}

/// Result of applying a single letter guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; all listed positions were revealed
    Hit(Vec<usize>),
    /// The letter does not occur; one trial was spent
    Miss { trials_remaining: u8 },
    /// Repeated letter or non-letter input; nothing changed
    Ignored,
    /// The round already ended; nothing changed
    Over,
}

/// One round of hangman
///
/// Created fresh for every secret word. The word and mask length are fixed;
/// `blanks`, `trials_remaining`, `hint_used`, and the guessed set mutate until
/// the round reaches a terminal outcome, after which every operation is a
/// no-op.
#[derive(Debug, Clone)]
pub struct Round {
    word: Word,
    blanks: Blanks,
    trials_remaining: u8,
    hint_used: bool,
    guessed: FxHashSet<u8>,
}

impl Round {
    /// Start a round for the given secret word
    #[must_use]
    pub fn new(word: Word) -> Self {
        let blanks = Blanks::new(word.len());
        Self {
            word,
            blanks,
            trials_remaining: MAX_TRIALS,
            hint_used: false,
            guessed: FxHashSet::default(),
        }
    }

    /// Apply a letter guess
    ///
    /// A letter present in the word reveals every matching position in one
    /// call and costs nothing; an absent letter costs exactly one trial.
    /// Repeats, non-letters, and guesses after the round ended are no-ops.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    /// use hangman::game::{GuessOutcome, Round};
    ///
    /// let mut round = Round::new(Word::new("apple").unwrap());
    /// assert_eq!(round.guess('p'), GuessOutcome::Hit(vec![1, 2]));
    /// assert_eq!(round.guess('z'), GuessOutcome::Miss { trials_remaining: 5 });
    /// ```
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.outcome() != Outcome::Ongoing {
            return GuessOutcome::Over;
        }

        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Ignored;
        }
        let letter = letter.to_ascii_lowercase() as u8;

        if !self.guessed.insert(letter) {
            return GuessOutcome::Ignored;
        }

        let positions = self.word.positions_of(letter);
        if positions.is_empty() {
            self.trials_remaining = self.trials_remaining.saturating_sub(1);
            GuessOutcome::Miss {
                trials_remaining: self.trials_remaining,
            }
        } else {
            for &position in positions {
                self.blanks.reveal(position, letter);
            }
            GuessOutcome::Hit(positions.to_vec())
        }
    }

    /// Current status of the round
    ///
    /// A win takes precedence: trials are only spent on misses, so a single
    /// guess can never complete the word and exhaust trials at once.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.blanks.is_complete() {
            Outcome::Won
        } else if self.trials_remaining == 0 {
            Outcome::Lost
        } else {
            Outcome::Ongoing
        }
    }

    /// True once the round reached WIN or LOSE
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome() != Outcome::Ongoing
    }

    /// Use the one-shot hint
    ///
    /// Selects up to [`MAX_HINT_LETTERS`] letters uniformly at random from
    /// those that are neither in the secret word nor already guessed, for the
    /// view to disable. The selected letters are not recorded as guesses.
    /// Returns `None` if the hint was already used or the round ended.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Vec<char>> {
        if self.hint_used || self.is_over() {
            return None;
        }
        self.hint_used = true;

        let eliminated = (b'a'..=b'z')
            .filter(|letter| !self.word.has_letter(*letter) && !self.guessed.contains(letter))
            .map(char::from)
            .choose_multiple(rng, MAX_HINT_LETTERS);

        Some(eliminated)
    }

    /// The secret word
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The reveal mask
    #[must_use]
    pub fn blanks(&self) -> &Blanks {
        &self.blanks
    }

    /// Wrong guesses still allowed
    #[must_use]
    pub fn trials_remaining(&self) -> u8 {
        self.trials_remaining
    }

    /// Wrong guesses spent so far (the gallows stage, 0..=[`MAX_TRIALS`])
    #[must_use]
    pub fn trials_used(&self) -> u8 {
        MAX_TRIALS - self.trials_remaining
    }

    /// True once the one-shot hint was taken
    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// True if the letter was already tried this round
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        letter.is_ascii_alphabetic() && self.guessed.contains(&(letter.to_ascii_lowercase() as u8))
    }

    /// Number of distinct letters tried this round
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }
}
