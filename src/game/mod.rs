//! The guessing-state engine
//!
//! Round tracks one game of hangman; `pick_word` chooses the secret word.
//! Everything that touches randomness takes an injectable `rand::Rng` so
//! behavior is reproducible under test.

mod picker;
mod round;

pub use picker::pick_word;
pub use round::{GuessOutcome, MAX_HINT_LETTERS, MAX_TRIALS, Outcome, Round};
