//! Formatting utilities for terminal output

use crate::core::{Blanks, PLACEHOLDER};
use crate::game::MAX_TRIALS;

/// Gallows drawings indexed by wrong guesses spent, 0 through [`MAX_TRIALS`]
const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Gallows drawing for the given number of wrong guesses
///
/// Saturates at the final stage.
#[must_use]
pub fn gallows(trials_used: u8) -> &'static str {
    GALLOWS[usize::from(trials_used.min(MAX_TRIALS))]
}

/// Format the reveal mask as a spaced, uppercase line ("A P P _ _")
#[must_use]
pub fn blanks_line(blanks: &Blanks) -> String {
    let rendered: Vec<String> = blanks
        .iter()
        .map(|slot| {
            slot.map_or_else(
                || PLACEHOLDER.to_string(),
                |letter| letter.to_ascii_uppercase().to_string(),
            )
        })
        .collect();
    rendered.join(" ")
}

/// Format remaining trials as a bar
#[must_use]
pub fn trials_gauge(trials_remaining: u8) -> String {
    let remaining = usize::from(trials_remaining.min(MAX_TRIALS));
    format!(
        "{}{}",
        "█".repeat(remaining),
        "░".repeat(usize::from(MAX_TRIALS) - remaining)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_has_a_stage_per_trial() {
        let stages: std::collections::HashSet<&str> =
            (0..=MAX_TRIALS).map(gallows).collect();
        assert_eq!(stages.len(), usize::from(MAX_TRIALS) + 1);
    }

    #[test]
    fn gallows_empty_frame_has_no_body() {
        assert!(!gallows(0).contains('O'));
    }

    #[test]
    fn gallows_final_stage_is_complete() {
        let last = gallows(MAX_TRIALS);
        assert!(last.contains('O'));
        assert!(last.contains(r"/ \"));
    }

    #[test]
    fn gallows_saturates_past_max() {
        assert_eq!(gallows(MAX_TRIALS + 5), gallows(MAX_TRIALS));
    }

    #[test]
    fn blanks_line_mixes_letters_and_placeholders() {
        let mut blanks = Blanks::new(5);
        blanks.reveal(0, b'a');
        blanks.reveal(1, b'p');
        blanks.reveal(2, b'p');

        assert_eq!(blanks_line(&blanks), "A P P _ _");
    }

    #[test]
    fn blanks_line_all_placeholders() {
        let blanks = Blanks::new(3);
        assert_eq!(blanks_line(&blanks), "_ _ _");
    }

    #[test]
    fn trials_gauge_full() {
        assert_eq!(trials_gauge(MAX_TRIALS), "██████");
    }

    #[test]
    fn trials_gauge_empty() {
        assert_eq!(trials_gauge(0), "░░░░░░");
    }

    #[test]
    fn trials_gauge_partial() {
        assert_eq!(trials_gauge(4), "████░░");
    }
}
