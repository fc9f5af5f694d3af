//! Simple interactive CLI mode
//!
//! Line-based hangman game without the TUI.

use crate::core::Word;
use crate::game::{GuessOutcome, Outcome, Round, pick_word};
use crate::output::{print_outcome, print_round};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word pool is empty or reading user input fails.
pub fn run_simple<R: Rng>(words: &[Word], rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hangman - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word one letter at a time.");
    println!("Every wrong letter costs a trial; six wrong letters and it's over.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'hint' when offered\n");

    loop {
        let word = pick_word(words, rng).ok_or("Word list is empty")?.clone();
        let mut round = Round::new(word);
        let mut ruled_out: Vec<char> = Vec::new();

        let keep_playing = play_round(&mut round, &mut ruled_out, rng)?;
        if !keep_playing {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Play a single round; returns false when the player wants to stop
fn play_round<R: Rng>(
    round: &mut Round,
    ruled_out: &mut Vec<char>,
    rng: &mut R,
) -> Result<bool, String> {
    loop {
        println!("────────────────────────────────────────────────────────────");
        print_round(round);
        if !ruled_out.is_empty() {
            println!(
                "  Ruled out by hint: {}",
                format_letters(ruled_out).bright_black()
            );
        }

        let hint_offered = hint_offered(round);
        if hint_offered {
            println!("{}", "  💡 Down to the wire - type 'hint' for help".yellow());
        }

        let input = get_user_input("Guess a letter")?.to_lowercase();

        match input.as_str() {
            "quit" | "exit" => return Ok(false),
            "new" => {
                println!("\n🔄 New word!\n");
                return Ok(true);
            }
            "hint" => {
                if hint_offered {
                    // Engine already refuses a second hint; the gating here
                    // is the view's trials-remaining policy
                    if let Some(eliminated) = round.hint(rng) {
                        ruled_out.extend(eliminated.iter().copied());
                        ruled_out.sort_unstable();
                        println!(
                            "\n💡 Not in the word: {}\n",
                            format_letters(ruled_out).yellow().bold()
                        );
                    }
                } else if round.hint_used() {
                    println!("\n{}\n", "The hint is already spent.".red());
                } else {
                    println!(
                        "\n{}\n",
                        "Hints unlock when you're down to your last trial.".red()
                    );
                }
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => apply_guess(round, letter),
                    _ => println!("\n❌ Enter a single letter, 'new', 'hint', or 'quit'\n"),
                }
            }
        }

        if round.is_over() {
            print_outcome(round);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    println!("\n🔄 New word!\n");
                    return Ok(true);
                }
                _ => return Ok(false),
            }
        }
    }
}

fn apply_guess(round: &mut Round, letter: char) {
    match round.guess(letter) {
        GuessOutcome::Hit(positions) => {
            let count = positions.len();
            println!(
                "\n{}\n",
                format!(
                    "✓ '{}' appears {} {}",
                    letter.to_ascii_uppercase(),
                    count,
                    if count == 1 { "time" } else { "times" }
                )
                .green()
            );
        }
        GuessOutcome::Miss { trials_remaining } => {
            println!(
                "\n{}\n",
                format!(
                    "✗ No '{}' in the word ({trials_remaining} left)",
                    letter.to_ascii_uppercase()
                )
                .red()
            );
        }
        GuessOutcome::Ignored => {
            if letter.is_ascii_alphabetic() {
                println!(
                    "\nAlready tried '{}'\n",
                    letter.to_ascii_uppercase()
                );
            } else {
                println!("\n❌ Letters only\n");
            }
        }
        GuessOutcome::Over => {}
    }
}

/// View policy: offer the hint once the player is on their last trial
fn hint_offered(round: &Round) -> bool {
    !round.hint_used() && round.outcome() == Outcome::Ongoing && round.trials_remaining() <= 1
}

fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn hint_offered_only_on_last_trial() {
        let mut round = Round::new(Word::new("apple").unwrap());
        assert!(!hint_offered(&round));

        for letter in ['b', 'c', 'd', 'f', 'g'] {
            round.guess(letter);
        }
        assert_eq!(round.trials_remaining(), 1);
        assert!(hint_offered(&round));
    }

    #[test]
    fn hint_not_offered_twice() {
        let mut rng = rand::rng();
        let mut round = Round::new(Word::new("apple").unwrap());
        for letter in ['b', 'c', 'd', 'f', 'g'] {
            round.guess(letter);
        }

        assert!(round.hint(&mut rng).is_some());
        assert!(!hint_offered(&round));
    }

    #[test]
    fn hint_not_offered_after_loss() {
        let mut round = Round::new(Word::new("apple").unwrap());
        for letter in ['b', 'c', 'd', 'f', 'g', 'h'] {
            round.guess(letter);
        }
        assert_eq!(round.outcome(), Outcome::Lost);
        assert!(!hint_offered(&round));
    }

    #[test]
    fn format_letters_uppercases_and_joins() {
        assert_eq!(format_letters(&['a', 'z']), "A, Z");
        assert_eq!(format_letters(&[]), "");
    }
}
