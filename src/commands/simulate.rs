//! Simulation command
//!
//! Plays many rounds with a fixed letter-frequency guesser to gauge how
//! winnable a word pool is under the trial budget.

use crate::core::Word;
use crate::game::{Round, pick_word};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Letters in descending English frequency order; the guesser's fixed policy
const FREQUENCY_ORDER: &[u8] = b"eariotnslcudpmhgbfywkvxzjq";

/// Result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub total_misses: usize,
    pub average_misses: f64,
    pub miss_distribution: HashMap<u8, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `rounds` rounds against randomly drawn words
///
/// Each round is played by guessing letters in frequency order until the
/// round terminates; the word draw comes from the injected random source.
pub fn run_simulation<R: Rng>(words: &[Word], rounds: usize, rng: &mut R) -> SimulationResult {
    let pb = ProgressBar::new(rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut wins = 0;
    let mut total_misses = 0;
    let mut miss_distribution: HashMap<u8, usize> = HashMap::new();
    let mut played = 0;

    for _ in 0..rounds {
        let Some(word) = pick_word(words, rng) else {
            break;
        };

        let round = play_frequency_round(word.clone());
        played += 1;

        if round.blanks().is_complete() {
            wins += 1;
        }
        let misses = round.trials_used();
        total_misses += usize::from(misses);
        *miss_distribution.entry(misses).or_insert(0) += 1;

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let losses = played - wins;

    SimulationResult {
        total_rounds: played,
        wins,
        losses,
        win_rate: if played > 0 {
            wins as f64 / played as f64
        } else {
            0.0
        },
        total_misses,
        average_misses: if played > 0 {
            total_misses as f64 / played as f64
        } else {
            0.0
        },
        miss_distribution,
        duration,
        rounds_per_second: played as f64 / duration.as_secs_f64(),
    }
}

/// Play one round to termination with the frequency guesser
fn play_frequency_round(word: Word) -> Round {
    let mut round = Round::new(word);

    // The order covers all 26 letters, so every round terminates
    for &letter in FREQUENCY_ORDER {
        round.guess(letter as char);
        if round.is_over() {
            break;
        }
    }

    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_TRIALS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<Word> {
        words_from_slice(&["ear", "tins", "quartz", "banana", "rhythm"])
    }

    #[test]
    fn frequency_order_covers_alphabet() {
        let mut letters: Vec<u8> = FREQUENCY_ORDER.to_vec();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<u8>>());
    }

    #[test]
    fn every_simulated_round_terminates() {
        let round = play_frequency_round(Word::new("rhythm").unwrap());
        assert!(round.is_over());
    }

    #[test]
    fn easy_word_is_won_without_misses() {
        // "ear" letters lead the frequency order
        let round = play_frequency_round(Word::new("ear").unwrap());
        assert!(round.blanks().is_complete());
        assert_eq!(round.trials_used(), 0);
    }

    #[test]
    fn simulation_counts_add_up() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_simulation(&words, 25, &mut rng);

        assert_eq!(result.total_rounds, 25);
        assert_eq!(result.wins + result.losses, result.total_rounds);

        let distribution_sum: usize = result.miss_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_rounds);
    }

    #[test]
    fn simulation_metrics_consistency() {
        let words = pool();
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_simulation(&words, 25, &mut rng);

        assert!(result.win_rate >= 0.0 && result.win_rate <= 1.0);
        assert!(result.average_misses >= 0.0);
        assert!(result.average_misses <= f64::from(MAX_TRIALS));
        for &misses in result.miss_distribution.keys() {
            assert!(misses <= MAX_TRIALS);
        }
    }

    #[test]
    fn simulation_empty_pool() {
        let words: Vec<Word> = vec![];
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_simulation(&words, 10, &mut rng);

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.wins, 0);
        assert_eq!(result.losses, 0);
    }

    #[test]
    fn simulation_seeded_rng_is_reproducible() {
        let words = pool();

        let a = run_simulation(&words, 25, &mut StdRng::seed_from_u64(11));
        let b = run_simulation(&words, 25, &mut StdRng::seed_from_u64(11));

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.total_misses, b.total_misses);
    }
}
