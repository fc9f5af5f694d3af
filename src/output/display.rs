//! Display functions for command results

use super::formatters::{blanks_line, gallows, trials_gauge};
use crate::commands::SimulationResult;
use crate::game::{MAX_TRIALS, Outcome, Round};
use colored::Colorize;

/// Print the round as seen mid-game: gallows, blanks, trials
pub fn print_round(round: &Round) {
    println!("{}", gallows(round.trials_used()));
    println!("\n  {}\n", blanks_line(round.blanks()).bold());
    println!(
        "  Trials: [{}] {} left",
        trials_gauge(round.trials_remaining()).cyan(),
        round.trials_remaining()
    );
}

/// Print the terminal outcome of a round
pub fn print_outcome(round: &Round) {
    let secret = round.word().text().to_uppercase();

    match round.outcome() {
        Outcome::Won => {
            println!(
                "\n{}",
                format!("✅ You guessed it: {secret}").green().bold()
            );
            println!(
                "   {} wrong {} along the way",
                round.trials_used(),
                if round.trials_used() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
        }
        Outcome::Lost => {
            println!("{}", gallows(round.trials_used()));
            println!(
                "\n{}",
                format!("❌ Out of trials! The word was {secret}")
                    .red()
                    .bold()
            );
        }
        Outcome::Ongoing => {}
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Won:              {}",
        format!("{}", result.wins).green()
    );
    println!(
        "   Lost:             {}",
        format!("{}", result.losses).red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
    for misses in 0..=MAX_TRIALS {
        if let Some(&count) = result.miss_distribution.get(&misses) {
            let pct = (count as f64 / result.total_rounds as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {misses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
