//! Hangman - CLI
//!
//! Terminal hangman with a virtual-keyboard TUI, a plain CLI mode, and a
//! simulation mode for gauging word pools.

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_simple, run_simulation},
    core::Word,
    output::print_simulation_result,
    wordlists::{WORDS, loader::words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with six trials, one-shot hints, and a virtual keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed the random source (word draws and hints) for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Simulate many rounds with a letter-frequency guesser
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the word pool based on the -w flag
///
/// "embedded" uses the list compiled into the binary; anything else is
/// treated as a file path. An empty pool is fatal here, before any round
/// starts.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use hangman::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    ensure!(
        !words.is_empty(),
        "word list '{wordlist_mode}' contains no usable words"
    );

    Ok(words)
}

/// Build the process random source, seeded when -s is given
fn build_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    let mut rng = build_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, rng),
        Commands::Simple => run_simple(&words, &mut rng).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count } => {
            let result = run_simulation(&words, count, &mut rng);
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(words: &[Word], rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, rng)?;
    run_tui(app)
}
