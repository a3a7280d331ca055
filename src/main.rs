//! Ghost - CLI
//!
//! The word-building elimination game, played at the console against
//! dictionary-aware bots or simulated bot-only.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use ghost_engine::{
    commands::{PlayConfig, SimulateConfig, run_play, run_simulation},
    core::Word,
    game::DEFAULT_MIN_WORD_LENGTH,
    output::print_simulation_result,
    wordlists::{
        COMMON,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "ghost_engine",
    about = "The word-building elimination game Ghost, with dictionary-aware bots",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'common' (default, embedded frequency-ranked list) or path to file
    #[arg(short = 'w', long, global = true, default_value = "common")]
    wordlist: String,

    /// Minimum length a completed word must have
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the console (default)
    Play {
        /// Total number of seats
        #[arg(short, long, default_value_t = 2)]
        players: usize,

        /// How many of the first seats are humans at this console
        #[arg(short = 'u', long, default_value_t = 1)]
        humans: usize,

        /// Seed the bots for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run bot-only games and report the win distribution
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 100)]
        games: usize,

        /// Number of automated seats per game
        #[arg(short, long, default_value_t = 2)]
        players: usize,

        /// Base seed for every bot in the run
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

/// Load the corpus word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "common" => Ok(words_from_slice(COMMON)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    ensure!(!words.is_empty(), "The wordlist has no usable words");
    ensure!(cli.min_length >= 1, "Minimum word length must be at least 1");

    // Default to a two-seat game against one bot
    let command = cli.command.unwrap_or(Commands::Play {
        players: 2,
        humans: 1,
        seed: None,
    });

    match command {
        Commands::Play {
            players,
            humans,
            seed,
        } => {
            ensure!(players >= 2, "A game needs at least two seats");
            ensure!(humans <= players, "More humans than seats");

            let config = PlayConfig {
                players,
                humans,
                seed,
            };
            run_play(words, cli.min_length, &config)?;
            Ok(())
        }
        Commands::Simulate {
            games,
            players,
            seed,
        } => {
            ensure!(players >= 2, "A simulation needs at least two seats");

            let config = SimulateConfig {
                games,
                players,
                seed,
            };
            let result = run_simulation(&words, cli.min_length, &config)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}
