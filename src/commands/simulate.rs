//! Bot-only simulation command
//!
//! Plays many automated games under a base seed and measures who wins and
//! how long games run.

use super::play::bot_name;
use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use crate::game::{AutomatedController, Game, GameError, GameStatus, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    /// Number of games to play
    pub games: usize,
    /// Number of automated seats per game
    pub players: usize,
    /// Base seed; every bot derives its own stream from it
    pub seed: u64,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub games: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    /// Win count per seat, in seating order
    pub wins: Vec<(String, usize)>,
    /// Games that ended with no survivor
    pub draws: usize,
    /// Words removed from corpora across all games
    pub words_consumed: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run bot-only games and tally the outcomes
///
/// Each game gets a fresh corpus; bots are seeded deterministically from
/// the base seed, so identical configurations reproduce identical results.
///
/// # Errors
/// Fails when a game cannot be driven to completion.
pub fn run_simulation(
    words: &[Word],
    min_word_length: usize,
    config: &SimulateConfig,
) -> Result<SimulationResult, GameError> {
    let start = Instant::now();
    let mut win_counts = vec![0_usize; config.players];
    let mut draws = 0;
    let mut total_turns = 0;
    let mut words_consumed = 0;

    for game_number in 0..config.games {
        let dictionary = DictionaryIndex::new(words.to_vec(), min_word_length);
        let corpus_size = dictionary.len();
        let mut game = Game::new(dictionary, roster(config, game_number));

        loop {
            match game.status() {
                GameStatus::GameOver { winner } => {
                    match winner {
                        Some(seat) => win_counts[seat] += 1,
                        None => draws += 1,
                    }
                    break;
                }
                GameStatus::AwaitingAction { .. } => {
                    game.play_turn()?;
                    total_turns += 1;
                }
            }
        }

        words_consumed += corpus_size - game.dictionary().len();
    }

    let duration = start.elapsed();
    let wins = win_counts
        .into_iter()
        .enumerate()
        .map(|(seat, count)| (bot_name(seat), count))
        .collect();

    Ok(SimulationResult {
        games: config.games,
        total_turns,
        average_turns: total_turns as f64 / config.games as f64,
        wins,
        draws,
        words_consumed,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64(),
    })
}

/// One automated seat per slot, each on its own stream of the base seed
fn roster(config: &SimulateConfig, game_number: usize) -> Vec<Player> {
    (0..config.players)
        .map(|seat| {
            let stream = (game_number * config.players + seat) as u64;
            let rng = StdRng::seed_from_u64(config.seed.wrapping_add(stream));
            Player::new(
                bot_name(seat),
                Box::new(AutomatedController::new(Box::new(rng))),
            )
        })
        .collect()
}
