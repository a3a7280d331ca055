//! Interactive game command
//!
//! Runs one full game on the console. The first seats belong to humans
//! prompted through stdin, the rest to automated players from the house
//! roster.

use crate::core::{CHALLENGE_SYMBOL, FORFEIT_SYMBOL, Word};
use crate::dictionary::DictionaryIndex;
use crate::game::{
    AutomatedController, Game, GameError, GameStatus, InteractiveController, Player, PlayerIo,
};
use crate::output::display;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// The automated cast, in seating order
pub const BOT_NAMES: &[&str] = &["Alouiciousness", "Bobert", "Cornelius", "Danwise"];

/// Configuration for an interactive game
pub struct PlayConfig {
    /// Total number of seats
    pub players: usize,
    /// How many of the first seats are humans at this console
    pub humans: usize,
    /// Seed for the bots; `None` plays a different game every run
    pub seed: Option<u64>,
}

/// Name for the nth automated seat, numbering repeats past the roster
#[must_use]
pub fn bot_name(index: usize) -> String {
    let base = BOT_NAMES[index % BOT_NAMES.len()];
    if index < BOT_NAMES.len() {
        base.to_string()
    } else {
        format!("{base} {}", index / BOT_NAMES.len() + 1)
    }
}

/// Run one interactive game to completion
///
/// # Errors
/// Fails when console input cannot be read or a human uses up their input
/// attempts.
pub fn run_play(
    words: Vec<Word>,
    min_word_length: usize,
    config: &PlayConfig,
) -> Result<(), GameError> {
    let dictionary = DictionaryIndex::new(words, min_word_length);
    let mut game = Game::new(dictionary, build_players(config));

    display::print_welcome(&game);
    loop {
        match game.status() {
            GameStatus::GameOver { .. } => {
                display::print_game_over(&game);
                return Ok(());
            }
            GameStatus::AwaitingAction { seat } => {
                display::print_turn_banner(game.player(seat).name(), game.shared());
                let outcome = game.play_turn()?;
                display::print_outcome(&game, &outcome);
            }
        }
    }
}

fn build_players(config: &PlayConfig) -> Vec<Player> {
    let mut players = Vec::with_capacity(config.players);

    for seat in 0..config.players {
        let player = if seat < config.humans {
            Player::new(
                format!("Player {}", seat + 1),
                Box::new(InteractiveController::new(ConsoleIo)),
            )
        } else {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(seat as u64)),
                None => StdRng::from_os_rng(),
            };
            Player::new(
                bot_name(seat - config.humans),
                Box::new(AutomatedController::new(Box::new(rng))),
            )
        };
        players.push(player);
    }

    players
}

/// Stdin-backed prompt collaborator for human seats
struct ConsoleIo;

impl PlayerIo for ConsoleIo {
    fn prompt_action(&mut self, _shared: &str) -> io::Result<String> {
        print!("Append a letter ('{FORFEIT_SYMBOL}' forfeits, '{CHALLENGE_SYMBOL}' challenges)>> ");
        io::stdout().flush()?;
        read_line()
    }

    fn prompt_word(&mut self, shared: &str) -> io::Result<String> {
        print!("You are challenged! What word were you building from \"{shared}\"?>> ");
        io::stdout().flush()?;
        read_line()
    }

    fn notify_invalid(&mut self, message: &str) -> io::Result<()> {
        println!("{}", message.red());
        Ok(())
    }
}

fn read_line() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
