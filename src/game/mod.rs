//! The turn engine and the players it drives

mod controller;
mod engine;
mod player;
mod state;

pub use controller::{
    AutomatedController, Controller, InteractiveController, MAX_INPUT_ATTEMPTS, PlayerError,
    PlayerIo,
};
pub use engine::{Game, GameError, GameStatus, TurnOutcome};
pub use player::{Player, PlayerStatus};
pub use state::{DEFAULT_MIN_WORD_LENGTH, GameState, TurnView};
