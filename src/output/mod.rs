//! Terminal output formatting
//!
//! Display utilities for game transcripts and simulation results.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_outcome, print_simulation_result, print_turn_banner, print_welcome,
};
