//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{BOT_NAMES, PlayConfig, bot_name, run_play};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
