//! Word lists backing the game corpus
//!
//! Provides an embedded frequency-ranked list plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{COMMON, COMMON_COUNT};
