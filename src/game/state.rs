//! Mutable per-game state
//!
//! The shared string and turn pointer, owned and mutated exclusively by the
//! turn engine. Players observe it through a borrowed [`TurnView`].

/// Minimum completed-word length in standard Ghost
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// The state one game mutates turn by turn
#[derive(Debug, Clone)]
pub struct GameState {
    shared: String,
    current: usize,
    min_word_length: usize,
}

impl GameState {
    /// Fresh state: empty shared string, first seat to act
    #[must_use]
    pub const fn new(min_word_length: usize) -> Self {
        Self {
            shared: String::new(),
            current: 0,
            min_word_length,
        }
    }

    /// The in-progress letter sequence
    #[inline]
    #[must_use]
    pub fn shared(&self) -> &str {
        &self.shared
    }

    /// Index of the seat whose turn it is
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Minimum length a completed word must have
    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub(crate) fn append_letter(&mut self, letter: char) {
        self.shared.push(letter);
    }

    /// A round ended; the string starts over, the rotation does not
    pub(crate) fn reset_shared(&mut self) {
        self.shared.clear();
    }

    pub(crate) const fn set_current(&mut self, index: usize) {
        self.current = index;
    }
}

/// A player's read-only view of the game at their turn
///
/// Carries everything the strategy needs: the shared string, the acting
/// seat's index in turn order, how many players are still alive, and the
/// minimum word length.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub shared: &'a str,
    pub player_index: usize,
    pub alive_count: usize,
    pub min_word_length: usize,
}
