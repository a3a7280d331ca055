//! Players and their life-cycle status

use super::controller::{Controller, PlayerError};
use super::state::TurnView;
use crate::core::{Action, Word};
use crate::dictionary::DictionaryIndex;
use std::fmt;

/// Where a player stands in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Still playing
    Alive,
    /// Gave up voluntarily
    Forfeited,
    /// Eliminated by completing a word or losing a challenge
    Killed,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Forfeited => write!(f, "forfeited"),
            Self::Killed => write!(f, "killed"),
        }
    }
}

/// One seat at the table: a name, a status, and whoever makes its decisions
pub struct Player {
    name: String,
    status: PlayerStatus,
    controller: Box<dyn Controller>,
}

impl Player {
    /// Seat a player behind a capability implementation
    pub fn new(name: impl Into<String>, controller: Box<dyn Controller>) -> Self {
        Self {
            name: name.into(),
            status: PlayerStatus::Alive,
            controller,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        self.status
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        matches!(self.status, PlayerStatus::Alive)
    }

    /// Eliminate this player
    pub const fn kill(&mut self) {
        self.status = PlayerStatus::Killed;
    }

    /// Withdraw this player voluntarily
    pub const fn forfeit(&mut self) {
        self.status = PlayerStatus::Forfeited;
    }

    /// Put an eliminated player back in the game
    pub const fn revive(&mut self) {
        self.status = PlayerStatus::Alive;
    }

    pub(crate) fn next_action(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Result<Action, PlayerError> {
        self.controller.next_action(dictionary, view)
    }

    pub(crate) fn challenge_response(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Option<Word> {
        self.controller.challenge_response(dictionary, view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl Controller for Inert {
        fn next_action(
            &mut self,
            _dictionary: &DictionaryIndex,
            _view: &TurnView<'_>,
        ) -> Result<Action, PlayerError> {
            Ok(Action::Forfeit)
        }

        fn challenge_response(
            &mut self,
            _dictionary: &DictionaryIndex,
            _view: &TurnView<'_>,
        ) -> Option<Word> {
            None
        }
    }

    #[test]
    fn players_start_alive() {
        let player = Player::new("Cornelius", Box::new(Inert));
        assert_eq!(player.name(), "Cornelius");
        assert_eq!(player.status(), PlayerStatus::Alive);
        assert!(player.is_alive());
    }

    #[test]
    fn kill_and_forfeit_take_a_seat_out() {
        let mut player = Player::new("a", Box::new(Inert));
        player.kill();
        assert_eq!(player.status(), PlayerStatus::Killed);
        assert!(!player.is_alive());

        let mut player = Player::new("b", Box::new(Inert));
        player.forfeit();
        assert_eq!(player.status(), PlayerStatus::Forfeited);
        assert!(!player.is_alive());
    }

    #[test]
    fn revive_restores_a_seat() {
        let mut player = Player::new("a", Box::new(Inert));
        player.kill();
        player.revive();
        assert!(player.is_alive());
    }
}
