//! The turn engine
//!
//! Owns the corpus, the seats, and the shared string. Applies exactly one
//! action per call and reports what happened as a direct return value;
//! nothing else mutates the game or the dictionary.

use super::controller::PlayerError;
use super::player::Player;
use super::state::{GameState, TurnView};
use crate::core::{Action, Word};
use crate::dictionary::DictionaryIndex;
use std::fmt;

/// Error type for driving a game
#[derive(Debug)]
pub enum GameError {
    /// `play_turn` was called after the game ended
    Finished,
    /// The acting player could not produce an action
    Player(PlayerError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "The game is already over"),
            Self::Player(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Finished => None,
            Self::Player(e) => Some(e),
        }
    }
}

impl From<PlayerError> for GameError {
    fn from(e: PlayerError) -> Self {
        Self::Player(e)
    }
}

/// What a single turn did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A letter was appended and the round goes on
    Letter { seat: usize, letter: char },
    /// The letter finished a word; the seat is out and the string resets
    CompletedWord { seat: usize, word: Word },
    /// The seat left the game voluntarily
    Forfeited { seat: usize },
    /// The challenged seat had no defense; they are out
    ChallengeUpheld {
        challenger: usize,
        defender: usize,
        /// What the defender offered, if they were asked at all
        revealed: Option<Word>,
    },
    /// The challenged seat revealed a real word; the challenger is out
    ChallengeRebuffed {
        challenger: usize,
        defender: usize,
        revealed: Word,
    },
}

/// Where the game stands between turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the seat to act
    AwaitingAction { seat: usize },
    /// Finished; `winner` is the surviving seat, if any
    GameOver { winner: Option<usize> },
}

/// One game of Ghost
pub struct Game {
    dictionary: DictionaryIndex,
    state: GameState,
    players: Vec<Player>,
    status: GameStatus,
}

impl Game {
    /// Seat the players around a corpus
    ///
    /// Fewer than two live players means the game is over before anyone acts.
    #[must_use]
    pub fn new(dictionary: DictionaryIndex, players: Vec<Player>) -> Self {
        let state = GameState::new(dictionary.min_word_length());
        let status = if players.iter().filter(|p| p.is_alive()).count() < 2 {
            GameStatus::GameOver {
                winner: players.iter().position(Player::is_alive),
            }
        } else {
            GameStatus::AwaitingAction { seat: 0 }
        };

        Self {
            dictionary,
            state,
            players,
            status,
        }
    }

    /// The corpus backing this game
    #[must_use]
    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    /// The in-progress letter sequence
    #[must_use]
    pub fn shared(&self) -> &str {
        self.state.shared()
    }

    /// Minimum length a completed word must have
    #[must_use]
    pub fn min_word_length(&self) -> usize {
        self.state.min_word_length()
    }

    /// Every seat, in fixed rotation order
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player at `seat`
    #[must_use]
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    /// Mutable access to the player at `seat`
    pub fn player_mut(&mut self, seat: usize) -> &mut Player {
        &mut self.players[seat]
    }

    /// Where the game stands between turns
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// How many seats are still playing, recomputed from statuses
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// The winning player, once the game is over
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::GameOver { winner } => winner.map(|seat| &self.players[seat]),
            GameStatus::AwaitingAction { .. } => None,
        }
    }

    /// The seat immediately before `seat` in the fixed rotation
    ///
    /// Eliminated seats stay in the rotation for this lookup; they just
    /// never act.
    #[must_use]
    pub fn previous_seat(&self, seat: usize) -> usize {
        (seat + self.players.len() - 1) % self.players.len()
    }

    /// Run one turn: ask the current seat for an action and apply it
    ///
    /// # Errors
    /// Fails when the game is already over or the acting player cannot
    /// produce an action.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        let GameStatus::AwaitingAction { seat } = self.status else {
            return Err(GameError::Finished);
        };

        let alive_count = self.alive_count();
        let view = TurnView {
            shared: self.state.shared(),
            player_index: seat,
            alive_count,
            min_word_length: self.state.min_word_length(),
        };
        let action = self.players[seat].next_action(&self.dictionary, &view)?;

        let outcome = match action {
            Action::AppendLetter(letter) => self.apply_letter(seat, letter),
            Action::Forfeit => {
                self.players[seat].forfeit();
                TurnOutcome::Forfeited { seat }
            }
            Action::Challenge => self.apply_challenge(seat),
        };

        self.conclude_turn(seat);
        Ok(outcome)
    }

    fn apply_letter(&mut self, seat: usize, letter: char) -> TurnOutcome {
        self.state.append_letter(letter);

        match self.completed_word() {
            Some(word) => {
                self.players[seat].kill();
                self.dictionary.remove_word(word.text());
                self.state.reset_shared();
                TurnOutcome::CompletedWord { seat, word }
            }
            None => TurnOutcome::Letter { seat, letter },
        }
    }

    /// The shared string as a completed word, when it is one of legal length
    fn completed_word(&self) -> Option<Word> {
        let shared = self.state.shared();
        if shared.len() < self.state.min_word_length() || !self.dictionary.is_complete_word(shared)
        {
            return None;
        }
        Word::new(shared).ok()
    }

    fn apply_challenge(&mut self, challenger: usize) -> TurnOutcome {
        let defender = self.previous_seat(challenger);

        // A dead string settles the challenge before any defense is heard
        let outcome = if self.dictionary.can_become_word(self.state.shared()) {
            let alive_count = self.alive_count();
            let view = TurnView {
                shared: self.state.shared(),
                player_index: defender,
                alive_count,
                min_word_length: self.state.min_word_length(),
            };
            let revealed = self.players[defender].challenge_response(&self.dictionary, &view);

            match revealed {
                Some(word) if self.dictionary.is_complete_word(word.text()) => {
                    self.players[challenger].kill();
                    TurnOutcome::ChallengeRebuffed {
                        challenger,
                        defender,
                        revealed: word,
                    }
                }
                revealed => {
                    self.players[defender].kill();
                    TurnOutcome::ChallengeUpheld {
                        challenger,
                        defender,
                        revealed,
                    }
                }
            }
        } else {
            self.players[defender].kill();
            TurnOutcome::ChallengeUpheld {
                challenger,
                defender,
                revealed: None,
            }
        };

        // A challenge always ends the round
        self.state.reset_shared();
        outcome
    }

    fn conclude_turn(&mut self, seat: usize) {
        if self.alive_count() < 2 {
            self.status = GameStatus::GameOver {
                winner: self.players.iter().position(Player::is_alive),
            };
            return;
        }

        let next = self.next_alive_seat(seat);
        self.state.set_current(next);
        self.status = GameStatus::AwaitingAction { seat: next };
    }

    fn next_alive_seat(&self, from: usize) -> usize {
        let seats = self.players.len();
        for step in 1..=seats {
            let seat = (from + step) % seats;
            if self.players[seat].is_alive() {
                return seat;
            }
        }
        // Unreachable: callers have checked at least two seats are alive
        from
    }
}
