//! Player capability implementations
//!
//! The uniform interface between the turn engine and whoever decides a turn:
//! the strategy engine for automated seats, a prompt collaborator for
//! interactive ones.

use super::state::TurnView;
use crate::core::{Action, Word};
use crate::dictionary::DictionaryIndex;
use crate::solver::{self, Decision};
use rand::RngCore;
use std::fmt;
use std::io;

/// How many malformed inputs an interactive seat may submit per prompt
pub const MAX_INPUT_ATTEMPTS: usize = 3;

/// Error type for a player that cannot produce an action
#[derive(Debug)]
pub enum PlayerError {
    /// An interactive player used up their input attempts
    AttemptsExhausted,
    /// The player's input channel failed
    Io(io::Error),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttemptsExhausted => {
                write!(f, "Too many invalid inputs ({MAX_INPUT_ATTEMPTS} attempts)")
            }
            Self::Io(e) => write!(f, "Input error: {e}"),
        }
    }
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AttemptsExhausted => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PlayerError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The capability set every seat implements
///
/// One action per turn, and a revealed word when the seat is challenged.
/// Returning `None` from [`Controller::challenge_response`] concedes the
/// challenge; it is a defined outcome, not an error.
pub trait Controller {
    /// Choose this turn's action
    ///
    /// # Errors
    /// Fails when the seat cannot produce a well-formed action at all, such
    /// as an interactive player exhausting their input attempts.
    fn next_action(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Result<Action, PlayerError>;

    /// Reveal the word this seat claims to be building
    fn challenge_response(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Option<Word>;
}

/// A seat driven by the strategy engine
///
/// Deterministic under a seeded random source. The target word is cached
/// between turns and re-validated against the board each time.
pub struct AutomatedController {
    rng: Box<dyn RngCore>,
    target: Option<Word>,
}

impl AutomatedController {
    /// Create an automated seat with an injected random source
    #[must_use]
    pub fn new(rng: Box<dyn RngCore>) -> Self {
        Self { rng, target: None }
    }

    /// The word this seat is currently building toward
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }
}

impl Controller for AutomatedController {
    fn next_action(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Result<Action, PlayerError> {
        match solver::decide(dictionary, view, self.target.as_ref(), self.rng.as_mut()) {
            Decision::Play { target, letter } => {
                self.target = Some(target);
                Ok(Action::AppendLetter(letter))
            }
            Decision::Challenge => {
                self.target = None;
                Ok(Action::Challenge)
            }
            Decision::Forfeit => {
                self.target = None;
                Ok(Action::Forfeit)
            }
        }
    }

    fn challenge_response(
        &mut self,
        dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Option<Word> {
        solver::defend_challenge(dictionary, view, self.target.as_ref(), self.rng.as_mut())
    }
}

/// Prompt collaborator an interactive seat talks to
///
/// The core never touches a terminal itself; whoever implements this trait
/// renders the prompts and returns raw lines.
pub trait PlayerIo {
    /// Ask for one action line, given the current shared string
    ///
    /// # Errors
    /// Fails when the input channel cannot be read.
    fn prompt_action(&mut self, shared: &str) -> io::Result<String>;

    /// Ask for the word the seat claims to be building
    ///
    /// # Errors
    /// Fails when the input channel cannot be read.
    fn prompt_word(&mut self, shared: &str) -> io::Result<String>;

    /// Tell the seat their last input was rejected
    ///
    /// # Errors
    /// Fails when the output channel cannot be written.
    fn notify_invalid(&mut self, message: &str) -> io::Result<()>;
}

/// A seat driven by an external prompt collaborator
///
/// Validates every line at this boundary; the turn engine only ever sees
/// well-formed actions.
pub struct InteractiveController<Io> {
    io: Io,
}

impl<Io: PlayerIo> InteractiveController<Io> {
    /// Create an interactive seat over a prompt collaborator
    pub fn new(io: Io) -> Self {
        Self { io }
    }
}

impl<Io: PlayerIo> Controller for InteractiveController<Io> {
    fn next_action(
        &mut self,
        _dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Result<Action, PlayerError> {
        for _ in 0..MAX_INPUT_ATTEMPTS {
            let line = self.io.prompt_action(view.shared)?;
            match Action::parse(&line) {
                Ok(action) => return Ok(action),
                Err(e) => self.io.notify_invalid(&e.to_string())?,
            }
        }

        Err(PlayerError::AttemptsExhausted)
    }

    fn challenge_response(
        &mut self,
        _dictionary: &DictionaryIndex,
        view: &TurnView<'_>,
    ) -> Option<Word> {
        // An unreadable or malformed reveal is a concession
        self.io
            .prompt_word(view.shared)
            .ok()
            .and_then(|line| Word::new(line.trim()).ok())
    }
}
