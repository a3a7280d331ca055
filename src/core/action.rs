//! Turn actions
//!
//! The three things a player can do on their turn, validated at construction
//! so the turn engine only ever sees well-formed values.

use std::fmt;

/// Symbol an interactive player types to forfeit
pub const FORFEIT_SYMBOL: char = '!';

/// Symbol an interactive player types to challenge the previous player
pub const CHALLENGE_SYMBOL: char = '?';

/// One turn's action, chosen by the current player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a single lowercase letter to the shared string
    AppendLetter(char),
    /// Give up; the player leaves the game
    Forfeit,
    /// Assert that the previous player cannot complete any word
    Challenge,
}

/// Error type for malformed action input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    NotALetter(String),
    Unrecognized(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(input) => {
                write!(f, "Expected a single letter a-z, got {input:?}")
            }
            Self::Unrecognized(input) => write!(
                f,
                "Expected a letter, {FORFEIT_SYMBOL:?} to forfeit, or {CHALLENGE_SYMBOL:?} to challenge, got {input:?}"
            ),
        }
    }
}

impl std::error::Error for ActionError {}

/// Validate a raw letter response, normalizing to lowercase
///
/// Accepts exactly one ASCII letter of either case. Shared by every input
/// boundary (interactive prompts and action parsing) so the rules cannot
/// drift apart.
///
/// # Examples
/// ```
/// use ghost_engine::core::validate_letter;
///
/// assert_eq!(validate_letter("a"), Some('a'));
/// assert_eq!(validate_letter("Z"), Some('z'));
/// assert_eq!(validate_letter("ab"), None);
/// assert_eq!(validate_letter("4"), None);
/// ```
#[must_use]
pub fn validate_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

impl Action {
    /// Build an `AppendLetter` action from a raw letter
    ///
    /// # Errors
    /// Returns `ActionError::NotALetter` unless the input is a single ASCII
    /// letter of either case.
    pub fn append(letter: char) -> Result<Self, ActionError> {
        if letter.is_ascii_alphabetic() {
            Ok(Self::AppendLetter(letter.to_ascii_lowercase()))
        } else {
            Err(ActionError::NotALetter(letter.to_string()))
        }
    }

    /// Parse one line of player input into an action
    ///
    /// A single letter appends, [`FORFEIT_SYMBOL`] forfeits, and
    /// [`CHALLENGE_SYMBOL`] challenges.
    ///
    /// # Errors
    /// Returns `ActionError::Unrecognized` for anything else; the turn
    /// engine never sees unvalidated input.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        let trimmed = input.trim();
        match trimmed {
            t if t.len() == 1 && t.starts_with(FORFEIT_SYMBOL) => Ok(Self::Forfeit),
            t if t.len() == 1 && t.starts_with(CHALLENGE_SYMBOL) => Ok(Self::Challenge),
            t => validate_letter(t)
                .map(Self::AppendLetter)
                .ok_or_else(|| ActionError::Unrecognized(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AppendLetter(c) => write!(f, "append '{c}'"),
            Self::Forfeit => write!(f, "forfeit"),
            Self::Challenge => write!(f, "challenge"),
        }
    }
}
