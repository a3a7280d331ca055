//! The automated player's decision procedure
//!
//! Given the shared string and the seat's place in the rotation, pick a
//! challenge, a letter, or a concession. Letter choices chase a target word
//! whose length leaves the completing letter to some other seat.

use super::safety::{has_unsafe_prefix_word, is_safe_length};
use crate::core::Word;
use crate::dictionary::DictionaryIndex;
use crate::game::TurnView;
use rand::RngCore;
use rand::prelude::IndexedRandom;

/// Winning targets are drawn from the most common twentieth of the pool
const COMMON_POOL_DIVISOR: usize = 20;

/// What the strategy wants to do with the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Append the next letter of `target`
    Play { target: Word, letter: char },
    /// The shared string can no longer become a word; call out the previous seat
    Challenge,
    /// Nothing extends the shared string, concede the game
    Forfeit,
}

/// Decide the current turn
///
/// A dead string is challenged immediately. Otherwise the cached target is
/// kept when it still fits the board, or replaced through
/// [`select_target_word`], and its next letter is played.
pub fn decide(
    dictionary: &DictionaryIndex,
    view: &TurnView<'_>,
    cached_target: Option<&Word>,
    rng: &mut dyn RngCore,
) -> Decision {
    if !view.shared.is_empty() && !dictionary.can_become_word(view.shared) {
        return Decision::Challenge;
    }

    let target = cached_target
        .filter(|target| target_still_valid(dictionary, view.shared, target))
        .cloned()
        .or_else(|| select_target_word(dictionary, view, rng));

    match target {
        Some(target) => match target.letter_at(view.shared.len()) {
            Some(letter) => Decision::Play { target, letter },
            // Targets are strictly longer than the shared string
            None => Decision::Forfeit,
        },
        None => Decision::Forfeit,
    }
}

/// Does a previously chosen target still fit the board?
///
/// Other seats may have steered the string away from it, and completed
/// rounds may have consumed it from the corpus.
#[must_use]
pub fn target_still_valid(dictionary: &DictionaryIndex, shared: &str, target: &Word) -> bool {
    target.len() > shared.len()
        && target.starts_with(shared)
        && dictionary.is_complete_word(target.text())
}

/// Choose a word to steer the shared string toward
///
/// Prefers candidates whose completing letter falls to another seat, drops
/// those that pass through a shorter word that would end the round on this
/// seat first, and biases the final draw toward the most common words.
/// Returns `None` when nothing in the corpus extends the shared string.
pub fn select_target_word(
    dictionary: &DictionaryIndex,
    view: &TurnView<'_>,
    rng: &mut dyn RngCore,
) -> Option<Word> {
    let candidates: Vec<&Word> = dictionary
        .find_words_with_prefix(view.shared, view.min_word_length)
        .into_iter()
        .filter(|word| word.len() > view.shared.len())
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let safe: Vec<&Word> = candidates
        .iter()
        .copied()
        .filter(|word| {
            is_safe_length(
                word.len(),
                view.shared.len(),
                view.alive_count,
                view.player_index,
            )
        })
        .collect();

    if safe.is_empty() {
        // Nothing safe; chase the longest word and hope an opponent slips
        let mut longest = candidates[0];
        for word in &candidates[1..] {
            if word.len() > longest.len() {
                longest = word;
            }
        }
        return Some(longest.clone());
    }

    let winning: Vec<&Word> = safe
        .iter()
        .copied()
        .filter(|word| {
            !has_unsafe_prefix_word(
                dictionary,
                word,
                view.shared.len(),
                view.alive_count,
                view.player_index,
                view.min_word_length,
            )
        })
        .collect();

    let choice = if winning.is_empty() {
        safe.choose(rng)
    } else {
        // Pools keep corpus enumeration order, so the head of the list is
        // the most common fraction
        let keep = winning.len().div_ceil(COMMON_POOL_DIVISOR);
        winning[..keep].choose(rng)
    };

    choice.map(|word| (*word).clone())
}

/// Produce a word to reveal when challenged
///
/// The cached target is revealed when it still fits, otherwise a fresh
/// target is sought. `None` concedes the challenge.
pub fn defend_challenge(
    dictionary: &DictionaryIndex,
    view: &TurnView<'_>,
    cached_target: Option<&Word>,
    rng: &mut dyn RngCore,
) -> Option<Word> {
    cached_target
        .filter(|target| target_still_valid(dictionary, view.shared, target))
        .cloned()
        .or_else(|| select_target_word(dictionary, view, rng))
}
