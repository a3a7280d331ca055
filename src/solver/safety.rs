//! Turn-order safety arithmetic
//!
//! Letters are appended round-robin, so the gap between a candidate word's
//! length and the shared string decides which seat must type the completing
//! letter. A length is safe for a seat when that completing turn lands
//! elsewhere.

use crate::core::Word;
use crate::dictionary::DictionaryIndex;

/// Is a word of `word_len` letters safe for `seat` to pursue?
///
/// `word_len` must exceed `shared_len`, and `alive_count` must be nonzero.
#[must_use]
pub const fn is_safe_length(
    word_len: usize,
    shared_len: usize,
    alive_count: usize,
    seat: usize,
) -> bool {
    (word_len - shared_len) % alive_count != seat
}

/// Does `word` pass through a shorter dictionary word that is unsafe?
///
/// Spelling toward `word` commits every intermediate prefix to the board. A
/// prefix of legal length that is itself a complete word ends the round as
/// soon as it appears, so the whole path is only sound when each such prefix
/// is a safe length too.
#[must_use]
pub fn has_unsafe_prefix_word(
    dictionary: &DictionaryIndex,
    word: &Word,
    shared_len: usize,
    alive_count: usize,
    seat: usize,
    min_word_length: usize,
) -> bool {
    let start = min_word_length.max(shared_len + 1);
    (start..word.len()).any(|length| {
        dictionary.is_complete_word(&word.text()[..length])
            && !is_safe_length(length, shared_len, alive_count, seat)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> DictionaryIndex {
        let words = words.iter().map(|&w| Word::new(w).unwrap()).collect();
        DictionaryIndex::new(words, 3)
    }

    #[test]
    fn safe_when_the_completing_turn_lands_elsewhere() {
        // Two alive, seat 0, two letters played: a 5-letter word leaves an
        // odd gap, so the other seat types the final letter.
        assert!(is_safe_length(5, 2, 2, 0));
        assert!(!is_safe_length(4, 2, 2, 0));

        assert!(is_safe_length(4, 2, 2, 1));
        assert!(!is_safe_length(5, 2, 2, 1));
    }

    #[test]
    fn safety_wraps_around_larger_tables() {
        assert!(!is_safe_length(6, 0, 3, 0));
        assert!(is_safe_length(6, 0, 3, 1));
        assert!(is_safe_length(6, 0, 3, 2));
    }

    #[test]
    fn unsafe_prefix_word_is_detected() {
        let dict = dictionary(&["dog", "dogs"]);
        let word = Word::new("dogs").unwrap();

        // From an empty board with two alive, "dog" falls on seat 1.
        assert!(has_unsafe_prefix_word(&dict, &word, 0, 2, 1, 3));
        assert!(!has_unsafe_prefix_word(&dict, &word, 0, 2, 0, 3));
    }

    #[test]
    fn prefixes_shorter_than_the_minimum_are_ignored() {
        // "cat" inside "cattle" is never checked below the minimum length.
        let dict = dictionary(&["cattle"]);
        let word = Word::new("cattle").unwrap();

        assert!(!has_unsafe_prefix_word(&dict, &word, 0, 2, 0, 3));
    }

    #[test]
    fn prefixes_at_or_behind_the_shared_string_are_ignored() {
        // The board already holds "dog"; only letters still to come matter.
        let dict = dictionary(&["dog", "dogma"]);
        let word = Word::new("dogma").unwrap();

        assert!(!has_unsafe_prefix_word(&dict, &word, 3, 2, 1, 3));
    }
}
