//! Corpus index backing all dictionary queries
//!
//! Keeps two views of the corpus in lockstep: the enumeration (load order,
//! which for the bundled lists is frequency rank) and a hash set for O(1)
//! membership. Substring queries are answered word by word, never against a
//! concatenated buffer, so a fragment spanning two adjacent words can never
//! match.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for malformed dictionary queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The queried fragment is shorter than the minimum legal word length
    FragmentTooShort { length: usize, minimum: usize },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FragmentTooShort { length, minimum } => write!(
                f,
                "Fragment of length {length} is below the minimum word length {minimum}"
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Index over the corpus of legal words
///
/// Built once per game and mutated only by [`DictionaryIndex::remove_word`]
/// as completed words are consumed.
pub struct DictionaryIndex {
    words: Vec<Word>,
    present: FxHashSet<Word>,
    min_word_length: usize,
}

impl DictionaryIndex {
    /// Build the index from an ordered word list
    ///
    /// The input order becomes the enumeration order. Duplicates are
    /// dropped, keeping the first occurrence, so word lists need not be
    /// pre-deduplicated.
    #[must_use]
    pub fn new(words: Vec<Word>, min_word_length: usize) -> Self {
        let mut present = FxHashSet::default();
        let mut enumeration = Vec::with_capacity(words.len());

        for word in words {
            if present.insert(word.clone()) {
                enumeration.push(word);
            }
        }

        Self {
            words: enumeration,
            present,
            min_word_length,
        }
    }

    /// Minimum legal word length this index was built with
    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Number of words currently in the corpus
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when every word has been consumed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The corpus in enumeration order
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Case-insensitive exact membership test
    ///
    /// Anything that is not a single alphabetic token (empty input,
    /// multiple tokens, punctuation) is simply not a word.
    #[must_use]
    pub fn is_complete_word(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.present.contains(&word))
    }

    /// Can `text` still grow into a legal word?
    ///
    /// True iff some single corpus word of legal length contains `text` as
    /// a contiguous substring, case-insensitively. Unlike
    /// [`DictionaryIndex::is_possible_word`] this has no length
    /// precondition, so the engines can probe fragments shorter than the
    /// minimum word length.
    #[must_use]
    pub fn can_become_word(&self, text: &str) -> bool {
        let fragment = text.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.len() >= self.min_word_length)
            .any(|word| word.text().contains(&fragment))
    }

    /// Is `text` on its way to becoming a word?
    ///
    /// # Errors
    /// Fails with [`DictionaryError::FragmentTooShort`] when `text` is
    /// shorter than the minimum word length; callers must pre-check.
    pub fn is_possible_word(&self, text: &str) -> Result<bool, DictionaryError> {
        if text.len() < self.min_word_length {
            return Err(DictionaryError::FragmentTooShort {
                length: text.len(),
                minimum: self.min_word_length,
            });
        }

        Ok(self.can_become_word(text))
    }

    /// All corpus words starting with `prefix`, at least `min_length` long
    ///
    /// Case-insensitive on the prefix; results preserve enumeration order,
    /// so repeated calls are deterministic.
    #[must_use]
    pub fn find_words_with_prefix(&self, prefix: &str, min_length: usize) -> Vec<&Word> {
        let prefix = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.len() >= min_length && word.starts_with(&prefix))
            .collect()
    }

    /// Remove a word from both the set and the enumeration
    ///
    /// Removal is keyed by exact word identity; other words keep their
    /// relative order. Returns false (a documented no-op) when the word was
    /// not present.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let Ok(word) = Word::new(word) else {
            return false;
        };

        if !self.present.remove(&word) {
            return false;
        }

        self.words.retain(|w| *w != word);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> DictionaryIndex {
        let words = words
            .iter()
            .map(|&w| Word::new(w).unwrap())
            .collect::<Vec<_>>();
        DictionaryIndex::new(words, 3)
    }

    // Mirrors a small dictionary file: "caleb" ends right before "anchor"
    // begins, so "leban" only exists across the boundary.
    fn sample() -> DictionaryIndex {
        index(&[
            "apple",
            "zed",
            "temperature",
            "xylophone",
            "haircut",
            "caleb",
            "anchor",
        ])
    }

    #[test]
    fn complete_word_exact_matches() {
        let dict = sample();
        assert!(dict.is_complete_word("apple"));
        assert!(dict.is_complete_word("Apple"));
        assert!(dict.is_complete_word("ZED"));
    }

    #[test]
    fn complete_word_rejects_non_words() {
        let dict = sample();
        assert!(!dict.is_complete_word("!"));
        assert!(!dict.is_complete_word("multi word"));
        assert!(!dict.is_complete_word("badword"));
        assert!(!dict.is_complete_word(""));
    }

    #[test]
    fn possible_word_start_middle_end() {
        let dict = sample();
        assert!(dict.is_possible_word("apple").unwrap()); // whole word
        assert!(dict.is_possible_word("perat").unwrap()); // middle of temperature
        assert!(dict.is_possible_word("xyl").unwrap()); // start of xylophone
        assert!(dict.is_possible_word("cut").unwrap()); // end of haircut
        assert!(!dict.is_possible_word("qqq").unwrap());
    }

    #[test]
    fn possible_word_is_case_insensitive() {
        let dict = sample();
        assert!(dict.is_possible_word("PERAT").unwrap());
    }

    #[test]
    fn possible_word_short_fragment_fails() {
        let dict = sample();
        assert_eq!(
            dict.is_possible_word("xy"),
            Err(DictionaryError::FragmentTooShort {
                length: 2,
                minimum: 3
            })
        );
    }

    #[test]
    fn possible_word_never_crosses_word_boundaries() {
        let dict = sample();
        // "caleb" + "anchor" would contain "leban" if words were
        // concatenated into one searchable buffer.
        assert!(!dict.is_possible_word("leban").unwrap());
    }

    #[test]
    fn can_become_word_ignores_words_below_minimum_length() {
        let dict = index(&["ax"]);
        assert!(!dict.can_become_word("a"));
        assert!(!dict.can_become_word("ax"));

        let dict = index(&["axe"]);
        assert!(dict.can_become_word("a"));
    }

    #[test]
    fn find_words_with_prefix_preserves_enumeration_order() {
        let dict = index(&["cab", "dog", "cat", "cattle", "ca"]);
        let found: Vec<&str> = dict
            .find_words_with_prefix("ca", 3)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(found, vec!["cab", "cat", "cattle"]);
    }

    #[test]
    fn find_words_with_prefix_is_case_insensitive() {
        let dict = index(&["cat"]);
        assert_eq!(dict.find_words_with_prefix("CA", 3).len(), 1);
    }

    #[test]
    fn find_words_with_prefix_empty_prefix_returns_all_long_enough() {
        let dict = index(&["ca", "cat", "dog"]);
        assert_eq!(dict.find_words_with_prefix("", 3).len(), 2);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let dict = index(&["cat", "dog", "cat", "CAT"]);
        assert_eq!(dict.len(), 2);
        let found: Vec<&str> = dict
            .find_words_with_prefix("", 3)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(found, vec!["cat", "dog"]);
    }

    #[test]
    fn remove_word_updates_every_query() {
        let mut dict = index(&["cat", "cats", "dog"]);

        assert!(dict.remove_word("cat"));
        assert!(!dict.is_complete_word("cat"));
        assert!(dict.is_complete_word("cats"));

        let found: Vec<&str> = dict
            .find_words_with_prefix("ca", 3)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(found, vec!["cats"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn remove_word_absent_is_a_noop() {
        let mut dict = index(&["cat"]);
        assert!(!dict.remove_word("dog"));
        assert!(!dict.remove_word("not a word"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn remove_word_exact_identity_not_substring() {
        // "cat" appears inside "cattle"; removal must only touch "cat".
        let mut dict = index(&["cattle", "cat"]);
        assert!(dict.remove_word("cat"));
        assert!(dict.is_complete_word("cattle"));
        assert!(dict.can_become_word("cat"));
    }
}
