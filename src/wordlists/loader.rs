//! Word list loading utilities
//!
//! Word lists arrive one token per line in arbitrary case and are not
//! pre-deduplicated; anything that is not a single alphabetic token is
//! skipped here, and the corpus index collapses duplicates.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank and invalid lines are skipped; the file's order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ghost_engine::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/common_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Build words from any sequence of lines, skipping invalid entries
#[must_use]
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect()
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use ghost_engine::wordlists::COMMON;
/// use ghost_engine::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(COMMON);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_normalizes_and_skips_invalid() {
        let words = words_from_lines(["The", "cat", "", "dog!", "two words"]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["the", "cat"]);
    }

    #[test]
    fn words_from_slice_preserves_order() {
        let words = words_from_slice(&["cat", "dog", "bird"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[2].text(), "bird");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_common() {
        use crate::wordlists::COMMON;

        let words = words_from_slice(COMMON);
        assert_eq!(words.len(), COMMON.len());
    }

    #[test]
    fn load_from_file_reads_and_skips_invalid() {
        let path = std::env::temp_dir().join(format!("ghost_words_{}.txt", std::process::id()));
        fs::write(&path, "The\ncat\n\ndog!\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["the", "cat"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }
}
