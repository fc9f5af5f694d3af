//! Word list loading utilities
//!
//! Provides functions to load word pools from files or use the embedded list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a plain-text file
///
/// Words are separated by whitespace: single spaces and newlines collapse
/// identically. Entries that fail `Word` validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .split_whitespace()
        .filter_map(|entry| Word::new(entry).ok())
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "lemon", "fig"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "lemon");
        assert_eq!(words[2].text(), "fig");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["apple", "", "gr4pe", "lemon"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "lemon");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
