//! Word lists for hangman
//!
//! Provides the embedded default pool compiled into the binary plus file
//! loading for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_pool_is_not_empty() {
        // An empty pool is a configuration error surfaced at startup; the
        // bundled list must never trigger it
        assert!(!WORDS.is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty(), "empty entry in embedded list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_distinct() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len(), "duplicate entry in embedded list");
    }
}
