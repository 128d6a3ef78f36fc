//! Word lists for puzzle generation
//!
//! Provides a small embedded sample dictionary plus loaders for dictionary
//! files (plain text or JSON), including a one-time download of the default
//! English dictionary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE_WORDS.len(), SAMPLE_WORDS_COUNT);
    }

    #[test]
    fn sample_words_are_lowercase_letters() {
        for &word in SAMPLE_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn sample_is_mostly_six_letter_words() {
        let six = SAMPLE_WORDS.iter().filter(|w| w.len() == 6).count();
        assert!(six > SAMPLE_WORDS_COUNT / 2);
        // a few other lengths so filtering gets exercised
        assert!(six < SAMPLE_WORDS_COUNT);
    }
}
