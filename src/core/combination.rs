//! Positional letter combinations
//!
//! An answer is any four letters of a six-letter word taken in their original
//! order, so every word yields C(6, 4) = 15 position subsets. Repeated letters
//! can make two subsets spell the same answer.

use super::answer::{ANSWER_LEN, Answer};
use super::word::{WORD_LEN, Word};
use itertools::Itertools;

/// Number of position subsets a six-letter word yields
pub const COMBINATIONS_PER_WORD: usize = 15;

/// Every `k`-letter combination of `text`, in lexicographic position order
///
/// Duplicates are kept: `"aab"` with `k = 2` gives `["aa", "ab", "ab"]`.
#[must_use]
pub fn letter_combinations(text: &str, k: usize) -> Vec<String> {
    text.chars()
        .combinations(k)
        .map(|combo| combo.into_iter().collect())
        .collect()
}

/// All 15 four-letter combinations of a word, duplicates included
///
/// # Examples
/// ```
/// use word_holes::core::generate_four_letter_substrings;
///
/// let subs = generate_four_letter_substrings("search");
/// assert_eq!(subs.len(), 15);
/// assert!(subs.contains(&"sear".to_string()));
/// assert!(subs.contains(&"seac".to_string()));
/// ```
#[must_use]
pub fn generate_four_letter_substrings(text: &str) -> Vec<String> {
    letter_combinations(text, ANSWER_LEN)
}

/// The distinct answers a word can produce, in first-generated order
#[must_use]
pub fn distinct_answers(word: &Word) -> Vec<Answer> {
    (0..WORD_LEN)
        .combinations(ANSWER_LEN)
        .map(|positions| Answer::from_positions(word, &positions))
        .unique()
        .collect()
}
