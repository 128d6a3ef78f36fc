//! Core domain types for word-hole puzzles
//!
//! Six-letter source words, four-letter answers, and the two pure helpers the
//! rest of the crate is built on: positional letter combinations and Hamming
//! distance. Nothing in here does I/O.

mod answer;
mod combination;
mod distance;
mod error;
mod word;

pub use answer::{ANSWER_LEN, Answer};
pub use combination::{
    COMBINATIONS_PER_WORD, distinct_answers, generate_four_letter_substrings, letter_combinations,
};
pub use distance::hamming_distance;
pub use error::PuzzleError;
pub use word::{WORD_LEN, Word, WordError};
