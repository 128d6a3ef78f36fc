//! A single answer and the words that hide it

use crate::core::{Answer, Word};

/// An answer together with every word it was generated from, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGroup {
    answer: Answer,
    words: Vec<Word>,
}

impl AnswerGroup {
    #[must_use]
    pub const fn new(answer: Answer) -> Self {
        Self {
            answer,
            words: Vec::new(),
        }
    }

    /// Build a group from an answer and its words
    #[must_use]
    pub const fn with_words(answer: Answer, words: Vec<Word>) -> Self {
        Self { answer, words }
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> Answer {
        self.answer
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words as plain strings
    #[must_use]
    pub fn word_texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    pub(crate) fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    pub(crate) fn extend(&mut self, words: Vec<Word>) {
        self.words.extend(words);
    }

    pub(crate) fn into_words(self) -> Vec<Word> {
        self.words
    }
}
