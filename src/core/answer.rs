//! Four-letter answer representation

use super::word::{Word, WordError, normalize};
use std::fmt;

/// Length of every puzzle answer
pub const ANSWER_LEN: usize = 4;

/// A four-letter answer hidden inside a group of six-letter words
///
/// `Copy` and hashable so it can key the answer index directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Answer {
    chars: [u8; ANSWER_LEN],
}

impl Answer {
    /// Create a new Answer from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly four ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_holes::core::Answer;
    ///
    /// let answer = Answer::new("SEAR").unwrap();
    /// assert_eq!(answer.as_str(), "sear");
    /// assert!(Answer::new("search").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = normalize(text, ANSWER_LEN)?;
        let chars: [u8; ANSWER_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");
        Ok(Self { chars })
    }

    /// Build an answer from four ascending positions of a word
    pub(crate) fn from_positions(word: &Word, positions: &[usize]) -> Self {
        debug_assert_eq!(positions.len(), ANSWER_LEN);
        let mut chars = [0u8; ANSWER_LEN];
        for (slot, &position) in chars.iter_mut().zip(positions) {
            *slot = word.char_at(position);
        }
        Self { chars }
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; ANSWER_LEN] {
        &self.chars
    }

    /// Get the answer as a string slice
    ///
    /// # Panics
    /// Will not panic - answers only ever hold ASCII letters.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("answers are ASCII")
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
