//! Validator configuration

use crate::core::PuzzleError;

/// Tunable acceptance rules for answer groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Fewest words a puzzle may have (inclusive)
    pub min_words: usize,
    /// Most words a puzzle may have (inclusive)
    pub max_words: usize,
    /// Minimum Hamming distance between any two words of a puzzle
    pub min_distance: usize,
    /// Reject groups whose words all end in the same letter
    pub distinct_last_letter: bool,
}

impl ValidatorConfig {
    pub const DEFAULT_MIN_WORDS: usize = 3;
    pub const DEFAULT_MAX_WORDS: usize = 5;
    pub const DEFAULT_MIN_DISTANCE: usize = 2;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_words: Self::DEFAULT_MIN_WORDS,
            max_words: Self::DEFAULT_MAX_WORDS,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            distinct_last_letter: false,
        }
    }

    /// The earlier, looser rules: up to six words, last-letter check on
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            max_words: 6,
            distinct_last_letter: true,
            ..Self::new()
        }
    }

    /// Check the bounds make sense
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidConfig` if `min_words` is zero or exceeds `max_words`.
    pub fn check(&self) -> Result<(), PuzzleError> {
        if self.min_words == 0 {
            return Err(PuzzleError::InvalidConfig(
                "min_words must be at least 1".to_string(),
            ));
        }
        if self.min_words > self.max_words {
            return Err(PuzzleError::InvalidConfig(format!(
                "min_words ({}) is greater than max_words ({})",
                self.min_words, self.max_words
            )));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn size_ok(&self, len: usize) -> bool {
        len >= self.min_words && len <= self.max_words
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
