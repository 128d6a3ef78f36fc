//! End-to-end puzzle generation

use super::selection::SelectionError;
use super::set::{Puzzle, PuzzleSet};
use crate::core::{Answer, PuzzleError};
use crate::index::{AnswerIndex, build_answer_index, build_answer_index_parallel};
use crate::validate::{PuzzleValidator, ValidatorConfig};
use std::time::{Duration, Instant};

/// How the answer index is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Sequential,
    /// Chunked across rayon workers; same result as `Sequential`
    Parallel,
}

/// Builds the answer index from a word list and keeps the valid puzzles
///
/// Coordinates the index builder and the validator.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    index: AnswerIndex,
    puzzles: PuzzleSet,
    validator: PuzzleValidator,
    build_time: Duration,
    validate_time: Duration,
}

impl PuzzleGenerator {
    /// Run the pipeline over a word list
    ///
    /// # Errors
    /// Returns `PuzzleError` if the configuration is invalid or a group breaks
    /// the equal-length invariant.
    ///
    /// # Examples
    /// ```
    /// use word_holes::core::Answer;
    /// use word_holes::puzzle::{BuildMode, PuzzleGenerator};
    /// use word_holes::validate::ValidatorConfig;
    ///
    /// let words = ["during", "boring", "spring", "string"];
    /// let generator =
    ///     PuzzleGenerator::new(&words, ValidatorConfig::default(), BuildMode::Sequential).unwrap();
    /// // "string" is one letter away from "spring"
    /// assert!(!generator.is_valid(&Answer::new("ring").unwrap()));
    /// ```
    pub fn new<S>(words: &[S], config: ValidatorConfig, mode: BuildMode) -> Result<Self, PuzzleError>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let index = match mode {
            BuildMode::Sequential => build_answer_index(words),
            BuildMode::Parallel => build_answer_index_parallel(words),
        };
        let build_time = start.elapsed();

        let mut generator = Self::from_index(index, config)?;
        generator.build_time = build_time;
        Ok(generator)
    }

    /// Validate an already-built index
    ///
    /// # Errors
    /// Same as [`PuzzleGenerator::new`].
    pub fn from_index(index: AnswerIndex, config: ValidatorConfig) -> Result<Self, PuzzleError> {
        let validator = PuzzleValidator::new(config)?;

        let start = Instant::now();
        let puzzles = PuzzleSet::new(validator.validate(index.groups())?);
        let validate_time = start.elapsed();

        Ok(Self {
            index,
            puzzles,
            validator,
            build_time: Duration::ZERO,
            validate_time,
        })
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &AnswerIndex {
        &self.index
    }

    #[inline]
    #[must_use]
    pub const fn puzzles(&self) -> &PuzzleSet {
        &self.puzzles
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        self.validator.config()
    }

    #[inline]
    #[must_use]
    pub const fn build_time(&self) -> Duration {
        self.build_time
    }

    #[inline]
    #[must_use]
    pub const fn validate_time(&self) -> Duration {
        self.validate_time
    }

    /// Render the valid puzzle at `index`
    ///
    /// # Errors
    /// Returns `SelectionError` if there are no puzzles or `index` is out of range.
    pub fn puzzle(&self, index: usize, placeholder: char) -> Result<Puzzle, SelectionError> {
        self.puzzles.puzzle(index, placeholder)
    }

    /// Whether the group for `answer` passed validation
    #[must_use]
    pub fn is_valid(&self, answer: &Answer) -> bool {
        self.puzzles.position(answer).is_some()
    }
}
