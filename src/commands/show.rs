//! Show command
//!
//! Picks one valid puzzle (explicitly or at random) and renders it masked.

use crate::puzzle::{
    DEFAULT_PLACEHOLDER, Puzzle, PuzzleGenerator, RandomRange, SelectionError, select_index,
};
use rand::Rng;

/// Configuration for showing a puzzle
pub struct ShowConfig {
    /// Explicit puzzle index; drawn at random when `None`
    pub index: Option<usize>,
    /// Print the answer below the puzzle
    pub reveal: bool,
    pub placeholder: char,
    pub random_range: RandomRange,
}

impl ShowConfig {
    #[must_use]
    pub const fn new(index: Option<usize>) -> Self {
        Self {
            index,
            reveal: false,
            placeholder: DEFAULT_PLACEHOLDER,
            random_range: RandomRange::Exclusive,
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Result of showing a puzzle
pub struct ShowResult {
    pub puzzle: Puzzle,
    pub total_puzzles: usize,
    pub reveal: bool,
    pub placeholder: char,
    /// Whether the index was drawn at random
    pub random: bool,
}

/// Select and render a puzzle
///
/// # Errors
///
/// Returns `SelectionError::NoPuzzles` if validation kept nothing, or
/// `SelectionError::OutOfRange` if the (requested or drawn) index is too large.
pub fn show_puzzle<R: Rng>(
    config: &ShowConfig,
    generator: &PuzzleGenerator,
    rng: &mut R,
) -> Result<ShowResult, SelectionError> {
    let total_puzzles = generator.puzzles().len();
    let index = select_index(total_puzzles, config.index, config.random_range, rng)?;
    let puzzle = generator.puzzle(index, config.placeholder)?;

    Ok(ShowResult {
        puzzle,
        total_puzzles,
        reveal: config.reveal,
        placeholder: config.placeholder,
        random: config.index.is_none(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::BuildMode;
    use crate::validate::ValidatorConfig;
    use crate::wordlists::SAMPLE_WORDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(words: &[&str]) -> PuzzleGenerator {
        PuzzleGenerator::new(words, ValidatorConfig::default(), BuildMode::Sequential).unwrap()
    }

    #[test]
    fn show_explicit_index() {
        let generator = generator(&["during", "boring", "spring"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut config = ShowConfig::new(Some(0));
        config.reveal = true;

        let result = show_puzzle(&config, &generator, &mut rng).unwrap();
        assert_eq!(result.puzzle.index, 0);
        assert!(result.reveal);
        assert!(!result.random);
        assert_eq!(result.puzzle.masked.len(), result.puzzle.words.len());
    }

    #[test]
    fn show_random_index_within_range() {
        let generator = generator(SAMPLE_WORDS);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..20 {
            let result = show_puzzle(&ShowConfig::default(), &generator, &mut rng).unwrap();
            assert!(result.random);
            assert!(result.puzzle.index < result.total_puzzles);
        }
    }

    #[test]
    fn show_out_of_range() {
        let generator = generator(&["during", "boring", "spring"]);
        let count = generator.puzzles().len();
        let mut rng = StdRng::seed_from_u64(1);

        let result = show_puzzle(&ShowConfig::new(Some(count)), &generator, &mut rng);
        assert!(matches!(
            result,
            Err(SelectionError::OutOfRange { index, .. }) if index == count
        ));
    }

    #[test]
    fn show_with_no_puzzles() {
        let generator = generator(&["search", "online", "course"]);
        let mut rng = StdRng::seed_from_u64(1);

        let result = show_puzzle(&ShowConfig::default(), &generator, &mut rng);
        assert!(matches!(result, Err(SelectionError::NoPuzzles)));
    }

    #[test]
    fn custom_placeholder() {
        let generator = generator(&["during", "boring", "spring"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut config = ShowConfig::new(Some(0));
        config.placeholder = '?';

        let result = show_puzzle(&config, &generator, &mut rng).unwrap();
        for masked in &result.puzzle.masked {
            assert_eq!(masked.chars().filter(|&c| c == '?').count(), 4);
        }
    }
}
