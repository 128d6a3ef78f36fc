//! Stats command
//!
//! Summarizes how many words, groups and puzzles a word list yields.

use crate::puzzle::PuzzleGenerator;
use crate::validate::ValidatorConfig;
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of summarizing a generator run
pub struct StatsResult {
    pub entries_read: usize,
    pub six_letter_words: usize,
    pub skipped: usize,
    pub answer_groups: usize,
    /// Groups with at least `min_words` words, before distance checks
    pub large_enough: usize,
    pub valid_puzzles: usize,
    /// Valid puzzle count per group size
    pub size_distribution: BTreeMap<usize, usize>,
    pub config: ValidatorConfig,
    pub build_time: Duration,
    pub validate_time: Duration,
}

/// Collect statistics from a generator
#[must_use]
pub fn compute_stats(generator: &PuzzleGenerator) -> StatsResult {
    let index = generator.index();
    let config = *generator.config();

    let large_enough = index
        .iter()
        .filter(|group| group.len() >= config.min_words)
        .count();

    let mut size_distribution = BTreeMap::new();
    for group in generator.puzzles().groups() {
        *size_distribution.entry(group.len()).or_insert(0) += 1;
    }

    StatsResult {
        entries_read: index.entries_read(),
        six_letter_words: index.word_count(),
        skipped: index.skipped(),
        answer_groups: index.len(),
        large_enough,
        valid_puzzles: generator.puzzles().len(),
        size_distribution,
        config,
        build_time: generator.build_time(),
        validate_time: generator.validate_time(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::BuildMode;
    use crate::wordlists::{SAMPLE_WORDS, SAMPLE_WORDS_COUNT};

    #[test]
    fn stats_on_sample() {
        let generator =
            PuzzleGenerator::new(SAMPLE_WORDS, ValidatorConfig::default(), BuildMode::Sequential)
                .unwrap();
        let stats = compute_stats(&generator);

        assert_eq!(stats.entries_read, SAMPLE_WORDS_COUNT);
        assert_eq!(stats.six_letter_words + stats.skipped, SAMPLE_WORDS_COUNT);
        assert!(stats.large_enough <= stats.answer_groups);
        assert!(stats.valid_puzzles <= stats.large_enough);
        assert_eq!(
            stats.size_distribution.values().sum::<usize>(),
            stats.valid_puzzles
        );
        assert!(stats.size_distribution.keys().all(|&n| (3..=5).contains(&n)));
    }

    #[test]
    fn stats_on_toy_example() {
        let generator = PuzzleGenerator::new(
            &["search", "online", "course", "fish"],
            ValidatorConfig::default(),
            BuildMode::Sequential,
        )
        .unwrap();
        let stats = compute_stats(&generator);

        assert_eq!(stats.entries_read, 4);
        assert_eq!(stats.six_letter_words, 3);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.valid_puzzles, 0);
    }
}
