//! Acceptance predicates for answer groups

use super::config::ValidatorConfig;
use crate::core::{PuzzleError, hamming_distance};
use crate::index::AnswerGroup;
use itertools::Itertools;
use rayon::prelude::*;

/// Filters answer groups down to valid puzzles
#[derive(Debug, Clone, Copy)]
pub struct PuzzleValidator {
    config: ValidatorConfig,
}

impl PuzzleValidator {
    /// Create a validator for the given rules
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidConfig` if the configuration is inconsistent.
    pub fn new(config: ValidatorConfig) -> Result<Self, PuzzleError> {
        config.check()?;
        Ok(Self { config })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Whether a group's word list makes a valid puzzle
    ///
    /// Rules are applied in order: size bound, pairwise distance, then the
    /// optional last-letter diversity check. A failing group is rejected whole.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvariantViolation` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use word_holes::validate::{PuzzleValidator, ValidatorConfig};
    ///
    /// let validator = PuzzleValidator::new(ValidatorConfig::default()).unwrap();
    /// assert!(validator.accepts(&["chase", "raise", "parse"]).unwrap());
    /// assert!(!validator.accepts(&["facial", "racial"]).unwrap());
    /// ```
    pub fn accepts<S: AsRef<str>>(&self, words: &[S]) -> Result<bool, PuzzleError> {
        if let Some(first) = words.first() {
            let len = first.as_ref().len();
            if let Some(odd) = words.iter().find(|w| w.as_ref().len() != len) {
                return Err(PuzzleError::InvariantViolation(format!(
                    "group mixes word lengths: '{}' and '{}'",
                    first.as_ref(),
                    odd.as_ref()
                )));
            }
        }

        if !self.config.size_ok(words.len()) {
            return Ok(false);
        }

        for (a, b) in words.iter().tuple_combinations() {
            if hamming_distance(a.as_ref(), b.as_ref())? < self.config.min_distance {
                return Ok(false);
            }
        }

        if self.config.distinct_last_letter
            && words
                .iter()
                .map(|w| w.as_ref().as_bytes().last())
                .all_equal()
        {
            return Ok(false);
        }

        Ok(true)
    }

    /// Keep the groups that are valid puzzles, in their original order
    ///
    /// # Errors
    /// Propagates the first `InvariantViolation` found in any group.
    pub fn validate(&self, groups: &[AnswerGroup]) -> Result<Vec<AnswerGroup>, PuzzleError> {
        let verdicts = groups
            .par_iter()
            .map(|group| self.accepts(group.words()))
            .collect::<Result<Vec<bool>, PuzzleError>>()?;

        Ok(groups
            .iter()
            .zip(verdicts)
            .filter_map(|(group, ok)| ok.then(|| group.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, Word};
    use crate::index::build_answer_index;
    use crate::wordlists::SAMPLE_WORDS;

    fn default_validator() -> PuzzleValidator {
        PuzzleValidator::new(ValidatorConfig::default()).unwrap()
    }

    fn group(answer: &str, words: &[&str]) -> AnswerGroup {
        AnswerGroup::with_words(
            Answer::new(answer).unwrap(),
            words.iter().map(|w| Word::new(*w).unwrap()).collect(),
        )
    }

    #[test]
    fn arse_group_accepted() {
        assert!(
            default_validator()
                .accepts(&["chase", "raise", "parse"])
                .unwrap()
        );
    }

    #[test]
    fn two_word_group_rejected() {
        let validator = default_validator();
        assert!(!validator.accepts(&["facial", "racial"]).unwrap());
        // Far apart but still too few
        assert!(!validator.accepts(&["fallen", "feline"]).unwrap());
    }

    #[test]
    fn too_many_words_rejected() {
        let words = ["aaaaaa", "bbbbbb", "cccccc", "dddddd", "eeeeee", "ffffff"];
        assert!(!default_validator().accepts(&words).unwrap());

        let legacy = PuzzleValidator::new(ValidatorConfig {
            distinct_last_letter: false,
            ..ValidatorConfig::legacy()
        })
        .unwrap();
        assert!(legacy.accepts(&words).unwrap());
    }

    #[test]
    fn one_letter_apart_rejected() {
        let validator = default_validator();
        assert!(!validator.accepts(&["facial", "racial", "social"]).unwrap());
        assert!(validator.accepts(&["facial", "social", "serial"]).unwrap());
    }

    #[test]
    fn last_letter_check_is_a_toggle() {
        let words = ["chase", "raise", "parse"];
        let strict = PuzzleValidator::new(ValidatorConfig {
            distinct_last_letter: true,
            ..ValidatorConfig::default()
        })
        .unwrap();
        assert!(!strict.accepts(&words).unwrap());
        assert!(strict.accepts(&["chase", "raise", "parsy"]).unwrap());
    }

    #[test]
    fn mixed_lengths_are_invariant_violation() {
        let result = default_validator().accepts(&["search", "sear", "course"]);
        assert!(matches!(result, Err(PuzzleError::InvariantViolation(_))));
    }

    #[test]
    fn validate_drops_and_keeps_order() {
        let groups = vec![
            group("cial", &["facial", "racial"]),
            group("ence", &["fences", "hences", "pences"]),
            group("arch", &["search", "archer", "parish"]),
        ];
        // "parish" doesn't contain "arch"; validation only looks at the words
        let valid = default_validator().validate(&groups).unwrap();
        let answers: Vec<String> = valid.iter().map(|g| g.answer().to_string()).collect();
        assert_eq!(answers, vec!["arch"]);
    }

    #[test]
    fn validate_is_idempotent() {
        let validator = default_validator();
        let index = build_answer_index(SAMPLE_WORDS);
        let once = validator.validate(index.groups()).unwrap();
        let twice = validator.validate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn validate_empty_is_empty() {
        assert!(default_validator().validate(&[]).unwrap().is_empty());
    }

    #[test]
    fn invalid_config_refused() {
        let config = ValidatorConfig {
            min_words: 4,
            max_words: 3,
            ..ValidatorConfig::default()
        };
        assert!(PuzzleValidator::new(config).is_err());
    }
}
