//! The ordered collection of valid puzzles

use super::mask::mask_word;
use super::selection::SelectionError;
use crate::core::{Answer, Word};
use crate::index::AnswerGroup;

/// A valid answer group picked for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Position in the validated puzzle list
    pub index: usize,
    pub answer: Answer,
    pub words: Vec<Word>,
    /// Each word with the answer letters replaced by the placeholder
    pub masked: Vec<String>,
}

/// Valid answer groups in their index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleSet {
    groups: Vec<AnswerGroup>,
}

impl PuzzleSet {
    /// Wrap groups that already passed validation
    #[must_use]
    pub const fn new(groups: Vec<AnswerGroup>) -> Self {
        Self { groups }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[AnswerGroup] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnswerGroup> {
        self.groups.get(index)
    }

    /// Index of the puzzle for `answer`, if it is valid
    #[must_use]
    pub fn position(&self, answer: &Answer) -> Option<usize> {
        self.groups.iter().position(|g| g.answer() == *answer)
    }

    /// Render the puzzle at `index`
    ///
    /// # Errors
    /// Returns `SelectionError` if the set is empty or `index` is past the end.
    pub fn puzzle(&self, index: usize, placeholder: char) -> Result<Puzzle, SelectionError> {
        if self.groups.is_empty() {
            return Err(SelectionError::NoPuzzles);
        }

        let group = self.groups.get(index).ok_or(SelectionError::OutOfRange {
            index,
            count: self.groups.len(),
        })?;

        let answer = group.answer();
        let masked = group
            .words()
            .iter()
            .map(|word| mask_word(word.text(), answer.as_str(), placeholder))
            .collect();

        Ok(Puzzle {
            index,
            answer,
            words: group.words().to_vec(),
            masked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PuzzleSet {
        let words = ["during", "boring", "spring"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        PuzzleSet::new(vec![AnswerGroup::with_words(
            Answer::new("ring").unwrap(),
            words,
        )])
    }

    #[test]
    fn puzzle_masks_every_word() {
        let puzzle = sample_set().puzzle(0, '_').unwrap();
        assert_eq!(puzzle.index, 0);
        assert_eq!(puzzle.answer.as_str(), "ring");
        assert_eq!(puzzle.masked, vec!["du____", "bo____", "sp____"]);
    }

    #[test]
    fn puzzle_out_of_range() {
        assert_eq!(
            sample_set().puzzle(1, '_'),
            Err(SelectionError::OutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn empty_set_reports_no_puzzles() {
        assert_eq!(
            PuzzleSet::default().puzzle(0, '_'),
            Err(SelectionError::NoPuzzles)
        );
    }

    #[test]
    fn position_of_answer() {
        let set = sample_set();
        assert_eq!(set.position(&Answer::new("ring").unwrap()), Some(0));
        assert_eq!(set.position(&Answer::new("sear").unwrap()), None);
    }
}
