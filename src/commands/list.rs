//! List command
//!
//! Enumerates valid puzzles with their indices.

use crate::puzzle::PuzzleGenerator;

/// One listed puzzle
pub struct ListEntry {
    pub index: usize,
    pub answer: String,
    pub words: Vec<String>,
}

/// Result of listing puzzles
pub struct ListResult {
    pub entries: Vec<ListEntry>,
    pub total_puzzles: usize,
}

/// List valid puzzles starting at `offset`, at most `limit` of them
#[must_use]
pub fn list_puzzles(generator: &PuzzleGenerator, offset: usize, limit: Option<usize>) -> ListResult {
    let groups = generator.puzzles().groups();

    let entries = groups
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit.unwrap_or(groups.len()))
        .map(|(index, group)| ListEntry {
            index,
            answer: group.answer().to_string(),
            words: group.word_texts().into_iter().map(str::to_string).collect(),
        })
        .collect();

    ListResult {
        entries,
        total_puzzles: groups.len(),
    }
}
