//! Lookup command
//!
//! Shows the raw group for one answer and why it is or isn't a puzzle.

use crate::core::{Answer, hamming_distance};
use crate::puzzle::PuzzleGenerator;

/// Result of looking up an answer
pub struct LookupResult {
    pub answer: String,
    pub words: Vec<String>,
    /// Position among valid puzzles, if the group is valid
    pub puzzle_index: Option<usize>,
    /// Closest pair of words and their distance (groups of 2+ words)
    pub closest_pair: Option<(String, String, usize)>,
}

/// Look up the group for `answer`
///
/// # Errors
///
/// Returns an error if the answer is not four letters or no word produces it.
pub fn lookup_answer(answer: &str, generator: &PuzzleGenerator) -> Result<LookupResult, String> {
    let answer = Answer::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    let group = generator
        .index()
        .get(&answer)
        .ok_or_else(|| format!("No six-letter word contains '{answer}'"))?;

    let words: Vec<String> = group.word_texts().into_iter().map(str::to_string).collect();

    let mut closest_pair: Option<(String, String, usize)> = None;
    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            let distance = hamming_distance(a, b).map_err(|e| e.to_string())?;
            if closest_pair.as_ref().is_none_or(|(_, _, best)| distance < *best) {
                closest_pair = Some((a.clone(), b.clone(), distance));
            }
        }
    }

    Ok(LookupResult {
        answer: answer.to_string(),
        words,
        puzzle_index: generator.puzzles().position(&answer),
        closest_pair,
    })
}
