//! Letter masking
//!
//! Each answer letter hides one matching letter in the word, scanning left to
//! right. A letter appearing twice in the word but once in the answer is only
//! hidden once.

use rustc_hash::FxHashMap;

pub const DEFAULT_PLACEHOLDER: char = '_';

/// Replace the answer's letters in `word` with `placeholder`
///
/// # Examples
/// ```
/// use word_holes::puzzle::mask_word;
///
/// assert_eq!(mask_word("search", "sear", '_'), "____ch");
/// assert_eq!(mask_word("settle", "stle", '_'), "___t_e");
/// ```
#[must_use]
pub fn mask_word(word: &str, answer: &str, placeholder: char) -> String {
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();
    for letter in answer.chars() {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    word.chars()
        .map(|letter| match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                placeholder
            }
            _ => letter,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_contiguous_answer() {
        assert_eq!(mask_word("search", "arch", '_'), "se____");
    }

    #[test]
    fn masks_scattered_answer() {
        assert_eq!(mask_word("online", "olne", '_'), "___in_");
    }

    #[test]
    fn repeated_word_letter_masked_once() {
        // one 't' and one 'e' in the answer, two of each in the word
        assert_eq!(mask_word("settle", "stle", '*'), "***t*e");
    }

    #[test]
    fn repeated_answer_letter_masked_twice() {
        assert_eq!(mask_word("settle", "sttl", '_'), "_e___e");
    }

    #[test]
    fn masks_exactly_answer_len_letters() {
        let masked = mask_word("course", "ours", '#');
        assert_eq!(masked.chars().filter(|&c| c == '#').count(), 4);
    }

    #[test]
    fn unrelated_answer_masks_nothing() {
        assert_eq!(mask_word("course", "zzzz", '_'), "course");
    }
}
