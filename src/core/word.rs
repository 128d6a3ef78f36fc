//! Six-letter source word representation

use super::answer::Answer;
use std::fmt;

/// Length of every puzzle source word
pub const WORD_LEN: usize = 6;

/// A six-letter lowercase ASCII word
///
/// Stores the text alongside its bytes so positional access stays cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words and answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, got: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Lowercase `text` and check it is `expected` ASCII letters long
pub(crate) fn normalize(text: impl Into<String>, expected: usize) -> Result<String, WordError> {
    let text: String = text.into().to_lowercase();

    if !text.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if text.len() != expected {
        return Err(WordError::InvalidLength {
            expected,
            got: text.len(),
        });
    }

    if !text.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(text)
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly 6
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_holes::core::Word;
    ///
    /// let word = Word::new("Search").unwrap();
    /// assert_eq!(word.text(), "search");
    ///
    /// assert!(Word::new("sear").is_err());
    /// assert!(Word::new("se4rch").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = normalize(text, WORD_LEN)?;

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-5)
    ///
    /// # Panics
    /// Panics if position >= 6
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    #[inline]
    #[must_use]
    pub const fn last_letter(&self) -> u8 {
        self.chars[WORD_LEN - 1]
    }

    /// Number of positions at which the two words differ
    ///
    /// Always defined, since both words are six letters.
    #[must_use]
    pub fn hamming(&self, other: &Self) -> usize {
        self.chars
            .iter()
            .zip(other.chars.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Whether `answer` can be obtained by deleting two letters of this word
    #[must_use]
    pub fn contains_answer(&self, answer: &Answer) -> bool {
        let mut letters = self.chars.iter();
        answer
            .chars()
            .iter()
            .all(|wanted| letters.any(|ch| ch == wanted))
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("search").unwrap();
        assert_eq!(word.text(), "search");
        assert_eq!(word.chars(), b"search");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SEARCH").unwrap();
        assert_eq!(word.text(), "search");

        let word2 = Word::new("SeArCh").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("searches"),
            Err(WordError::InvalidLength {
                expected: 6,
                got: 8
            })
        );
        assert_eq!(
            Word::new("sear"),
            Err(WordError::InvalidLength {
                expected: 6,
                got: 4
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { got: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("searc4"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sea ch"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sear-h"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("séarch"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at_and_last_letter() {
        let word = Word::new("online").unwrap();
        assert_eq!(word.char_at(0), b'o');
        assert_eq!(word.char_at(3), b'i');
        assert_eq!(word.last_letter(), b'e');
    }

    #[test]
    fn hamming_between_words() {
        let fallen = Word::new("fallen").unwrap();
        let feline = Word::new("feline").unwrap();
        assert_eq!(fallen.hamming(&feline), 4);
        assert_eq!(feline.hamming(&fallen), 4);
        assert_eq!(fallen.hamming(&fallen), 0);
    }

    #[test]
    fn contains_answer_subsequence() {
        let word = Word::new("search").unwrap();
        assert!(word.contains_answer(&Answer::new("sear").unwrap()));
        assert!(word.contains_answer(&Answer::new("seac").unwrap()));
        assert!(word.contains_answer(&Answer::new("arch").unwrap()));
        // Letters present but out of order
        assert!(!word.contains_answer(&Answer::new("hear").unwrap()));
        assert!(!word.contains_answer(&Answer::new("zzzz").unwrap()));
    }

    #[test]
    fn contains_answer_respects_multiplicity() {
        let word = Word::new("settle").unwrap();
        assert!(word.contains_answer(&Answer::new("sttl").unwrap()));
        assert!(!word.contains_answer(&Answer::new("sttt").unwrap()));
    }

    #[test]
    fn word_display() {
        let word = Word::new("course").unwrap();
        assert_eq!(format!("{word}"), "course");
    }
}
