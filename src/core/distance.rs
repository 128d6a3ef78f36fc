//! Hamming distance between equal-length words

use super::error::PuzzleError;

/// Count the positions at which two words differ
///
/// Only defined for words of equal length; anything else means a caller let a
/// malformed word through and is reported as an invariant violation.
///
/// # Errors
/// Returns `PuzzleError::InvariantViolation` when the lengths differ.
///
/// # Examples
/// ```
/// use word_holes::core::hamming_distance;
///
/// assert_eq!(hamming_distance("fallen", "feline").unwrap(), 4);
/// assert!(hamming_distance("fallen", "fall").is_err());
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize, PuzzleError> {
    if a.len() != b.len() {
        return Err(PuzzleError::InvariantViolation(format!(
            "cannot compare '{a}' ({} letters) with '{b}' ({} letters)",
            a.len(),
            b.len()
        )));
    }

    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}
