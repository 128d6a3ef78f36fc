//! Choosing which puzzle to show

use rand::Rng;
use std::fmt;

/// Range a random puzzle index is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomRange {
    /// `[0, count)`, always a valid index
    #[default]
    Exclusive,
    /// `[0, count]`, the historical behavior; `count` itself is out of range
    Inclusive,
}

impl RandomRange {
    fn draw<R: Rng>(self, count: usize, rng: &mut R) -> usize {
        match self {
            Self::Exclusive => rng.random_range(0..count),
            Self::Inclusive => rng.random_range(0..=count),
        }
    }
}

/// Why no puzzle could be selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Validation left nothing to choose from
    NoPuzzles,
    /// The index is past the end of the puzzle list
    OutOfRange { index: usize, count: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPuzzles => write!(f, "No puzzles found"),
            Self::OutOfRange { index, count } => write!(
                f,
                "Puzzle index {index} is out of range (valid range is 0 to {})",
                count.saturating_sub(1)
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Resolve the puzzle index to show
///
/// Uses `requested` if given, otherwise draws one from `range`.
///
/// # Errors
/// - `SelectionError::NoPuzzles` if `count` is zero
/// - `SelectionError::OutOfRange` if the index is `>= count`
pub fn select_index<R: Rng>(
    count: usize,
    requested: Option<usize>,
    range: RandomRange,
    rng: &mut R,
) -> Result<usize, SelectionError> {
    if count == 0 {
        return Err(SelectionError::NoPuzzles);
    }

    let index = requested.unwrap_or_else(|| range.draw(count, rng));
    if index >= count {
        return Err(SelectionError::OutOfRange { index, count });
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn explicit_index_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_index(10, Some(3), RandomRange::Exclusive, &mut rng), Ok(3));
        assert_eq!(select_index(10, Some(9), RandomRange::Exclusive, &mut rng), Ok(9));
    }

    #[test]
    fn explicit_index_out_of_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_index(10, Some(10), RandomRange::Exclusive, &mut rng),
            Err(SelectionError::OutOfRange {
                index: 10,
                count: 10
            })
        );
    }

    #[test]
    fn no_puzzles_reported_before_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_index(0, Some(0), RandomRange::Exclusive, &mut rng),
            Err(SelectionError::NoPuzzles)
        );
        assert_eq!(
            select_index(0, None, RandomRange::Inclusive, &mut rng),
            Err(SelectionError::NoPuzzles)
        );
    }

    #[test]
    fn exclusive_draw_always_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let index = select_index(3, None, RandomRange::Exclusive, &mut rng).unwrap();
            assert!(index < 3);
        }
    }

    #[test]
    fn inclusive_draw_can_overshoot() {
        let mut rng = StdRng::seed_from_u64(42);
        let overshoots = (0..500)
            .filter(|_| {
                matches!(
                    select_index(2, None, RandomRange::Inclusive, &mut rng),
                    Err(SelectionError::OutOfRange { index: 2, count: 2 })
                )
            })
            .count();
        assert!(overshoots > 0);
    }

    #[test]
    fn bounds_message() {
        let err = SelectionError::OutOfRange { index: 12, count: 5 };
        assert_eq!(
            err.to_string(),
            "Puzzle index 12 is out of range (valid range is 0 to 4)"
        );
    }
}
