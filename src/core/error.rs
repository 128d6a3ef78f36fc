//! Errors raised by the puzzle pipeline itself

use std::fmt;

/// Error type for the index/validation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A caller broke a contract the pipeline relies on (e.g. words of
    /// different lengths in one group). Not recoverable.
    InvariantViolation(String),
    /// The validator configuration is self-contradictory
    InvalidConfig(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation(msg) => write!(f, "Invariant violation: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid validator configuration: {msg}"),
        }
    }
}

impl std::error::Error for PuzzleError {}
