//! Puzzle validation
//!
//! Decides which answer groups are usable puzzles: the group must be the right
//! size, its words must be pairwise far enough apart, and optionally they must
//! not all end in the same letter.

mod config;
mod validator;

pub use config::ValidatorConfig;
pub use validator::PuzzleValidator;
