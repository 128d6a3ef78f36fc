//! Puzzles: validated answer groups ready to be shown
//!
//! `PuzzleGenerator` runs the full pipeline (index, then validation) and hands
//! out individual puzzles by index with their words masked.

mod generator;
mod mask;
mod selection;
mod set;

pub use generator::{BuildMode, PuzzleGenerator};
pub use mask::{DEFAULT_PLACEHOLDER, mask_word};
pub use selection::{RandomRange, SelectionError, select_index};
pub use set::{Puzzle, PuzzleSet};
