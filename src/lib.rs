//! Word Holes
//!
//! Generates "hidden answer" word puzzles: every four-letter answer that can be
//! spelled by deleting two letters from at least three sufficiently different
//! six-letter words becomes a puzzle, shown with the answer letters blanked out.
//!
//! # Quick Start
//!
//! ```rust
//! use word_holes::puzzle::{BuildMode, PuzzleGenerator};
//! use word_holes::validate::ValidatorConfig;
//!
//! let words = ["during", "boring", "spring", "search", "online"];
//! let generator =
//!     PuzzleGenerator::new(&words, ValidatorConfig::default(), BuildMode::Sequential).unwrap();
//!
//! let puzzle = generator.puzzle(0, '_').unwrap();
//! assert_eq!(puzzle.answer.as_str(), "ring");
//! assert_eq!(puzzle.masked, vec!["du____", "bo____", "sp____"]);
//! ```

// Core domain types
pub mod core;

// Answer -> words index
pub mod index;

// Puzzle acceptance rules
pub mod validate;

// Valid puzzles, selection and masking
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
