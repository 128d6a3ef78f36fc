//! Answer index: four-letter answer -> six-letter words producing it
//!
//! Built in a single pass over the word list. Groups keep the order in which
//! their answer was first produced, and words inside a group keep input order.

mod builder;
mod group;

pub use builder::{AnswerIndex, AnswerIndexBuilder, build_answer_index, build_answer_index_parallel};
pub use group::AnswerGroup;
