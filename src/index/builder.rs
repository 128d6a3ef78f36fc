//! Index construction
//!
//! `AnswerIndexBuilder` is an insert-or-append map: the first word producing
//! an answer creates its group, later words append to it.

use super::group::AnswerGroup;
use crate::core::{Answer, WORD_LEN, Word, distinct_answers};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Smallest chunk handed to a rayon worker in the parallel build
const MIN_PARALLEL_CHUNK: usize = 256;

/// The finished answer index
#[derive(Debug, Clone, Default)]
pub struct AnswerIndex {
    groups: Vec<AnswerGroup>,
    positions: FxHashMap<Answer, usize>,
    entries_read: usize,
    word_count: usize,
}

impl AnswerIndex {
    /// Number of distinct answers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-encountered answer order
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[AnswerGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerGroup> {
        self.groups.iter()
    }

    /// Look up the group for an answer
    #[must_use]
    pub fn get(&self, answer: &Answer) -> Option<&AnswerGroup> {
        self.positions.get(answer).map(|&i| &self.groups[i])
    }

    /// Raw entries consumed, including skipped ones
    #[inline]
    #[must_use]
    pub const fn entries_read(&self) -> usize {
        self.entries_read
    }

    /// Six-letter words that made it into the index
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Entries skipped for not being six ASCII letters
    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.entries_read - self.word_count
    }
}

impl PartialEq for AnswerIndex {
    fn eq(&self, other: &Self) -> bool {
        // positions is derived from groups
        self.groups == other.groups
            && self.entries_read == other.entries_read
            && self.word_count == other.word_count
    }
}

impl Eq for AnswerIndex {}

impl<'a> IntoIterator for &'a AnswerIndex {
    type Item = &'a AnswerGroup;
    type IntoIter = std::slice::Iter<'a, AnswerGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Accumulates words into an `AnswerIndex`
#[derive(Debug, Default)]
pub struct AnswerIndexBuilder {
    index: AnswerIndex,
}

impl AnswerIndexBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group for `answer`, created on first use
    fn group_mut(&mut self, answer: Answer) -> &mut AnswerGroup {
        let groups = &mut self.index.groups;
        let position = *self.index.positions.entry(answer).or_insert_with(|| {
            groups.push(AnswerGroup::new(answer));
            groups.len() - 1
        });
        &mut groups[position]
    }

    /// Add a validated word under every distinct answer it produces
    pub fn insert(&mut self, word: &Word) {
        self.index.entries_read += 1;
        self.index.word_count += 1;
        for answer in distinct_answers(word) {
            self.group_mut(answer).push(word.clone());
        }
    }

    /// Add a raw dictionary entry
    ///
    /// Entries that are not six ASCII letters are counted and skipped.
    /// Returns whether the entry was indexed.
    pub fn push_str(&mut self, raw: &str) -> bool {
        if raw.len() != WORD_LEN {
            self.index.entries_read += 1;
            return false;
        }

        match Word::new(raw) {
            Ok(word) => {
                self.insert(&word);
                true
            }
            Err(_) => {
                self.index.entries_read += 1;
                false
            }
        }
    }

    /// Append a finished index built from words that came after this builder's words
    pub fn merge(&mut self, other: AnswerIndex) {
        self.index.entries_read += other.entries_read;
        self.index.word_count += other.word_count;
        for group in other.groups {
            let answer = group.answer();
            self.group_mut(answer).extend(group.into_words());
        }
    }

    #[must_use]
    pub fn build(self) -> AnswerIndex {
        self.index
    }
}

impl<S: AsRef<str>> Extend<S> for AnswerIndexBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.push_str(raw.as_ref());
        }
    }
}

/// Build the answer index from a word list, consuming it once in order
///
/// # Examples
/// ```
/// use word_holes::core::Answer;
/// use word_holes::index::build_answer_index;
///
/// let index = build_answer_index(["search", "online", "course", "fish"]);
/// assert_eq!(index.word_count(), 3);
///
/// let sear = index.get(&Answer::new("sear").unwrap()).unwrap();
/// assert_eq!(sear.word_texts(), vec!["search"]);
/// ```
pub fn build_answer_index<I, S>(words: I) -> AnswerIndex
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = AnswerIndexBuilder::new();
    builder.extend(words);
    builder.build()
}

/// Build the answer index across rayon workers
///
/// Each chunk is indexed independently and the partial indices are merged in
/// chunk order, so the result is identical to `build_answer_index`.
pub fn build_answer_index_parallel<S>(words: &[S]) -> AnswerIndex
where
    S: AsRef<str> + Sync,
{
    let chunk_size = words
        .len()
        .div_ceil(rayon::current_num_threads())
        .max(MIN_PARALLEL_CHUNK);

    let partials: Vec<AnswerIndex> = words
        .par_chunks(chunk_size)
        .map(build_answer_index)
        .collect();

    let mut builder = AnswerIndexBuilder::new();
    for partial in partials {
        builder.merge(partial);
    }
    builder.build()
}
