//! Candidate word index
//!
//! Filters a raw dictionary down to the words playable on a box and indexes
//! them by first and last letter, so finding "words that can follow X" is a
//! single map lookup.

use super::validator::validate;
use crate::core::{LetterBox, ValidWord};
use crate::wordlists::loader::normalize_entry;
use rustc_hash::FxHashMap;

/// Position of a word inside a [`CandidateIndex`]
pub type WordId = usize;

/// Valid words for one box, indexed for chaining
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    words: Vec<ValidWord>,
    by_first: FxHashMap<char, Vec<WordId>>,
    by_last: FxHashMap<char, Vec<WordId>>,
    shortest_first: Vec<WordId>,
    max_letter_span: usize,
}

impl CandidateIndex {
    /// Build the index from a dictionary
    ///
    /// Entries are trimmed and lowercased; entries that are not purely
    /// alphabetic or fail validation are dropped. Words are stored sorted and
    /// deduplicated, so the same inputs always produce the same index. Id
    /// lists handed out by the index run shortest word first, ties in
    /// alphabetical order.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterBox;
    /// use letter_boxed::solver::CandidateIndex;
    ///
    /// let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
    /// let index = CandidateIndex::build(["hkcfil", "adgjbeh", "face", "ADGJBEH"], &letter_box);
    ///
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.starting_with('h').len(), 1);
    /// ```
    pub fn build<I, S>(dictionary: I, letter_box: &LetterBox) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut texts: Vec<String> = dictionary
            .into_iter()
            .filter_map(|entry| normalize_entry(entry.as_ref()))
            .collect();
        texts.sort_unstable();
        texts.dedup();

        let words: Vec<ValidWord> = texts
            .iter()
            .filter_map(|text| validate(text, letter_box).ok())
            .collect();

        let mut shortest_first: Vec<WordId> = (0..words.len()).collect();
        shortest_first.sort_by_key(|&id| words[id].len());

        let mut by_first: FxHashMap<char, Vec<WordId>> = FxHashMap::default();
        let mut by_last: FxHashMap<char, Vec<WordId>> = FxHashMap::default();
        for &id in &shortest_first {
            let word = &words[id];
            by_first.entry(word.first()).or_default().push(id);
            by_last.entry(word.last()).or_default().push(id);
        }

        let max_letter_span = words
            .iter()
            .map(|w| w.letters().len())
            .max()
            .unwrap_or(0);

        log::debug!(
            "Indexed {} valid words from {} dictionary entries (max span {max_letter_span})",
            words.len(),
            texts.len()
        );

        Self {
            words,
            by_first,
            by_last,
            shortest_first,
            max_letter_span,
        }
    }

    /// All valid words, sorted alphabetically
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[ValidWord] {
        &self.words
    }

    /// Look up a word by id
    ///
    /// # Panics
    /// Panics if `id` did not come from this index.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &ValidWord {
        &self.words[id]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `text` is one of the valid words
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words
            .binary_search_by(|w| w.text().cmp(text))
            .is_ok()
    }

    /// Every id, shortest word first
    #[inline]
    #[must_use]
    pub fn shortest_first(&self) -> &[WordId] {
        &self.shortest_first
    }

    /// Ids of words starting with `letter`, shortest first
    #[must_use]
    pub fn starting_with(&self, letter: char) -> &[WordId] {
        self.by_first.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Ids of words ending with `letter`, shortest first
    #[must_use]
    pub fn ending_with(&self, letter: char) -> &[WordId] {
        self.by_last.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Most distinct letters any single word covers
    #[inline]
    #[must_use]
    pub const fn max_letter_span(&self) -> usize {
        self.max_letter_span
    }
}
