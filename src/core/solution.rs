//! Solved chains
//!
//! A `Solution` is a chain of valid words linked last-letter to first-letter
//! whose combined letters cover the whole box. The invariant is checked on
//! construction, so a `Solution` value is always complete.

use super::letter_box::LetterBox;
use super::letters::LetterSet;
use super::word::ValidWord;
use crate::solver::validator::{Rejection, check_word};
use std::cmp::Ordering;
use std::fmt;

/// A complete, verified word chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    words: Vec<ValidWord>,
}

/// Why a word chain is not a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    Empty,
    InvalidWord {
        position: usize,
        reason: Rejection,
    },
    BrokenLink {
        position: usize,
        expected: char,
        found: char,
    },
    Incomplete {
        missing: LetterSet,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Chain has no words"),
            Self::InvalidWord { position, reason } => {
                write!(f, "Word {} is not playable: {reason}", position + 1)
            }
            Self::BrokenLink {
                position,
                expected,
                found,
            } => write!(
                f,
                "Word {} starts with '{found}' but the previous word ends with '{expected}'",
                position + 1
            ),
            Self::Incomplete { missing } => {
                write!(f, "Chain does not use letters: {missing}")
            }
        }
    }
}

impl std::error::Error for ChainError {}

impl Solution {
    /// Build a solution, verifying every word, each link, and full coverage
    /// of `letter_box`
    ///
    /// Words are re-checked against `letter_box` itself, since a `ValidWord`
    /// may have been validated against a different box.
    ///
    /// # Errors
    /// Returns `ChainError` if the chain is empty, a word is not playable on
    /// `letter_box`, a word does not start with the previous word's last
    /// letter, or some box letter is unused.
    pub fn new(words: Vec<ValidWord>, letter_box: &LetterBox) -> Result<Self, ChainError> {
        if words.is_empty() {
            return Err(ChainError::Empty);
        }

        for (position, word) in words.iter().enumerate() {
            check_word(word.text(), letter_box)
                .map_err(|reason| ChainError::InvalidWord { position, reason })?;
        }

        for (position, pair) in words.windows(2).enumerate() {
            if pair[0].last() != pair[1].first() {
                return Err(ChainError::BrokenLink {
                    position: position + 1,
                    expected: pair[0].last(),
                    found: pair[1].first(),
                });
            }
        }

        let covered = words
            .iter()
            .fold(LetterSet::EMPTY, |acc, w| acc.union(w.letters()));
        let target = letter_box.unique_letters();
        if covered != target {
            return Err(ChainError::Incomplete {
                missing: target.difference(covered),
            });
        }

        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[ValidWord] {
        &self.words
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Sum of word lengths
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.words.iter().map(ValidWord::len).sum()
    }

    /// Distinct letters used across the chain
    #[must_use]
    pub fn covered(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, w| acc.union(w.letters()))
    }

    /// All words written back to back
    #[must_use]
    pub fn concatenated(&self) -> String {
        self.words.iter().map(ValidWord::text).collect()
    }

    /// Ranking metrics for this solution
    #[must_use]
    pub fn score(&self) -> ScoredSolution<'_> {
        ScoredSolution {
            solution: self,
            total_letters: self.total_letters(),
            word_count: self.word_count(),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// A solution together with the metrics used to rank it
///
/// Ordering is total: fewer letters first, then fewer words, then the
/// concatenated chain alphabetically, then the word split.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSolution<'a> {
    pub solution: &'a Solution,
    pub total_letters: usize,
    pub word_count: usize,
}

impl ScoredSolution<'_> {
    /// `(total_letters, word_count)`
    #[must_use]
    pub const fn rank_key(&self) -> (usize, usize) {
        (self.total_letters, self.word_count)
    }

    fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.solution.words.iter().flat_map(|w| w.text().chars())
    }
}

impl Ord for ScoredSolution<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_key()
            .cmp(&other.rank_key())
            .then_with(|| self.letters().cmp(other.letters()))
            .then_with(|| {
                self.solution
                    .words
                    .iter()
                    .map(ValidWord::len)
                    .cmp(other.solution.words.iter().map(ValidWord::len))
            })
    }
}

impl PartialOrd for ScoredSolution<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoredSolution<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredSolution<'_> {}
