//! Letter Boxed word representation
//!
//! A `ValidWord` is a dictionary word that has already passed validation
//! against a specific box. It carries its letter set and anchor letters so the
//! chain search never has to look at the text again.

use super::letters::LetterSet;
use std::fmt;

/// A word that satisfies the box rules
///
/// Only the validator can construct one (see
/// [`crate::solver::validator::validate`]), so holding a `ValidWord` is proof
/// that it was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidWord {
    text: String,
    letters: LetterSet,
    first: char,
    last: char,
}

impl ValidWord {
    /// Wrap text the validator has accepted
    ///
    /// Callers guarantee `text` is non-empty lowercase ASCII.
    pub(crate) fn from_checked(text: String) -> Self {
        let letters = LetterSet::of_word(&text);
        let first = text.chars().next().unwrap_or_default();
        let last = text.chars().next_back().unwrap_or_default();
        Self {
            text,
            letters,
            first,
            last,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn first(&self) -> char {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn last(&self) -> char {
        self.last
    }

    /// Number of letters (words are ASCII, so bytes == letters)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for ValidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for ValidWord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_and_letters() {
        let word = ValidWord::from_checked("adgjbeh".to_string());
        assert_eq!(word.first(), 'a');
        assert_eq!(word.last(), 'h');
        assert_eq!(word.len(), 7);
        assert_eq!(word.letters().len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn letters_are_distinct() {
        let word = ValidWord::from_checked("adadg".to_string());
        assert_eq!(word.letters().to_string(), "adg");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn ordering_follows_text() {
        let a = ValidWord::from_checked("adg".to_string());
        let b = ValidWord::from_checked("bdg".to_string());
        assert!(a < b);
        assert_eq!(format!("{a}"), "adg");
    }
}
