//! Compact letter sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`, so coverage unions and
//! comparisons during chain search are single integer operations.

use std::fmt;

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Bit index of a letter, or `None` for anything outside `a..=z`
    #[inline]
    #[must_use]
    pub const fn index_of(letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(letter as u32 - 'a' as u32)
        } else {
            None
        }
    }

    /// Set containing a single letter (empty for non-letters)
    #[must_use]
    pub const fn single(letter: char) -> Self {
        match Self::index_of(letter) {
            Some(i) => Self(1 << i),
            None => Self::EMPTY,
        }
    }

    /// Distinct lowercase letters used by a word
    ///
    /// Characters outside `a..=z` are ignored.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let letters = LetterSet::of_word("letter");
    /// assert_eq!(letters.len(), 4);
    /// assert!(letters.contains('r'));
    /// ```
    #[must_use]
    pub fn of_word(word: &str) -> Self {
        word.chars().collect()
    }

    /// Raw bitmask
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::index_of(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    #[inline]
    pub const fn insert(&mut self, letter: char) {
        self.0 |= Self::single(letter).0;
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('a'..='z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
