//! Letter Boxed puzzle geometry
//!
//! A `LetterBox` is four sides of three letters each. Construction validates the
//! shape and precomputes a letter-to-side lookup used by word validation.

use super::letters::LetterSet;
use std::fmt;
use std::str::FromStr;

/// Number of sides on a box
pub const SIDE_COUNT: usize = 4;

/// Number of letters on each side
pub const SIDE_LEN: usize = 3;

/// What to do when the same letter appears more than once on the box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SharedLetters {
    /// Treat a repeated letter as a configuration error (default)
    #[default]
    Reject,
    /// Accept it; the letter then belongs to every side it appears on
    Allow,
}

/// The puzzle configuration: four sides of three letters
///
/// Immutable after construction. Letters are normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBox {
    sides: [[char; SIDE_LEN]; SIDE_COUNT],
    /// For each letter `a..=z`, a bitmask of the sides it sits on
    side_masks: [u8; 26],
    unique: LetterSet,
}

/// Error type for malformed boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    WrongSideCount(usize),
    WrongSideSize { side: usize, len: usize },
    InvalidLetter { side: usize, letter: char },
    SharedLetter(char),
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSideCount(count) => {
                write!(f, "Box must have exactly {SIDE_COUNT} sides, got {count}")
            }
            Self::WrongSideSize { side, len } => write!(
                f,
                "Side {} must have exactly {SIDE_LEN} letters, got {len}",
                side + 1
            ),
            Self::InvalidLetter { side, letter } => {
                write!(f, "Side {} contains non-letter '{letter}'", side + 1)
            }
            Self::SharedLetter(letter) => {
                write!(f, "Letter '{letter}' appears more than once on the box")
            }
        }
    }
}

impl std::error::Error for BoxError {}

impl LetterBox {
    /// Create a box from four side strings, rejecting repeated letters
    ///
    /// # Errors
    /// Returns `BoxError` if:
    /// - There are not exactly 4 sides
    /// - A side does not hold exactly 3 letters
    /// - A side contains a non-ASCII-alphabetic character
    /// - A letter appears more than once across the box
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterBox;
    ///
    /// let letter_box = LetterBox::new(&["ABC", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(letter_box.unique_letters().len(), 12);
    /// assert!(letter_box.same_side('a', 'c'));
    ///
    /// assert!(LetterBox::new(&["abc", "def", "ghi"]).is_err());
    /// assert!(LetterBox::new(&["abc", "dea", "ghi", "jkl"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, BoxError> {
        Self::with_policy(sides, SharedLetters::Reject)
    }

    /// Create a box with an explicit policy for repeated letters
    ///
    /// # Errors
    /// Same as [`LetterBox::new`], except that repeated letters are only an
    /// error under [`SharedLetters::Reject`].
    pub fn with_policy<S: AsRef<str>>(
        sides: &[S],
        policy: SharedLetters,
    ) -> Result<Self, BoxError> {
        if sides.len() != SIDE_COUNT {
            return Err(BoxError::WrongSideCount(sides.len()));
        }

        let mut parsed = [[' '; SIDE_LEN]; SIDE_COUNT];
        let mut side_masks = [0u8; 26];
        let mut unique = LetterSet::EMPTY;

        for (side, text) in sides.iter().enumerate() {
            let letters: Vec<char> = text.as_ref().trim().chars().collect();
            if letters.len() != SIDE_LEN {
                return Err(BoxError::WrongSideSize {
                    side,
                    len: letters.len(),
                });
            }

            for (slot, &raw) in letters.iter().enumerate() {
                if !raw.is_ascii_alphabetic() {
                    return Err(BoxError::InvalidLetter { side, letter: raw });
                }
                let letter = raw.to_ascii_lowercase();

                if unique.contains(letter) && policy == SharedLetters::Reject {
                    return Err(BoxError::SharedLetter(letter));
                }

                parsed[side][slot] = letter;
                unique.insert(letter);
                side_masks[(letter as u8 - b'a') as usize] |= 1 << side;
            }
        }

        Ok(Self {
            sides: parsed,
            side_masks,
            unique,
        })
    }

    /// The four sides in order
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> &[[char; SIDE_LEN]; SIDE_COUNT] {
        &self.sides
    }

    /// Union of all letters on the box
    #[inline]
    #[must_use]
    pub const fn unique_letters(&self) -> LetterSet {
        self.unique
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: char) -> bool {
        self.unique.contains(letter)
    }

    /// Bitmask of the sides a letter sits on (0 if absent)
    #[inline]
    #[must_use]
    pub const fn side_mask(&self, letter: char) -> u8 {
        match LetterSet::index_of(letter) {
            Some(i) => self.side_masks[i as usize],
            None => 0,
        }
    }

    /// Index of the first side holding `letter`
    #[must_use]
    pub const fn side_of(&self, letter: char) -> Option<usize> {
        match self.side_mask(letter) {
            0 => None,
            mask => Some(mask.trailing_zeros() as usize),
        }
    }

    /// Whether two letters share a side
    ///
    /// A letter placed on several sides (only possible under
    /// [`SharedLetters::Allow`]) is on the same side as anything sharing any
    /// of them.
    #[inline]
    #[must_use]
    pub const fn same_side(&self, a: char, b: char) -> bool {
        self.side_mask(a) & self.side_mask(b) != 0
    }

    /// Number of distinct box letters used by a group of words
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterBox;
    ///
    /// let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
    /// assert_eq!(letter_box.coverage(["adg", "gjb"]), 5);
    /// assert_eq!(letter_box.coverage(["xyz"]), 0);
    /// ```
    pub fn coverage<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .fold(LetterSet::EMPTY, |acc, w| {
                acc.union(LetterSet::of_word(w.as_ref()))
            })
            .intersection(self.unique)
            .len()
    }
}

impl FromStr for LetterBox {
    type Err = BoxError;

    /// Parse `"abc,def,ghi,jkl"`; sides may also be separated by `/` or whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides: Vec<&str> = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|side| !side.is_empty())
            .collect();
        Self::new(&sides)
    }
}

impl fmt::Display for LetterBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            for letter in side {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LetterBox {
        LetterBox::new(&["abc", "def", "ghi", "jkl"]).unwrap()
    }

    #[test]
    fn box_creation_valid() {
        let letter_box = sample();
        assert_eq!(letter_box.sides()[0], ['a', 'b', 'c']);
        assert_eq!(letter_box.sides()[3], ['j', 'k', 'l']);
        assert_eq!(letter_box.unique_letters().to_string(), "abcdefghijkl");
    }

    #[test]
    fn box_creation_uppercase_normalized() {
        let letter_box = LetterBox::new(&["ABC", "DeF", "ghi", "JKL"]).unwrap();
        assert_eq!(letter_box, sample());
    }

    #[test]
    fn box_creation_wrong_side_count() {
        assert_eq!(
            LetterBox::new(&["abc", "def", "ghi"]),
            Err(BoxError::WrongSideCount(3))
        );
        let none: [&str; 0] = [];
        assert_eq!(LetterBox::new(&none), Err(BoxError::WrongSideCount(0)));
    }

    #[test]
    fn box_creation_wrong_side_size() {
        assert_eq!(
            LetterBox::new(&["abc", "de", "ghi", "jkl"]),
            Err(BoxError::WrongSideSize { side: 1, len: 2 })
        );
        assert_eq!(
            LetterBox::new(&["abc", "def", "", "jkl"]),
            Err(BoxError::WrongSideSize { side: 2, len: 0 })
        );
    }

    #[test]
    fn box_creation_invalid_letter() {
        assert_eq!(
            LetterBox::new(&["abc", "d3f", "ghi", "jkl"]),
            Err(BoxError::InvalidLetter {
                side: 1,
                letter: '3'
            })
        );
    }

    #[test]
    fn shared_letter_rejected_by_default() {
        assert_eq!(
            LetterBox::new(&["abc", "def", "ghi", "jka"]),
            Err(BoxError::SharedLetter('a'))
        );
        assert_eq!(
            LetterBox::new(&["aab", "def", "ghi", "jkl"]),
            Err(BoxError::SharedLetter('a'))
        );
    }

    #[test]
    fn shared_letter_allowed_joins_sides() {
        let letter_box =
            LetterBox::with_policy(&["abc", "def", "ghi", "jka"], SharedLetters::Allow).unwrap();
        assert_eq!(letter_box.unique_letters().len(), 11);
        assert_eq!(letter_box.side_mask('a'), 0b1001);
        assert_eq!(letter_box.side_of('a'), Some(0));
        // 'a' sits on sides 0 and 3, so it neighbours both 'b' and 'j'
        assert!(letter_box.same_side('a', 'b'));
        assert!(letter_box.same_side('a', 'j'));
        assert!(!letter_box.same_side('a', 'd'));
    }

    #[test]
    fn same_side_lookup() {
        let letter_box = sample();
        assert!(letter_box.same_side('a', 'b'));
        assert!(letter_box.same_side('l', 'j'));
        assert!(!letter_box.same_side('a', 'd'));
        assert!(!letter_box.same_side('a', 'z'));
        assert_eq!(letter_box.side_of('h'), Some(2));
        assert_eq!(letter_box.side_of('z'), None);
    }

    #[test]
    fn parse_separators() {
        let expected = sample();
        assert_eq!("abc,def,ghi,jkl".parse::<LetterBox>().unwrap(), expected);
        assert_eq!("abc/def/ghi/jkl".parse::<LetterBox>().unwrap(), expected);
        assert_eq!("  ABC def  ghi jkl ".parse::<LetterBox>().unwrap(), expected);
        assert!("abcdefghijkl".parse::<LetterBox>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let letter_box = sample();
        assert_eq!(letter_box.to_string(), "abc,def,ghi,jkl");
        assert_eq!(letter_box.to_string().parse::<LetterBox>().unwrap(), letter_box);
    }

    #[test]
    fn coverage_counts_box_letters_only() {
        let letter_box = sample();
        assert_eq!(letter_box.coverage(["adgjbeh", "hkcfil"]), 12);
        assert_eq!(letter_box.coverage(["abz"]), 2);
        assert_eq!(letter_box.coverage(Vec::<String>::new()), 0);
    }
}
