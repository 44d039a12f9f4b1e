//! Word validation against box geometry
//!
//! The single source of truth for which dictionary words are playable on a box.

use crate::core::{LetterBox, ValidWord};
use std::fmt;

/// Minimum playable word length
pub const MIN_WORD_LEN: usize = 3;

/// Why a word is not playable on a box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort(usize),
    ForeignLetter { letter: char, position: usize },
    SameSide { position: usize },
    RepeatedLetter { position: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must have at least {MIN_WORD_LEN} letters, got {len}")
            }
            Self::ForeignLetter { letter, position } => write!(
                f,
                "Letter '{letter}' at position {} is not on the box",
                position + 1
            ),
            Self::SameSide { position } => write!(
                f,
                "Letters {} and {} are on the same side",
                position + 1,
                position + 2
            ),
            Self::RepeatedLetter { position } => write!(
                f,
                "Letter at position {} is repeated immediately",
                position + 1
            ),
        }
    }
}

impl std::error::Error for Rejection {}

/// Check a word against the box rules, reporting the first failure
///
/// Checks run in order and stop at the first failure:
/// 1. at least three letters
/// 2. every letter is on the box
/// 3. no adjacent pair repeats a letter or stays on one side
///
/// # Errors
/// Returns the `Rejection` describing the first rule the word breaks.
///
/// # Examples
/// ```
/// use letter_boxed::core::LetterBox;
/// use letter_boxed::solver::validator::{check_word, Rejection};
///
/// let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
///
/// assert!(check_word("adgj", &letter_box).is_ok());
/// assert_eq!(check_word("ad", &letter_box), Err(Rejection::TooShort(2)));
/// // 'a' and 'c' share the first side
/// assert_eq!(check_word("face", &letter_box), Err(Rejection::SameSide { position: 1 }));
/// ```
pub fn check_word(word: &str, letter_box: &LetterBox) -> Result<(), Rejection> {
    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        return Err(Rejection::TooShort(len));
    }

    if let Some((position, letter)) = word
        .chars()
        .enumerate()
        .find(|&(_, c)| !letter_box.contains(c))
    {
        return Err(Rejection::ForeignLetter { letter, position });
    }

    let letters: Vec<char> = word.chars().collect();
    for (position, pair) in letters.windows(2).enumerate() {
        if pair[0] == pair[1] {
            return Err(Rejection::RepeatedLetter { position });
        }
        if letter_box.same_side(pair[0], pair[1]) {
            return Err(Rejection::SameSide { position });
        }
    }

    Ok(())
}

/// Whether a word is playable on the box
#[inline]
#[must_use]
pub fn is_valid(word: &str, letter_box: &LetterBox) -> bool {
    check_word(word, letter_box).is_ok()
}

/// Validate a word and wrap it as a `ValidWord`
///
/// # Errors
/// Returns the `Rejection` from [`check_word`].
pub fn validate(word: &str, letter_box: &LetterBox) -> Result<ValidWord, Rejection> {
    check_word(word, letter_box)?;
    Ok(ValidWord::from_checked(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedLetters;

    fn sample_box() -> LetterBox {
        LetterBox::new(&["abc", "def", "ghi", "jkl"]).unwrap()
    }

    #[test]
    fn accepts_alternating_sides() {
        let letter_box = sample_box();
        assert!(is_valid("adgjbehkcfil", &letter_box));
        assert!(is_valid("hkcfil", &letter_box));
        assert!(is_valid("ada", &letter_box));
    }

    #[test]
    fn rejects_short_words() {
        let letter_box = sample_box();
        assert_eq!(check_word("", &letter_box), Err(Rejection::TooShort(0)));
        assert_eq!(check_word("ad", &letter_box), Err(Rejection::TooShort(2)));
    }

    #[test]
    fn rejects_foreign_letters() {
        let letter_box = sample_box();
        assert_eq!(
            check_word("adz", &letter_box),
            Err(Rejection::ForeignLetter {
                letter: 'z',
                position: 2
            })
        );
        // Uppercase input is not normalized here
        assert!(matches!(
            check_word("ADG", &letter_box),
            Err(Rejection::ForeignLetter { letter: 'A', .. })
        ));
    }

    #[test]
    fn length_checked_before_letters() {
        assert_eq!(check_word("zz", &sample_box()), Err(Rejection::TooShort(2)));
    }

    #[test]
    fn letters_checked_before_adjacency() {
        // "abz": a/b share a side, but z is off the box and reported first
        assert!(matches!(
            check_word("abz", &sample_box()),
            Err(Rejection::ForeignLetter { letter: 'z', .. })
        ));
    }

    #[test]
    fn rejects_same_side_neighbours() {
        let letter_box = sample_box();
        // f-a ok, a-c same side
        assert_eq!(
            check_word("face", &letter_box),
            Err(Rejection::SameSide { position: 1 })
        );
        // e-l ok, l-k same side
        assert_eq!(
            check_word("elk", &letter_box),
            Err(Rejection::SameSide { position: 1 })
        );
    }

    #[test]
    fn rejects_immediate_repeats() {
        assert_eq!(
            check_word("addg", &sample_box()),
            Err(Rejection::RepeatedLetter { position: 1 })
        );
    }

    #[test]
    fn degenerate_box_has_no_valid_words() {
        let letter_box =
            LetterBox::with_policy(&["aaa", "aaa", "aaa", "aaa"], SharedLetters::Allow).unwrap();
        assert_eq!(
            check_word("aaa", &letter_box),
            Err(Rejection::RepeatedLetter { position: 0 })
        );
        assert_eq!(check_word("a", &letter_box), Err(Rejection::TooShort(1)));
    }

    #[test]
    fn validate_wraps_word() {
        let word = validate("hkcfil", &sample_box()).unwrap();
        assert_eq!(word.text(), "hkcfil");
        assert_eq!(word.first(), 'h');
        assert_eq!(word.last(), 'l');
        assert!(validate("face", &sample_box()).is_err());
    }

    #[test]
    fn accepted_words_satisfy_every_rule() {
        let letter_box = sample_box();
        let words = [
            "adgjbeh", "hkcfil", "face", "elk", "abc", "ada", "adda", "jdg", "lij", "gag",
        ];
        for word in words.iter().filter(|w| is_valid(w, &letter_box)) {
            let letters: Vec<char> = word.chars().collect();
            assert!(letters.len() >= MIN_WORD_LEN);
            assert!(letters.iter().all(|&c| letter_box.contains(c)));
            for pair in letters.windows(2) {
                assert_ne!(pair[0], pair[1], "{word}");
                assert!(!letter_box.same_side(pair[0], pair[1]), "{word}");
            }
        }
    }
}
