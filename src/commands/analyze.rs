//! Word analysis command
//!
//! Explains whether a single word is playable on a box and which letters it
//! leaves uncovered.

use crate::core::{BoxError, LetterBox, LetterSet};
use crate::solver::{CandidateIndex, Rejection, check_word};

/// Analysis of one word against a box
pub struct AnalysisResult {
    pub word: String,
    pub letter_box: LetterBox,
    pub verdict: Result<(), Rejection>,
    /// Box letters the word uses
    pub covered: LetterSet,
    /// Box letters the word does not use
    pub missing: LetterSet,
    /// Whether the dictionary lists the word (`None` without a dictionary)
    pub in_dictionary: Option<bool>,
    /// Valid dictionary words that can follow this one
    pub followers: Option<usize>,
}

impl AnalysisResult {
    /// Playable and covers every letter on its own
    #[must_use]
    pub fn is_single_word_solution(&self) -> bool {
        self.verdict.is_ok() && self.missing.is_empty()
    }
}

/// Analyze `word` on the box described by `letters`
///
/// # Errors
///
/// Returns `BoxError` if `letters` is not a well-formed box.
pub fn analyze_word(
    letters: &str,
    word: &str,
    dictionary: Option<&[String]>,
) -> Result<AnalysisResult, BoxError> {
    let letter_box: LetterBox = letters.parse()?;
    let word = word.trim().to_ascii_lowercase();

    let verdict = check_word(&word, &letter_box);
    let covered = LetterSet::of_word(&word).intersection(letter_box.unique_letters());
    let missing = letter_box.unique_letters().difference(covered);

    let (in_dictionary, followers) = match dictionary {
        Some(words) => {
            let index = CandidateIndex::build(words, &letter_box);
            let listed = words.iter().any(|w| *w == word);
            let followers = word
                .chars()
                .next_back()
                .map_or(0, |last| index.starting_with(last).len());
            (Some(listed), Some(followers))
        }
        None => (None, None),
    };

    Ok(AnalysisResult {
        word,
        letter_box,
        verdict,
        covered,
        missing,
        in_dictionary,
        followers,
    })
}
