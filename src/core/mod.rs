//! Core domain types for Letter Boxed
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear invariants.

mod letter_box;
mod letters;
mod solution;
mod word;

pub use letter_box::{BoxError, LetterBox, SIDE_COUNT, SIDE_LEN, SharedLetters};
pub use letters::LetterSet;
pub use solution::{ChainError, ScoredSolution, Solution};
pub use word::ValidWord;
