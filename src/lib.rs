//! Letter Boxed Solver
//!
//! Finds the shortest chain of dictionary words that uses every letter on a
//! Letter Boxed puzzle, where consecutive letters of a word never come from
//! the same side and each word starts with the last letter of the previous one.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::LetterBox;
//! use letter_boxed::solver::Solver;
//!
//! let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
//! let dictionary = ["adgjbeh", "hkcfil", "face"];
//!
//! let best = Solver::default().solve(&letter_box, dictionary).unwrap();
//! assert_eq!(best.word_count(), 2);
//! println!("{best}"); // adgjbeh → hkcfil
//! ```

// Core domain types
pub mod core;

// Solving pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod logging;
