//! Word lists for Letter Boxed solving
//!
//! The solver takes any iterable of words; this module loads them from disk.

pub mod loader;

/// Word list used when none is given on the command line
pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";
