//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or string slices.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize one dictionary entry
///
/// Trims whitespace and lowercases. Returns `None` for blank entries and
/// entries with anything other than ASCII letters (apostrophes, hyphens,
/// accented letters).
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::normalize_entry;
///
/// assert_eq!(normalize_entry("  Apple\n").as_deref(), Some("apple"));
/// assert_eq!(normalize_entry("don't"), None);
/// assert_eq!(normalize_entry("   "), None);
/// ```
#[must_use]
pub fn normalize_entry(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Load words from a file, one per line
///
/// Entries are normalized with [`normalize_entry`]; rejected lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Normalize every line of a string
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_entry).collect()
}

/// Convert a string slice to a normalized word vector
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Face", "elk", "o'clock"]);
/// assert_eq!(words, vec!["face", "elk"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize_entry(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["face", "ELK", "Facetiously"]);
        assert_eq!(words, vec!["face", "elk", "facetiously"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["face", "e-mail", "", "naïve", "elk"]);
        assert_eq!(words, vec!["face", "elk"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_lines_handles_crlf() {
        let words = words_from_lines("face\r\nelk\r\n\r\n");
        assert_eq!(words, vec!["face", "elk"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "letter_boxed_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Face").unwrap();
            writeln!(file, "elk").unwrap();
            writeln!(file, "don't").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["face", "elk"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/a/wordlist.txt").is_err());
    }
}
