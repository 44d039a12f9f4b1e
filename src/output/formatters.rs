//! Formatting utilities for terminal output

use crate::core::{LetterBox, LetterSet, SIDE_LEN};

/// Draw the box as text lines
///
/// Side 1 runs along the top, side 2 down the right, side 3 along the bottom
/// and side 4 down the left. `mark` renders each letter, so callers can
/// colour letters (for example the ones a chain covers).
pub fn box_diagram<F>(letter_box: &LetterBox, mark: F) -> Vec<String>
where
    F: Fn(char) -> String,
{
    let [top, right, bottom, left] = letter_box.sides();
    let inner = SIDE_LEN * 4 - 1;

    let across = |side: &[char; SIDE_LEN]| {
        let letters: Vec<String> = side.iter().map(|&c| mark(c)).collect();
        format!("    {}", letters.join("   "))
    };

    let mut lines = Vec::with_capacity(SIDE_LEN + 4);
    lines.push(across(top));
    lines.push(format!("  ┌{}┐", "─".repeat(inner)));
    for row in 0..SIDE_LEN {
        lines.push(format!(
            "{} │{}│ {}",
            mark(left[row]),
            " ".repeat(inner),
            mark(right[row])
        ));
    }
    lines.push(format!("  └{}┘", "─".repeat(inner)));
    lines.push(across(bottom));
    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many box letters a set covers
#[must_use]
pub fn coverage_bar(covered: LetterSet, letter_box: &LetterBox, width: usize) -> String {
    let total = letter_box.unique_letters().len();
    let used = covered.intersection(letter_box.unique_letters()).len();
    create_progress_bar(used as f64, total as f64, width)
}
