//! Box solving command
//!
//! Parses a box, runs the solver, and returns the report for display.

use crate::core::{BoxError, LetterBox};
use crate::solver::{SolveReport, Solver, SolverConfig};
use std::time::{Duration, Instant};

/// Configuration for solving a box
pub struct SolveConfig {
    pub letters: String,
    pub solver: SolverConfig,
    /// Number of ranked solutions to keep for display
    pub top: usize,
}

impl SolveConfig {
    #[must_use]
    pub fn new(letters: String) -> Self {
        Self {
            letters,
            solver: SolverConfig::default(),
            top: 5,
        }
    }
}

/// Result of solving a box
pub struct SolveResult {
    pub letter_box: LetterBox,
    pub report: SolveReport,
    pub duration: Duration,
    pub top: usize,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.report.best().is_some()
    }
}

/// Solve the box described by `config.letters` against a dictionary
///
/// # Errors
///
/// Returns `BoxError` if the letters do not describe a well-formed box. This
/// is checked before any search runs.
pub fn solve_box(config: SolveConfig, dictionary: &[String]) -> Result<SolveResult, BoxError> {
    let letter_box: LetterBox = config.letters.parse()?;

    let start = Instant::now();
    let mut report = Solver::new(config.solver).solve_with_report(&letter_box, dictionary);
    let duration = start.elapsed();

    report.ranked.truncate(config.top.max(1));

    Ok(SolveResult {
        letter_box,
        report,
        duration,
        top: config.top,
    })
}
