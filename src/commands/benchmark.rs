//! Benchmark command
//!
//! Solves a batch of boxes and reports timing and chain-length statistics.

use crate::core::{BoxError, LetterBox};
use crate::solver::{CandidateIndex, Solver, SolverConfig};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boxes: usize,
    pub solved: usize,
    pub unsolved: Vec<LetterBox>,
    /// Words in best chain → number of boxes
    pub distribution: HashMap<usize, usize>,
    pub average_letters: f64,
    pub duration: Duration,
    pub boxes_per_second: f64,
    pub slowest: Option<(LetterBox, Duration)>,
}

/// Parse one box per line; blank lines and `#` comments are skipped
///
/// # Errors
///
/// Returns the first `BoxError` encountered.
pub fn parse_boxes(content: &str) -> Result<Vec<LetterBox>, BoxError> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::parse)
        .collect()
}

/// Load boxes from a file (see [`parse_boxes`])
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a valid box.
pub fn load_boxes<P: AsRef<Path>>(path: P) -> Result<Vec<LetterBox>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read boxes from {}", path.display()))?;
    parse_boxes(&content).with_context(|| format!("Invalid box in {}", path.display()))
}

/// Run the solver on every box
///
/// # Panics
///
/// Panics if the progress bar template is malformed (it is a constant).
pub fn run_benchmark(
    boxes: &[LetterBox],
    dictionary: &[String],
    config: SolverConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let solver = Solver::new(config);

    let pb = if show_progress {
        ProgressBar::new(boxes.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut unsolved = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_letters = 0;
    let mut slowest: Option<(LetterBox, Duration)> = None;

    for letter_box in boxes {
        let box_start = Instant::now();
        let index = CandidateIndex::build(dictionary, letter_box);
        let report = solver.solve_indexed(&index, letter_box);
        let elapsed = box_start.elapsed();

        if let Some(best) = report.best() {
            solved += 1;
            total_letters += best.total_letters();
            *distribution.entry(best.word_count()).or_insert(0) += 1;
            pb.set_message(best.to_string());
        } else {
            unsolved.push(letter_box.clone());
            pb.set_message(format!("{letter_box}: no solution"));
        }

        if slowest.as_ref().is_none_or(|(_, worst)| elapsed > *worst) {
            slowest = Some((letter_box.clone(), elapsed));
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_boxes = boxes.len();

    BenchmarkResult {
        total_boxes,
        solved,
        unsolved,
        distribution,
        average_letters: if solved == 0 {
            0.0
        } else {
            total_letters as f64 / solved as f64
        },
        duration,
        boxes_per_second: if duration.is_zero() {
            0.0
        } else {
            total_boxes as f64 / duration.as_secs_f64()
        },
        slowest,
    }
}
