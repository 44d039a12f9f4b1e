//! Main Letter Boxed solver interface

use super::index::CandidateIndex;
use super::ranker::rank;
use super::search::{
    DEFAULT_MAX_WORDS, MAX_CHAIN_WORDS, SearchConfig, SearchStats, SearchStatus, search,
};
use crate::core::{LetterBox, Solution};
use std::time::{Duration, Instant};

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Longest chain tried during escalation
    pub max_words: usize,
    /// Per-stage result cap (`None` = unlimited, the default)
    ///
    /// With a cap the best chain of a stage is only the best of the chains
    /// found before the cap, which favours short words but is not exhaustive.
    pub result_cap: Option<usize>,
    /// Search starting words in parallel
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            result_cap: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Set the escalation ceiling, clamped to [`MAX_CHAIN_WORDS`]
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words.min(MAX_CHAIN_WORDS);
        self
    }

    #[must_use]
    pub const fn with_result_cap(mut self, result_cap: Option<usize>) -> Self {
        self.result_cap = result_cap;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    const fn stage(&self, max_words: usize) -> SearchConfig {
        SearchConfig {
            max_words,
            result_cap: self.result_cap,
            parallel: self.parallel,
        }
    }
}

/// What happened at one escalation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    pub max_words: usize,
    pub solutions_found: usize,
    pub status: SearchStatus,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Full result of a solve, including observability counts
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Dictionary words playable on the box
    pub valid_words: usize,
    /// One entry per stage that ran, in order
    pub stages: Vec<StageReport>,
    /// Solutions from the last stage, best first
    pub ranked: Vec<Solution>,
}

impl SolveReport {
    /// Best solution, if any stage found one
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.ranked.first()
    }

    #[must_use]
    pub fn into_best(self) -> Option<Solution> {
        self.ranked.into_iter().next()
    }

    /// Whether any stage stopped at the result cap
    #[must_use]
    pub fn hit_cap(&self) -> bool {
        self.stages
            .iter()
            .any(|stage| stage.status == SearchStatus::CapReached)
    }
}

/// Main Letter Boxed solver
///
/// Builds the candidate index, then searches for 1-word solutions, 2-word
/// solutions, and so on up to the configured ceiling, returning the best chain
/// from the first stage that finds any.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a box, returning the best chain or `None`
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterBox;
    /// use letter_boxed::solver::Solver;
    ///
    /// let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
    /// let dictionary = ["face", "elk", "adgjbeh", "hkcfil"];
    ///
    /// let best = Solver::default().solve(&letter_box, dictionary).unwrap();
    /// assert_eq!(best.to_string(), "adgjbeh → hkcfil");
    /// ```
    pub fn solve<I, S>(&self, letter_box: &LetterBox, dictionary: I) -> Option<Solution>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.solve_with_report(letter_box, dictionary).into_best()
    }

    /// Solve a box and report per-stage counts
    pub fn solve_with_report<I, S>(&self, letter_box: &LetterBox, dictionary: I) -> SolveReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = CandidateIndex::build(dictionary, letter_box);
        self.solve_indexed(&index, letter_box)
    }

    /// Solve with an index that was already built for `letter_box`
    #[must_use]
    pub fn solve_indexed(&self, index: &CandidateIndex, letter_box: &LetterBox) -> SolveReport {
        log::info!("Found {} valid words for box {letter_box}", index.len());

        let mut stages = Vec::new();

        for max_words in 1..=self.config.max_words {
            let start = Instant::now();
            let outcome = search(index, letter_box, &self.config.stage(max_words));
            let elapsed = start.elapsed();

            let ranked = rank(outcome.solutions);
            stages.push(StageReport {
                max_words,
                solutions_found: ranked.len(),
                status: outcome.status,
                stats: outcome.stats,
                elapsed,
            });

            if ranked.is_empty() {
                log::info!("No solution with at most {max_words} word(s)");
                continue;
            }

            if outcome.status == SearchStatus::CapReached {
                log::info!(
                    "Found {} solution(s) with at most {max_words} word(s) (result cap reached)",
                    ranked.len()
                );
            } else {
                log::info!(
                    "Found {} solution(s) with at most {max_words} word(s)",
                    ranked.len()
                );
            }

            return SolveReport {
                valid_words: index.len(),
                stages,
                ranked,
            };
        }

        log::info!(
            "No solution within {} word(s)",
            self.config.max_words
        );

        SolveReport {
            valid_words: index.len(),
            stages,
            ranked: Vec::new(),
        }
    }
}
