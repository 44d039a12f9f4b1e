//! Chain search
//!
//! Bounded depth-first search over word chains. Each valid word is an edge
//! from its first letter to its last letter; a chain is extended through
//! [`CandidateIndex::starting_with`] while tracking the union of covered
//! letters. Branches that cannot reach full coverage within the remaining
//! depth are pruned. Start words and followers are tried shortest first, so a
//! capped search keeps the short chains.

use super::index::{CandidateIndex, WordId};
use crate::core::{LetterBox, LetterSet, Solution};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Default number of solutions collected before the search stops
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Default chain length bound
pub const DEFAULT_MAX_WORDS: usize = 2;

/// Hard ceiling on chain length; larger requests are clamped to it
pub const MAX_CHAIN_WORDS: usize = 5;

/// Search bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Longest chain considered
    pub max_words: usize,
    /// Stop after this many solutions (`None` explores everything)
    pub result_cap: Option<usize>,
    /// Partition starting words across the rayon pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            result_cap: Some(DEFAULT_RESULT_CAP),
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Set the chain length bound, clamped to [`MAX_CHAIN_WORDS`]
    #[must_use]
    pub const fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = if max_words > MAX_CHAIN_WORDS {
            MAX_CHAIN_WORDS
        } else {
            max_words
        };
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
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every unpruned branch was explored
    Exhausted,
    /// A solution beyond the result cap was found, so exploration stopped
    /// early; finding exactly `cap` solutions in a full search is `Exhausted`
    CapReached,
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Chains visited
    pub expanded: usize,
    /// Chains abandoned by the coverage bound
    pub pruned: usize,
}

impl SearchStats {
    const fn merge(self, other: Self) -> Self {
        Self {
            expanded: self.expanded + other.expanded,
            pruned: self.pruned + other.pruned,
        }
    }
}

/// Solutions found by one search, unranked
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub solutions: Vec<Solution>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

impl SearchOutcome {
    const fn empty() -> Self {
        Self {
            solutions: Vec::new(),
            status: SearchStatus::Exhausted,
            stats: SearchStats {
                expanded: 0,
                pruned: 0,
            },
        }
    }
}

/// Find chains of at most `config.max_words` words covering every box letter
///
/// A chain is reported as soon as it covers the box and is never extended
/// further. The same word may appear more than once in a chain, but never
/// twice in a row. Every returned chain is re-verified against `letter_box`,
/// so chains using words that are not playable on it are dropped. Always
/// terminates: `max_words` is clamped to [`MAX_CHAIN_WORDS`], and a
/// degenerate box or empty index yields no solutions.
///
/// # Examples
/// ```
/// use letter_boxed::core::LetterBox;
/// use letter_boxed::solver::{CandidateIndex, SearchConfig, search};
///
/// let letter_box: LetterBox = "abc,def,ghi,jkl".parse().unwrap();
/// let index = CandidateIndex::build(["adgjbeh", "hkcfil"], &letter_box);
///
/// let single = search(&index, &letter_box, &SearchConfig::default().with_max_words(1));
/// assert!(single.solutions.is_empty());
///
/// let pair = search(&index, &letter_box, &SearchConfig::default().with_max_words(2));
/// assert_eq!(pair.solutions.len(), 1);
/// assert_eq!(pair.solutions[0].to_string(), "adgjbeh → hkcfil");
/// ```
#[must_use]
pub fn search(index: &CandidateIndex, letter_box: &LetterBox, config: &SearchConfig) -> SearchOutcome {
    let target = letter_box.unique_letters();
    let max_words = config.max_words.min(MAX_CHAIN_WORDS);
    if target.is_empty() || index.is_empty() || max_words == 0 {
        return SearchOutcome::empty();
    }

    let budget = Budget::new(config.result_cap);

    let found = if config.parallel {
        index
            .shortest_first()
            .par_iter()
            .map(|&start| {
                let mut walker = Walker::new(index, target, max_words, &budget);
                walker.walk_from(start);
                walker.finish()
            })
            .reduce(Found::default, Found::merge)
    } else {
        let mut walker = Walker::new(index, target, max_words, &budget);
        for &start in index.shortest_first() {
            if budget.should_stop() {
                break;
            }
            walker.walk_from(start);
        }
        walker.finish()
    };

    let solutions: Vec<Solution> = found
        .chains
        .into_iter()
        .filter_map(|chain| {
            let words = chain.iter().map(|&id| index.word(id).clone()).collect();
            Solution::new(words, letter_box)
                .inspect_err(|e| log::warn!("Discarding chain that failed verification: {e}"))
                .ok()
        })
        .collect();

    let status = if budget.should_stop() {
        SearchStatus::CapReached
    } else {
        SearchStatus::Exhausted
    };

    log::debug!(
        "Search (max {} words): {} solutions, {} chains expanded, {} pruned, {status:?}",
        max_words,
        solutions.len(),
        found.stats.expanded,
        found.stats.pruned
    );

    SearchOutcome {
        solutions,
        status,
        stats: found.stats,
    }
}

/// Shared result cap, checked cooperatively at every expansion
struct Budget {
    cap: Option<usize>,
    claimed: AtomicUsize,
    stop: AtomicBool,
}

impl Budget {
    fn new(cap: Option<usize>) -> Self {
        Self {
            cap,
            claimed: AtomicUsize::new(0),
            stop: AtomicBool::new(false),
        }
    }

    /// Reserve a slot for one more solution
    ///
    /// The search only stops once a solution past the cap turns up, so a
    /// search that finds exactly `cap` solutions still runs to exhaustion.
    fn try_claim(&self) -> bool {
        let Some(cap) = self.cap else {
            return true;
        };
        let previous = self.claimed.fetch_add(1, Ordering::Relaxed);
        if previous >= cap {
            self.stop.store(true, Ordering::Relaxed);
            return false;
        }
        true
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

/// Chains (as word ids) and counters from one worker
#[derive(Default)]
struct Found {
    chains: Vec<Vec<WordId>>,
    stats: SearchStats,
}

impl Found {
    fn merge(mut self, other: Self) -> Self {
        self.chains.extend(other.chains);
        self.stats = self.stats.merge(other.stats);
        self
    }
}

struct Walker<'a> {
    index: &'a CandidateIndex,
    target: LetterSet,
    max_words: usize,
    /// Upper bound on new letters one extension can add; its first letter is
    /// always the previous word's last letter, which is already covered
    max_gain: usize,
    budget: &'a Budget,
    chain: Vec<WordId>,
    found: Found,
}

impl<'a> Walker<'a> {
    fn new(
        index: &'a CandidateIndex,
        target: LetterSet,
        max_words: usize,
        budget: &'a Budget,
    ) -> Self {
        Self {
            index,
            target,
            max_words,
            max_gain: index.max_letter_span().saturating_sub(1),
            budget,
            chain: Vec::with_capacity(max_words),
            found: Found::default(),
        }
    }

    fn walk_from(&mut self, start: WordId) {
        if self.budget.should_stop() {
            return;
        }
        self.chain.push(start);
        self.extend(self.index.word(start).letters());
        self.chain.pop();
    }

    fn extend(&mut self, covered: LetterSet) {
        self.found.stats.expanded += 1;

        if covered == self.target {
            if self.budget.try_claim() {
                self.found.chains.push(self.chain.clone());
            }
            return;
        }

        let depth = self.chain.len();
        if depth >= self.max_words {
            return;
        }

        let uncovered = self.target.difference(covered).len();
        if uncovered > (self.max_words - depth).saturating_mul(self.max_gain) {
            self.found.stats.pruned += 1;
            return;
        }

        let Some(&current) = self.chain.last() else {
            return;
        };
        let index = self.index;
        for &next in index.starting_with(index.word(current).last()) {
            if self.budget.should_stop() {
                return;
            }
            if next == current {
                continue;
            }
            self.chain.push(next);
            self.extend(covered.union(index.word(next).letters()));
            self.chain.pop();
        }
    }

    fn finish(self) -> Found {
        self.found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> LetterBox {
        LetterBox::new(&["abc", "def", "ghi", "jkl"]).unwrap()
    }

    fn texts(solution: &Solution) -> Vec<&str> {
        solution.words().iter().map(|w| w.text()).collect()
    }

    fn run(words: &[&str], config: SearchConfig) -> SearchOutcome {
        let letter_box = sample_box();
        let index = CandidateIndex::build(words, &letter_box);
        search(&index, &letter_box, &config)
    }

    #[test]
    fn single_word_solutions() {
        let outcome = run(
            &["adgjbehkcfil", "adgjbeh", "hkcfil"],
            SearchConfig::default().with_max_words(1),
        );
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(texts(&outcome.solutions[0]), vec!["adgjbehkcfil"]);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
    }

    #[test]
    fn two_word_chain_found() {
        let outcome = run(&["adgjbeh", "hkcfil"], SearchConfig::default());
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(texts(&outcome.solutions[0]), vec!["adgjbeh", "hkcfil"]);
    }

    #[test]
    fn covering_word_is_not_extended() {
        // "adgjbehkcfil" covers everything on its own, so no chain continues it
        let outcome = run(&["adgjbehkcfil", "lij"], SearchConfig::default());
        let found: Vec<Vec<&str>> = outcome.solutions.iter().map(texts).collect();
        assert_eq!(found, vec![vec!["adgjbehkcfil"]]);
    }

    #[test]
    fn chain_must_link_letters() {
        // Together they cover the box but "adgjbeh" ends in h, not k
        let outcome = run(&["adgjbeh", "kcfil"], SearchConfig::default());
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn three_word_chain_needs_depth_three() {
        let words = ["adgj", "jbeh", "hkcfil"];
        assert!(run(&words, SearchConfig::default()).solutions.is_empty());

        let outcome = run(&words, SearchConfig::default().with_max_words(3));
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(texts(&outcome.solutions[0]), vec!["adgj", "jbeh", "hkcfil"]);
    }

    #[test]
    fn invalid_words_never_appear() {
        // "face" and "elk" break the side rule on this box
        let outcome = run(&["face", "elk"], SearchConfig::default().with_max_words(3));
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn result_cap_stops_search() {
        let words = [
            "adgjbehkcfil",
            "adgjbeh",
            "hkcfil",
            "adgjbehk",
            "kcfil",
            "adgj",
            "jbeh",
        ];
        let unlimited = run(
            &words,
            SearchConfig::default()
                .with_max_words(3)
                .with_result_cap(None),
        );
        assert!(unlimited.solutions.len() > 2);
        assert_eq!(unlimited.status, SearchStatus::Exhausted);

        let capped = run(
            &words,
            SearchConfig::default()
                .with_max_words(3)
                .with_result_cap(Some(2)),
        );
        assert_eq!(capped.solutions.len(), 2);
        assert_eq!(capped.status, SearchStatus::CapReached);
    }

    #[test]
    fn exact_cap_with_nothing_left_is_exhausted() {
        let outcome = run(
            &["adgjbeh", "hkcfil"],
            SearchConfig::default().with_result_cap(Some(1)),
        );
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
    }

    #[test]
    fn capped_search_keeps_short_chains() {
        // 68 long "adad...gjbeh" openers sort before the two short words
        let mut words: Vec<String> = (2..70)
            .map(|n| format!("{}gjbeh", "ad".repeat(n)))
            .collect();
        words.push("hkcfil".to_string());
        words.push("ladgjbeh".to_string());

        let letter_box = sample_box();
        let index = CandidateIndex::build(&words, &letter_box);
        let outcome = search(&index, &letter_box, &SearchConfig::default());

        assert_eq!(outcome.status, SearchStatus::CapReached);
        assert_eq!(outcome.solutions.len(), DEFAULT_RESULT_CAP);
        let best = crate::solver::best(outcome.solutions).unwrap();
        assert_eq!(texts(&best), vec!["hkcfil", "ladgjbeh"]);
        assert_eq!(best.total_letters(), 14);
    }

    #[test]
    fn oversized_max_words_is_clamped() {
        assert_eq!(
            SearchConfig::default().with_max_words(usize::MAX).max_words,
            MAX_CHAIN_WORDS
        );

        let config = SearchConfig {
            max_words: usize::MAX,
            result_cap: None,
            parallel: false,
        };
        let outcome = run(&["adgj", "jbeh", "hkcfil"], config);
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.solutions.len(), 1);
        assert_eq!(texts(&outcome.solutions[0]), vec!["adgj", "jbeh", "hkcfil"]);
    }

    #[test]
    fn index_from_another_box_yields_nothing() {
        let index = CandidateIndex::build(["adgjbeh", "hkcfil"], &sample_box());
        let other = LetterBox::new(&["adg", "beh", "cfi", "jkl"]).unwrap();
        let outcome = search(&index, &other, &SearchConfig::default());
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn zero_cap_finds_nothing() {
        let outcome = run(
            &["adgjbeh", "hkcfil"],
            SearchConfig::default().with_result_cap(Some(0)),
        );
        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.status, SearchStatus::CapReached);
    }

    #[test]
    fn empty_index_yields_nothing() {
        let outcome = run(&[], SearchConfig::default());
        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.status, SearchStatus::Exhausted);
    }

    #[test]
    fn bridge_words_may_add_nothing() {
        // "hda" only uses letters "adgjbeh" already covered, but it is the
        // only way from h to a word starting with a
        let outcome = run(
            &["adgjbeh", "hda", "akcfil"],
            SearchConfig::default().with_max_words(3),
        );
        let found: Vec<Vec<&str>> = outcome.solutions.iter().map(texts).collect();
        assert_eq!(found, vec![vec!["adgjbeh", "hda", "akcfil"]]);
    }

    #[test]
    fn self_loop_is_not_repeated() {
        // "ada" starts and ends with 'a'; it must never follow itself
        let outcome = run(
            &["ada", "adgjbehkcfil"],
            SearchConfig::default()
                .with_max_words(4)
                .with_result_cap(None),
        );
        for solution in &outcome.solutions {
            for pair in solution.words().windows(2) {
                assert_ne!(pair[0], pair[1]);
            }
        }
        let found: Vec<Vec<&str>> = outcome.solutions.iter().map(texts).collect();
        assert!(found.contains(&vec!["ada", "adgjbehkcfil"]));
        assert!(found.contains(&vec!["adgjbehkcfil"]));
    }

    #[test]
    fn pruning_keeps_every_solution() {
        let words = ["adgj", "jbeh", "hkcfil", "adgjbeh", "hka", "ada"];
        let letter_box = sample_box();
        let index = CandidateIndex::build(words, &letter_box);
        let outcome = search(
            &index,
            &letter_box,
            &SearchConfig::default()
                .with_max_words(3)
                .with_result_cap(None),
        );
        let found: Vec<Vec<&str>> = outcome.solutions.iter().map(texts).collect();
        assert!(found.contains(&vec!["adgjbeh", "hkcfil"]));
        assert!(found.contains(&vec!["adgj", "jbeh", "hkcfil"]));
        // "ada" then "adgj" leaves 8 letters for one word of at most 6 new ones
        assert!(outcome.stats.pruned > 0);
        assert!(outcome.stats.expanded > outcome.stats.pruned);
    }

    #[test]
    fn parallel_matches_sequential() {
        let words = [
            "adgjbehkcfil",
            "adgjbeh",
            "hkcfil",
            "adgjbehk",
            "kcfil",
            "adgj",
            "jbeh",
            "hka",
        ];
        let config = SearchConfig::default()
            .with_max_words(3)
            .with_result_cap(None);

        let mut sequential: Vec<String> = run(&words, config)
            .solutions
            .iter()
            .map(Solution::to_string)
            .collect();
        let mut parallel: Vec<String> = run(&words, config.with_parallel(true))
            .solutions
            .iter()
            .map(Solution::to_string)
            .collect();
        sequential.sort();
        parallel.sort();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn every_solution_satisfies_invariants() {
        let letter_box = sample_box();
        let words = ["adgjbehkcfil", "adgjbeh", "hkcfil", "adgjbehk", "kcfil", "adgj", "jbeh", "hka", "ada"];
        let index = CandidateIndex::build(words, &letter_box);
        let outcome = search(
            &index,
            &letter_box,
            &SearchConfig::default()
                .with_max_words(3)
                .with_result_cap(None),
        );
        for solution in &outcome.solutions {
            assert!(solution.word_count() <= 3);
            assert_eq!(solution.covered(), letter_box.unique_letters());
            for pair in solution.words().windows(2) {
                assert_eq!(pair[0].last(), pair[1].first());
            }
        }
    }
}
