//! Letter Boxed solving pipeline
//!
//! validator → index → search → ranker, orchestrated by [`Solver`].

mod engine;
pub mod index;
pub mod ranker;
pub mod search;
pub mod validator;

pub use engine::{SolveReport, Solver, SolverConfig, StageReport};
pub use index::{CandidateIndex, WordId};
pub use ranker::{best, rank};
pub use search::{
    DEFAULT_MAX_WORDS, DEFAULT_RESULT_CAP, MAX_CHAIN_WORDS, SearchConfig, SearchOutcome,
    SearchStats, SearchStatus, search,
};
pub use validator::{Rejection, check_word, is_valid};
