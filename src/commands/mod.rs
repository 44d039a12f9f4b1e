//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, load_boxes, parse_boxes, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_box};
