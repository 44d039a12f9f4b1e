//! Interactive TUI interface
//!
//! Type a box, solve it, and browse the ranked chains.

mod app;
mod rendering;

pub use app::{App, InputMode, run_tui};
