//! TUI application state and logic

use crate::core::{LetterBox, LetterSet, Solution};
use crate::solver::{CandidateIndex, SolveReport, Solver, SolverConfig};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest input accepted in the box editor
const MAX_INPUT_LEN: usize = 24;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [String],
    pub solver: Solver,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub current: Option<SolvedBox>,
    pub selected: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// A box together with its solve report
pub struct SolvedBox {
    pub letter_box: LetterBox,
    pub report: SolveReport,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a box
    Editing,
    /// Scrolling through ranked solutions
    Browsing,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letters: String,
    pub best: Option<String>,
    pub valid_words: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub boxes_solved: usize,
    pub boxes_unsolved: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [String], config: SolverConfig) -> Self {
        Self {
            dictionary,
            solver: Solver::new(config),
            input_mode: InputMode::Editing,
            input_buffer: String::new(),
            current: None,
            selected: 0,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a box (e.g. 'abc,def,ghi,jkl') and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Parse the input buffer as a box and solve it
    pub fn submit_box(&mut self) {
        let letters = self.input_buffer.trim().to_string();
        let letter_box = match letters.parse::<LetterBox>() {
            Ok(letter_box) => letter_box,
            Err(e) => {
                self.add_message(&format!("Invalid box: {e}"), MessageStyle::Error);
                return;
            }
        };

        let start = Instant::now();
        let index = CandidateIndex::build(self.dictionary, &letter_box);
        let report = self.solver.solve_indexed(&index, &letter_box);
        let elapsed = start.elapsed();

        let best = report.best().map(ToString::to_string);
        match &best {
            Some(chain) => {
                self.stats.boxes_solved += 1;
                self.add_message(
                    &format!(
                        "{} solutions ranked, best: {chain}",
                        report.ranked.len()
                    ),
                    MessageStyle::Success,
                );
            }
            None => {
                self.stats.boxes_unsolved += 1;
                self.add_message(
                    &format!(
                        "No solution within {} words ({} valid words)",
                        self.solver.config().max_words,
                        report.valid_words
                    ),
                    MessageStyle::Error,
                );
            }
        }

        self.history.push(HistoryEntry {
            letters: letter_box.to_string(),
            best,
            valid_words: report.valid_words,
        });

        self.current = Some(SolvedBox {
            letter_box,
            report,
            elapsed,
        });
        self.selected = 0;
        self.input_buffer.clear();
        self.input_mode = InputMode::Browsing;
    }

    /// Switch back to typing a new box
    pub fn start_editing(&mut self) {
        self.input_buffer.clear();
        self.input_mode = InputMode::Editing;
    }

    pub fn select_next(&mut self) {
        let count = self.solution_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, |solved| solved.report.ranked.len())
    }

    #[must_use]
    pub fn selected_solution(&self) -> Option<&Solution> {
        self.current
            .as_ref()
            .and_then(|solved| solved.report.ranked.get(self.selected))
    }

    /// Letters used by the selected chain
    #[must_use]
    pub fn covered_letters(&self) -> LetterSet {
        self.selected_solution()
            .map_or(LetterSet::EMPTY, Solution::covered)
    }

    /// Accept a typed character if it can be part of a box
    pub fn push_input(&mut self, c: char) {
        let accepted = c.is_ascii_alphabetic() || matches!(c, ',' | '/' | ' ');
        if accepted && self.input_buffer.len() < MAX_INPUT_LEN {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Editing => match key.code {
                        KeyCode::Esc => {
                            if app.current.is_some() {
                                app.input_mode = InputMode::Browsing;
                            } else {
                                app.should_quit = true;
                            }
                        }
                        KeyCode::Enter => app.submit_box(),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) => app.push_input(c),
                        _ => {}
                    },
                    InputMode::Browsing => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n' | 'e') | KeyCode::Tab => app.start_editing(),
                        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
