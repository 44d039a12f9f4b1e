//! TUI rendering with ratatui
//!
//! Panels for the box, ranked solutions, search stages, and messages.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::box_diagram;
use crate::solver::SearchStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Box and stages
            Constraint::Percentage(60), // Solutions and messages
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTER BOXED SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Box
            Constraint::Length(3), // Efficiency gauge
            Constraint::Min(4),    // Stages
        ])
        .split(area);

    render_box(f, app, chunks[0]);
    render_efficiency(f, app, chunks[1]);
    render_stages(f, app, chunks[2]);
}

/// Covered letters are drawn uppercase by the diagram and coloured here
fn styled_line(text: &str) -> Line<'static> {
    let spans: Vec<Span<'static>> = text
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else if c.is_ascii_lowercase() {
                Span::styled(
                    c.to_ascii_uppercase().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::raw(c.to_string())
            }
        })
        .collect();
    Line::from(spans)
}

fn render_box(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Box ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(solved) = &app.current else {
        f.render_widget(Paragraph::new("No box yet").block(block), area);
        return;
    };

    let covered = app.covered_letters();
    let lines: Vec<Line> = box_diagram(&solved.letter_box, |c| {
        if covered.contains(c) {
            c.to_ascii_uppercase().to_string()
        } else {
            c.to_string()
        }
    })
    .iter()
    .map(|line| styled_line(line))
    .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_efficiency(f: &mut Frame, app: &App, area: Rect) {
    let (percent, label) = match (app.selected_solution(), &app.current) {
        (Some(solution), Some(solved)) => {
            let unique = solved.letter_box.unique_letters().len();
            let total = solution.total_letters().max(1);
            (
                (unique * 100 / total).min(100) as u16,
                format!("{unique} letters in {total} typed"),
            )
        }
        _ => (0, "no chain selected".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Efficiency ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_stages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.current.as_ref().map_or_else(Vec::new, |solved| {
        let mut items = vec![ListItem::new(format!(
            "{} valid words, {:.3}s",
            solved.report.valid_words,
            solved.elapsed.as_secs_f64()
        ))];
        items.extend(solved.report.stages.iter().map(|stage| {
            let (status, color) = match stage.status {
                SearchStatus::Exhausted => ("done", Color::White),
                SearchStatus::CapReached => ("capped", Color::Yellow),
            };
            ListItem::new(format!(
                "≤{} words: {} found ({status}), {} pruned",
                stage.max_words, stage.solutions_found, stage.stats.pruned
            ))
            .style(Style::default().fg(color))
        }));
        items
    });

    let stages =
        List::new(items).block(Block::default().title(" Search ").borders(Borders::ALL));
    f.render_widget(stages, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Solutions
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    render_solutions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_solutions(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let offset = app.selected.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = app.current.as_ref().map_or_else(Vec::new, |solved| {
        solved
            .report
            .ranked
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, solution)| {
                let content = format!(
                    "{:>3}. {} [{} letters]",
                    i + 1,
                    solution.to_string().to_uppercase(),
                    solution.total_letters()
                );
                let style = if i == app.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(content).style(style)
            })
            .collect()
    });

    let title = format!(" Solutions ({}) ", app.solution_count());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Editing => (
            " Enter Box (four sides, e.g. abc,def,ghi,jkl) | Enter to solve ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Browsing => (
            " ↑/↓ to browse | n: new box | q: quit ",
            "",
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Editing => "Mode: Editing",
        InputMode::Browsing => "Mode: Browsing",
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Solved: {} | Unsolved: {}",
        app.stats.boxes_solved, app.stats.boxes_unsolved
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let recent: Vec<String> = app
        .history
        .iter()
        .rev()
        .take(3)
        .map(|entry| match &entry.best {
            Some(best) => format!("{}: {best}", entry.letters),
            None => format!("{} ✗ ({} words)", entry.letters, entry.valid_words),
        })
        .collect();
    f.render_widget(
        Paragraph::new(recent.join(" | "))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
