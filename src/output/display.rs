//! Display functions for command results

use super::formatters::{box_diagram, coverage_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{LetterBox, LetterSet};
use crate::solver::SearchStatus;
use colored::Colorize;

fn print_box(letter_box: &LetterBox, covered: LetterSet) {
    let lines = box_diagram(letter_box, |c| {
        let letter = c.to_ascii_uppercase().to_string();
        if covered.contains(c) {
            letter.green().bold().to_string()
        } else {
            letter.bright_black().to_string()
        }
    });
    for line in lines {
        println!("  {line}");
    }
}

/// Print the result of solving a box
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.letter_box.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let covered = result
        .report
        .best()
        .map_or(LetterSet::EMPTY, |best| best.covered());
    println!();
    print_box(&result.letter_box, covered);

    println!("\n📖 {} valid words", result.report.valid_words);

    if verbose {
        for stage in &result.report.stages {
            let status = match stage.status {
                SearchStatus::Exhausted => "exhausted".normal(),
                SearchStatus::CapReached => "cap reached".yellow(),
            };
            println!(
                "  ≤{} words: {} solutions ({}) | {} expanded, {} pruned | {:.3}s",
                stage.max_words,
                stage.solutions_found,
                status,
                stage.stats.expanded,
                stage.stats.pruned,
                stage.elapsed.as_secs_f64()
            );
        }
    }

    println!();
    match result.report.best() {
        Some(best) => {
            println!(
                "{}",
                format!(
                    "✅ {} ({} words, {} letters)",
                    best.to_string().to_uppercase(),
                    best.word_count(),
                    best.total_letters()
                )
                .green()
                .bold()
            );
            for (i, solution) in result.report.ranked.iter().enumerate().skip(1) {
                println!(
                    "   {}. {} ({} letters)",
                    i + 1,
                    solution.to_string().to_uppercase(),
                    solution.total_letters()
                );
            }
        }
        None => {
            let searched = result.report.stages.last().map_or(0, |s| s.max_words);
            println!(
                "{}",
                format!("❌ No solution within {searched} words").red().bold()
            );
        }
    }

    println!("\n⏱  Solved in {:.3}s", result.duration.as_secs_f64());
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!();
    print_box(&result.letter_box, result.covered);
    println!();

    match &result.verdict {
        Ok(()) => println!("   Playable:    {}", "yes".green().bold()),
        Err(reason) => println!("   Playable:    {} ({reason})", "no".red().bold()),
    }

    let bar = coverage_bar(result.covered, &result.letter_box, 24);
    println!(
        "   Coverage:    [{}] {}",
        bar.green(),
        format!(
            "{}/{}",
            result.covered.len(),
            result.letter_box.unique_letters().len()
        )
        .bright_yellow()
    );
    if !result.missing.is_empty() {
        println!(
            "   Missing:     {}",
            result.missing.to_string().to_uppercase()
        );
    }
    if let Some(listed) = result.in_dictionary {
        println!("   In wordlist: {}", if listed { "yes" } else { "no" });
    }
    if let Some(followers) = result.followers {
        println!("   Followers:   {followers} words can come next");
    }
    if result.is_single_word_solution() {
        println!("\n{}", "🎯 Single-word solution!".green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boxes tested:     {}", result.total_boxes);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Unsolved:         {}",
        format!("{}", result.unsolved.len()).yellow()
    );
    println!(
        "   Average letters:  {}",
        format!("{:.2}", result.average_letters)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boxes/second:     {:.1}", result.boxes_per_second);
    if let Some((letter_box, elapsed)) = &result.slowest {
        println!(
            "   Slowest:          {} ({:.3}s)",
            letter_box.to_string().to_uppercase(),
            elapsed.as_secs_f64()
        );
    }

    if result.solved > 0 {
        println!("\n📈 {}", "Words per chain:".bright_cyan().bold());
        let longest = result.distribution.keys().copied().max().unwrap_or(0);
        for words in 1..=longest {
            if let Some(&count) = result.distribution.get(&words) {
                let pct = (count as f64 / result.solved as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░"
                        .repeat(40_usize.saturating_sub(bar_width))
                        .bright_black()
                );
                println!("   {words}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }

    for letter_box in &result.unsolved {
        println!(
            "   {} {}",
            "✗".red(),
            letter_box.to_string().to_uppercase()
        );
    }
}
