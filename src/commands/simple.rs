//! Simple interactive CLI mode
//!
//! Text-based prompt loop without the TUI: read a box, print the best chains.

use crate::core::LetterBox;
use crate::solver::{CandidateIndex, Solver, SolverConfig, check_word};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(dictionary: &[String], config: SolverConfig, top: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), dictionary, config, top)
}

/// Prompt loop over arbitrary reader/writer
///
/// Commands: a box (`abc,def,ghi,jkl`) solves it, `check <word>` validates a
/// word against the last box, `quit` exits. End of input also exits.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    dictionary: &[String],
    config: SolverConfig,
    top: usize,
) -> Result<()> {
    writeln!(output, "Letter Boxed Solver - Interactive Mode")?;
    writeln!(output, "Enter a box as four sides (e.g. 'abc,def,ghi,jkl'),")?;
    writeln!(output, "'check <word>' to test a word, or 'quit' to exit.\n")?;

    let solver = Solver::new(config);
    let mut current: Option<(LetterBox, CandidateIndex)> = None;
    let mut line = String::new();

    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }
        let command = line.trim();

        match command {
            "" => {}
            "quit" | "exit" | "q" => break,
            _ if command.starts_with("check ") => {
                let word = command["check ".len()..].trim().to_ascii_lowercase();
                match &current {
                    Some((letter_box, index)) => match check_word(&word, letter_box) {
                        Ok(()) if index.contains(&word) => {
                            writeln!(output, "✓ {word} is playable")?;
                        }
                        Ok(()) => writeln!(output, "✓ {word} is playable (not in word list)")?,
                        Err(reason) => writeln!(output, "✗ {word}: {reason}")?,
                    },
                    None => writeln!(output, "Enter a box first.")?,
                }
            }
            _ => match command.parse::<LetterBox>() {
                Ok(letter_box) => {
                    let index = CandidateIndex::build(dictionary, &letter_box);
                    let report = solver.solve_indexed(&index, &letter_box);

                    writeln!(output, "{} valid words", report.valid_words)?;
                    match report.best() {
                        Some(best) => {
                            writeln!(
                                output,
                                "Best: {best} ({} words, {} letters)",
                                best.word_count(),
                                best.total_letters()
                            )?;
                            for (rank, solution) in
                                report.ranked.iter().enumerate().skip(1).take(top.saturating_sub(1))
                            {
                                writeln!(output, "  {}. {solution}", rank + 1)?;
                            }
                        }
                        None => writeln!(
                            output,
                            "No solution within {} words",
                            solver.config().max_words
                        )?,
                    }
                    current = Some((letter_box, index));
                }
                Err(e) => writeln!(output, "Invalid box: {e}")?,
            },
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn session(input: &str) -> String {
        let dictionary = words_from_slice(&["adgjbeh", "hkcfil", "adgjbehk", "kcfil"]);
        let mut output = Vec::new();
        run_session(
            input.as_bytes(),
            &mut output,
            &dictionary,
            SolverConfig::default(),
            3,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn solves_entered_box() {
        let output = session("abc,def,ghi,jkl\nquit\n");
        assert!(output.contains("4 valid words"));
        assert!(output.contains("Best: adgjbeh → hkcfil (2 words, 13 letters)"));
        assert!(output.contains("2. adgjbehk → kcfil"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn reports_invalid_box() {
        let output = session("abc,def\n");
        assert!(output.contains("Invalid box: Box must have exactly 4 sides, got 2"));
    }

    #[test]
    fn check_requires_box() {
        let output = session("check adg\n");
        assert!(output.contains("Enter a box first."));
    }

    #[test]
    fn check_word_against_box() {
        let output = session("abc,def,ghi,jkl\ncheck hkcfil\ncheck adgj\ncheck face\n");
        assert!(output.contains("✓ hkcfil is playable\n"));
        assert!(output.contains("✓ adgj is playable (not in word list)"));
        assert!(output.contains("✗ face: Letters 2 and 3 are on the same side"));
    }

    #[test]
    fn unsolvable_box() {
        let output = session("mno,pqr,stu,vwx\n");
        assert!(output.contains("No solution within 2 words"));
    }
}
