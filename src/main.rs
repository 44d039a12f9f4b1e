//! Letter Boxed Solver - CLI
//!
//! Letter Boxed solver with TUI and CLI modes using indexed chain search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_boxed::{
    commands::{
        SolveConfig, analyze_word, load_boxes, run_benchmark, run_simple, solve_box,
    },
    logging::init_logger,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{MAX_CHAIN_WORDS, SolverConfig},
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver: shortest word chains covering every letter on the box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Longest chain to try (1-5)
    #[arg(short = 'm', long, global = true, default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(1..=MAX_CHAIN_WORDS as i64))]
    max_words: u8,

    /// Stop each search stage after this many solutions (0 = unlimited)
    #[arg(short = 'c', long, global = true, default_value_t = 0)]
    cap: usize,

    /// Search starting words in parallel
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple {
        /// Number of ranked chains to print
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },

    /// Solve a specific box
    Solve {
        /// The box, e.g. "abc,def,ghi,jkl"
        letters: String,

        /// Number of ranked chains to print
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,

        /// Show per-stage search statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check whether a word is playable on a box
    Analyze {
        /// The box, e.g. "abc,def,ghi,jkl"
        letters: String,

        /// Word to analyze
        word: String,
    },

    /// Solve every box in a file and report timings
    Benchmark {
        /// File with one box per line
        file: String,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_max_words(usize::from(self.max_words))
            .with_result_cap((self.cap > 0).then_some(self.cap))
            .with_parallel(self.parallel)
    }
}

/// Load the dictionary named by `-w`
fn load_wordlist(path: &str) -> Result<Vec<String>> {
    let words =
        load_from_file(path).with_context(|| format!("Failed to load word list from {path}"))?;
    log::info!("Loaded {} words from {path}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal; only log there when asked to
    if !matches!(command, Commands::Play) || cli.debug {
        init_logger(cli.debug);
    }

    let config = cli.solver_config();
    let dictionary = load_wordlist(&cli.wordlist)?;

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Simple { top } => run_simple(&dictionary, config, top),
        Commands::Solve {
            letters,
            top,
            verbose,
        } => run_solve_command(letters, top, verbose, &dictionary, config),
        Commands::Analyze { letters, word } => run_analyze_command(&letters, &word, &dictionary),
        Commands::Benchmark { file } => run_benchmark_command(&file, &dictionary, config),
    }
}

fn run_solve_command(
    letters: String,
    top: usize,
    verbose: bool,
    dictionary: &[String],
    config: SolverConfig,
) -> Result<()> {
    let solve_config = SolveConfig {
        letters,
        solver: config,
        top,
    };
    let result = solve_box(solve_config, dictionary)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(letters: &str, word: &str, dictionary: &[String]) -> Result<()> {
    let result = analyze_word(letters, word, Some(dictionary))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(file: &str, dictionary: &[String], config: SolverConfig) -> Result<()> {
    let boxes = load_boxes(file)?;
    println!("Running benchmark on {} boxes...", boxes.len());

    let result = run_benchmark(&boxes, dictionary, config, true);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: &[String], config: SolverConfig) -> Result<()> {
    use letter_boxed::interactive::{App, run_tui};

    let app = App::new(dictionary, config);
    run_tui(app)
}
