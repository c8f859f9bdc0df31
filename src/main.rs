//! Wordle Optimizer CLI
//!
//! Ranks the next guess from `<GUESS> <FEEDBACK>` pairs, plays single games,
//! or evaluates opening words across the whole dictionary.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use wordle_optimizer::{
    filter_words, Dictionary, HistoryEntry, Simulator, Solver, Strategy, Word,
    DEFAULT_DICTIONARY_PATH,
};

const USAGE: &str = "Usage: wordle-optimizer [OPTIONS] [<GUESS> <FEEDBACK>]...";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Guesses and their feedback, in pairs: `crane 20100`. Feedback digits
    /// are 0 (gray), 1 (yellow) and 2 (green), one per letter
    #[arg(value_name = "GUESS FEEDBACK")]
    history: Vec<String>,

    /// Word list, one five-letter word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// entropy, worst-case, expected-size or optimal
    #[arg(short, long, default_value_t = Strategy::Entropy)]
    strategy: Strategy,

    /// Print at most this many ranked guesses
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Play a full game against this target and print every guess
    #[arg(long, value_name = "TARGET", conflicts_with_all = ["history", "evaluate"])]
    play: Option<String>,

    /// Opening word for --play; defaults to the solver's first choice
    #[arg(long, requires = "play")]
    start: Option<String>,

    /// Play every opening word against every target and report move counts
    #[arg(long, conflicts_with = "history")]
    evaluate: bool,

    /// Stop --evaluate after this many opening words
    #[arg(long, value_name = "N", requires = "evaluate")]
    start_words: Option<usize>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn suggest(dictionary: &Dictionary, solver: &dyn Solver, cli: &Cli) -> Result<()> {
    let history = cli
        .history
        .chunks_exact(2)
        .map(|pair| {
            HistoryEntry::parse(&pair[0], &pair[1])
                .with_context(|| format!("invalid pair \"{} {}\"", pair[0], pair[1]))
        })
        .collect::<Result<Vec<_>>>()?;

    let remaining = filter_words(dictionary.words(), &history);
    info!(
        "{} of {} words consistent with {} guesses",
        remaining.len(),
        dictionary.len(),
        history.len()
    );
    if remaining.is_empty() {
        eprintln!("no words match the given feedback");
        return Ok(());
    }

    let ranked = solver.rank(&remaining);
    let shown = cli.top.unwrap_or(ranked.len());
    for guess in ranked.iter().take(shown) {
        println!("{:.4} {}", guess.score, guess.word);
    }
    Ok(())
}

fn play(
    dictionary: &Dictionary,
    solver: &dyn Solver,
    target: &str,
    start: Option<&str>,
) -> Result<()> {
    let target: Word = target.parse().context("invalid target")?;
    let start = match start {
        Some(start) => start.parse::<Word>().context("invalid start word")?,
        None => {
            solver
                .best(dictionary.words())
                .context("solver has no opening guess")?
                .word
        }
    };

    let record = Simulator::new(dictionary, solver).play(&target, start)?;
    for (i, entry) in record.guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, entry.guess, entry.feedback);
    }
    println!("Solved in {} guesses.", record.moves());
    Ok(())
}

fn evaluate(dictionary: &Dictionary, solver: &dyn Solver, limit: Option<usize>) -> Result<()> {
    let reports = Simulator::new(dictionary, solver).evaluate_all_start_words(limit)?;
    for report in reports {
        println!("{} {} {:.4}", report.word, report.worst, report.average);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.history.len() % 2 != 0 {
        eprintln!("{}", USAGE);
        eprintln!("Guesses and feedback must come in pairs.");
        process::exit(1);
    }

    let dictionary = Dictionary::load(&cli.dictionary)
        .with_context(|| format!("could not load dictionary {}", cli.dictionary.display()))?;
    let solver = cli.strategy.solver(&dictionary);

    if cli.evaluate {
        evaluate(&dictionary, solver.as_ref(), cli.start_words)
    } else if let Some(target) = &cli.play {
        play(&dictionary, solver.as_ref(), target, cli.start.as_deref())
    } else {
        suggest(&dictionary, solver.as_ref(), &cli)
    }
}
