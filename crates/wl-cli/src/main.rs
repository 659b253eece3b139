use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wl_core::{DEFAULT_MAX_WORD_LEN, OversizePolicy, WordLimits, run_session};

#[derive(Parser)]
#[command(
    name = "wl",
    about = "Tally words from stdin until 'end', print the sorted list, then look words up"
)]
struct Cli {
    /// Longest accepted word, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN, value_parser = parse_word_len)]
    max_word_len: usize,

    /// What to do with words longer than --max-word-len
    #[arg(long, value_enum, default_value_t = Oversize::Truncate)]
    oversize: Oversize,

    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Oversize {
    /// Keep the leading characters
    Truncate,
    /// Stop with an error (exit status 2)
    Reject,
}

impl From<Oversize> for OversizePolicy {
    fn from(o: Oversize) -> Self {
        match o {
            Oversize::Truncate => OversizePolicy::Truncate,
            Oversize::Reject => OversizePolicy::Reject,
        }
    }
}

fn parse_word_len(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let limits = WordLimits::new(cli.max_word_len, cli.oversize.into());
    tracing::debug!(max_len = limits.max_len, policy = ?limits.policy, "starting session");

    let stdin = io::stdin().lock();
    let mut stdout = io::BufWriter::new(io::stdout().lock());

    let summary = run_session(stdin, &mut stdout, &limits).context("session failed")?;

    if cli.verbose {
        eprintln!(
            "--- stats: tallied={}, distinct={}, found={}, ended_by={:?} ---",
            summary.tallied, summary.distinct_words, summary.found, summary.ended_by
        );
    }
    Ok(())
}

/// Input validation failures exit 2, everything else 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<wl_core::Error>()
        .map_or(1, wl_core::Error::exit_code)
}
