//! tab-capture - extract regex captures into a new leading field

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_input};
use tabtools::ops::{capture_lines, compile_pattern, CaptureOptions};

/// Prepend a field with the pattern's captures to every line.
///
/// Every capture group of every non-overlapping match contributes, in
/// order, joined by ';'. Lines the pattern does not match get the
/// missing-value token instead.
#[derive(Parser, Debug)]
#[command(name = "tab-capture")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Regular expression with at least one capture group
    #[arg(short, long)]
    pattern: String,

    /// Token emitted for lines the pattern does not match
    #[arg(short, long, default_value = "")]
    missing_value: String,

    /// Restrict the search to this 1-based field instead of the whole line
    #[arg(short = 'i', long, value_parser = clap::value_parser!(u64).range(1..))]
    idx: Option<u64>,

    /// Field delimiter used with --idx: a single character, '\t', or 'tab'
    #[arg(long, value_parser = parse_delimiter, default_value = "tab")]
    sep: u8,

    /// Drop lines starting with '#'
    #[arg(short = 'c', long, alias = "xc")]
    skip_comments: bool,

    /// Pass the first line through unprocessed
    #[arg(short = 'H', long, alias = "xh")]
    skip_header: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let re = compile_pattern(&cli.pattern)?;
    let text = read_input(cli.file.as_deref())?;
    let opts = CaptureOptions {
        missing_value: cli.missing_value,
        field: cli.idx.map(|i| i as usize),
        delimiter: cli.sep,
        skip_comments: cli.skip_comments,
        skip_header: cli.skip_header,
    };

    let stdout = std::io::stdout();
    capture_lines(&re, &text, &opts, stdout.lock())?;
    Ok(())
}
