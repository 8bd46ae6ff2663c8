//! tab-group - collapse rows sharing a first-column key

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_input};
use tabtools::ops::{group_rows, GroupOptions};

/// Collapse rows by their first field into `key <TAB> count <TAB> values`
#[derive(Parser, Debug)]
#[command(name = "tab-group")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Retain duplicate values instead of collapsing them
    #[arg(short = 'd', long)]
    keep_duplicates: bool,

    /// Pass the first line through unprocessed
    #[arg(short = 'H', long)]
    header: bool,

    /// Field delimiter: a single character, '\t', or 'tab'
    #[arg(long, value_parser = parse_delimiter, default_value = "tab")]
    sep: u8,
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

    let text = read_input(cli.file.as_deref())?;
    let opts = GroupOptions {
        keep_duplicates: cli.keep_duplicates,
        has_header: cli.header,
        delimiter: cli.sep,
    };

    let stdout = std::io::stdout();
    group_rows(&text, &opts, stdout.lock())?;
    Ok(())
}
