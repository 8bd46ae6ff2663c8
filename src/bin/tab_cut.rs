//! tab-cut - keep or drop a subset of columns

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_table_from, write_table_stdout};
use tabtools::model::ColumnSelector;
use tabtools::ops::{cut_by_pattern, cut_columns};

/// Keep only the selected columns, or drop them with --invert
#[derive(Parser, Debug)]
#[command(name = "tab-cut")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Comma-separated columns to keep (1-based indices or header names)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    columns: Vec<ColumnSelector>,

    /// Keep columns whose header matches this pattern instead
    #[arg(short, long)]
    pattern: Option<String>,

    /// Treat the pattern as a regular expression (default: literal substring)
    #[arg(long, requires = "pattern")]
    regex: bool,

    /// Drop the selected columns instead of keeping them
    #[arg(short = 'v', long)]
    invert: bool,

    /// Field delimiter: a single character, '\t', or 'tab' [default: auto-detect]
    #[arg(long, value_parser = parse_delimiter)]
    sep: Option<u8>,
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

    let (mut table, delimiter) = read_table_from(cli.file.as_deref(), cli.sep)?;
    match &cli.pattern {
        Some(pattern) => cut_by_pattern(&mut table, pattern, cli.regex, cli.invert)?,
        None => cut_columns(&mut table, &cli.columns, cli.invert)?,
    }
    if table.column_count() == 0 {
        eprintln!("[warning] no columns selected; output is empty");
    }
    write_table_stdout(&table, delimiter)?;
    Ok(())
}
