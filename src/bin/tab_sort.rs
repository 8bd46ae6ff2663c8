//! tab-sort - sort rows by one or more columns

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_table_from, write_table_stdout};
use tabtools::model::ColumnSelector;
use tabtools::ops::sort_rows;

/// Stable sort of the data rows; numeric cells compare numerically
#[derive(Parser, Debug)]
#[command(name = "tab-sort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Comma-separated columns to sort by, in order of precedence
    /// (1-based indices or header names)
    #[arg(short, long, value_delimiter = ',', required = true)]
    by: Vec<ColumnSelector>,

    /// Sort in descending order
    #[arg(long)]
    desc: bool,

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
    sort_rows(&mut table, &cli.by, cli.desc)?;
    write_table_stdout(&table, delimiter)?;
    Ok(())
}
