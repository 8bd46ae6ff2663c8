//! tab-move - relocate a single column to a new position

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_table_from, write_table_stdout};
use tabtools::model::{ColumnSelector, Position};
use tabtools::ops::move_column;

/// Move a column to a new position; other columns keep their relative order
#[derive(Parser, Debug)]
#[command(name = "tab-move")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Column to move (1-based index or header name)
    #[arg(short, long)]
    column: ColumnSelector,

    /// Target position: a 0-based final index, 'first', or 'last'
    #[arg(short, long)]
    to: Position,

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
    move_column(&mut table, &cli.column, cli.to)?;
    write_table_stdout(&table, delimiter)?;
    Ok(())
}
