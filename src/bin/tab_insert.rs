//! tab-insert - insert a constant-valued column

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_table_from, write_table_stdout};
use tabtools::model::Position;
use tabtools::ops::insert_value_column;

/// Insert a new column filled with a constant value
#[derive(Parser, Debug)]
#[command(name = "tab-insert")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Insertion position: a 0-based index (up to the column count,
    /// which appends), 'first', or 'last'
    #[arg(short = 't', long, default_value = "last")]
    at: Position,

    /// Value for every cell of the new column; supports \t, \n, \r, \\
    #[arg(short, long)]
    value: String,

    /// Header name for the new column
    #[arg(short, long, default_value = "new_column")]
    name: String,

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
    insert_value_column(&mut table, cli.at, &cli.name, &cli.value)?;
    write_table_stdout(&table, delimiter)?;
    Ok(())
}
