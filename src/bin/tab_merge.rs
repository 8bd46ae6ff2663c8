//! tab-merge - concatenate two columns row-wise into a new column

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tabtools::io::{parse_delimiter, read_table_from, write_table_stdout};
use tabtools::model::ColumnSelector;
use tabtools::ops::{merge_columns, MergeOptions};

/// Concatenate two columns row-wise into a new column
#[derive(Parser, Debug)]
#[command(name = "tab-merge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to read from ('-' or absent for stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// First column to merge (1-based index or header name)
    #[arg(short = 'a', long)]
    col_a: ColumnSelector,

    /// Second column to merge (1-based index or header name)
    #[arg(short = 'b', long)]
    col_b: ColumnSelector,

    /// Separator placed between the two values
    #[arg(short = 's', long, default_value = ":")]
    merge_sep: String,

    /// Name of the merged column [default: <col-a>_<col-b>]
    #[arg(short, long)]
    name: Option<String>,

    /// Drop the source columns after merging
    #[arg(short, long)]
    drop: bool,

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
    let opts = MergeOptions {
        separator: cli.merge_sep,
        name: cli.name,
        drop_sources: cli.drop,
    };
    merge_columns(&mut table, &cli.col_a, &cli.col_b, &opts)?;
    write_table_stdout(&table, delimiter)?;
    Ok(())
}
