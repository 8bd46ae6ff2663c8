//! tab-join - outer join of N two-column key/value files on the key

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Result};
use clap::Parser;

use tabtools::io::{read_input, write_table_stdout};
use tabtools::ops::{join_files, load_key_list, JoinOptions};

/// Outer-join two-column key/value files on their shared first column.
///
/// Input files are headerless and tab-delimited. The output has one row
/// per key (first-seen order across files), one value column per file
/// named after the file, and a tab-delimited header.
#[derive(Parser, Debug)]
#[command(name = "tab-join")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input key/value files; a single '-' reads the list from stdin,
    /// one path per line
    #[arg(short, long, required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Split each file name on this separator and use the first segment
    /// as the output column name
    #[arg(short = 's', long)]
    sep_in_filename: Option<String>,

    /// 1-based column to take as the value when files have more than two
    /// columns
    #[arg(short = 'j', long, value_parser = clap::value_parser!(u32).range(2..))]
    idx_to_keep: Option<u32>,

    /// Exclude keys starting with this prefix
    #[arg(short = 'i', long)]
    ignore_keys_prefix: Option<String>,

    /// File with one key per line; only these keys survive the join
    #[arg(short = 'k', long)]
    filename_keys: Option<PathBuf>,

    /// Token substituted for keys absent from a file
    #[arg(short = 'm', long, default_value = "")]
    missing_value: String,

    /// Header name for the key column
    #[arg(long, default_value = "ID")]
    key_name: String,
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

    let files: Vec<PathBuf> = if cli.files == [PathBuf::from("-")] {
        read_input(None)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect()
    } else {
        cli.files
    };
    ensure!(files.len() >= 2, "at least two input files are required");

    let keep_keys = cli
        .filename_keys
        .as_deref()
        .map(load_key_list)
        .transpose()?;

    let opts = JoinOptions {
        value_column: cli.idx_to_keep.map(|j| j as usize),
        filename_separator: cli.sep_in_filename,
        ignore_key_prefix: cli.ignore_keys_prefix,
        keep_keys,
        missing_value: cli.missing_value,
        key_name: cli.key_name,
    };

    let table = join_files(&files, &opts)?;
    write_table_stdout(&table, b'\t')?;
    Ok(())
}
