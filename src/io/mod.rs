//! Delimited-text reading and writing
//!
//! All utilities read whole inputs into memory, transform, and write once;
//! there is no streaming mode.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{CellValue, Table};

/// Parse a `--sep` argument into a single-byte delimiter.
///
/// Accepts a literal single character plus the spellings `\t` and `tab`
/// for a tab, which shells make awkward to pass directly.
pub fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s {
        "\\t" | "\t" | "tab" => Ok(b'\t'),
        _ => {
            let bytes = s.as_bytes();
            if bytes.len() == 1 {
                Ok(bytes[0])
            } else {
                Err(format!("delimiter must be a single character: '{}'", s))
            }
        }
    }
}

/// Guess the delimiter from the first line: tab wins over comma
pub fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Read a whole input into memory; `None` or `-` means stdin
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).map_err(|source| Error::FileNotFound {
                path: p.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parse delimited text into a table; the first line is the header.
///
/// Every data row must match the header width, else `RaggedTable`.
pub fn read_table(text: &str, delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut table = Table::from_headers(headers.iter());

    for (line_num, result) in reader.records().enumerate() {
        let record = result?;
        let cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        // +2 for 1-indexing and the header line
        table.add_row(cells, line_num + 2)?;
    }

    Ok(table)
}

/// Read a table from a file path or stdin, sniffing the delimiter when
/// none is given. Returns the table and the delimiter used, so output can
/// stay in the same delimiter family.
pub fn read_table_from(path: Option<&Path>, delimiter: Option<u8>) -> Result<(Table, u8)> {
    let text = read_input(path)?;
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&text));
    let table = read_table(&text, delimiter)?;
    Ok((table, delimiter))
}

/// Serialize a table to a writer, header row first. A table without
/// columns writes nothing.
pub fn write_table<W: Write>(table: &Table, delimiter: u8, writer: W) -> Result<()> {
    if table.column_count() == 0 {
        return Ok(());
    }
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    out.write_record(table.columns.iter().map(|c| c.name.as_str()))?;
    for row in &table.rows {
        out.write_record(row.iter().map(|c| c.as_str()))?;
    }
    out.flush()?;
    Ok(())
}

/// Serialize a table to stdout
pub fn write_table_stdout(table: &Table, delimiter: u8) -> Result<()> {
    let stdout = std::io::stdout();
    write_table(table, delimiter, stdout.lock())
}
