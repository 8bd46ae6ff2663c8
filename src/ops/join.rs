//! Outer join of N two-column key/value files on their first column
//!
//! Input files are headerless and tab-delimited; the first column is the
//! key. The output key order is first-seen order across files in the
//! order the files were given.

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};
use crate::model::{CellValue, Column, Table};

/// Options for [`join_files`]
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// 1-based column to use as the value when a file has more than two
    /// columns; with two-column files the second column is implied
    pub value_column: Option<usize>,
    /// Split each file name on this separator and use the first segment
    /// as the derived column name
    pub filename_separator: Option<String>,
    /// Keys starting with this prefix are excluded from all inputs
    pub ignore_key_prefix: Option<String>,
    /// When present, only these keys survive the join (applied after the
    /// prefix filter)
    pub keep_keys: Option<FxHashSet<String>>,
    /// Token substituted for keys absent from a given file
    pub missing_value: String,
    /// Header name for the key column
    pub key_name: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            value_column: None,
            filename_separator: None,
            ignore_key_prefix: None,
            keep_keys: None,
            missing_value: String::new(),
            key_name: "ID".to_string(),
        }
    }
}

/// Load a key allow-list file: one key per line, blank lines ignored
pub fn load_key_list(path: &Path) -> Result<FxHashSet<String>> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Derive an output column name from a file name: the basename, cut at
/// the first occurrence of `sep` when one is given
fn derived_name(path: &Path, sep: Option<&str>) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match sep {
        Some(s) if !s.is_empty() => base.split(s).next().unwrap_or(base.as_str()).to_string(),
        _ => base,
    }
}

/// Read one key/value file into (key, value) pairs in file order
fn read_key_value_file(path: &Path, value_column: Option<usize>) -> Result<Vec<(String, String)>> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut pairs = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result?;
        let width = record.len();
        let value_idx = match value_column {
            Some(j) => j - 1,
            None if width <= 2 => 1,
            None => {
                return Err(Error::AmbiguousValueColumn {
                    path: path.to_path_buf(),
                    columns: width,
                })
            }
        };
        let key = record.get(0).unwrap_or("").to_string();
        let value = record
            .get(value_idx)
            .ok_or(Error::RaggedTable {
                line: line_num + 1,
                expected: value_idx + 1,
                found: width,
            })?
            .to_string();
        pairs.push((key, value));
    }
    Ok(pairs)
}

/// Outer-join the given files on their shared key column.
///
/// The output has one key column plus one value column per file, named
/// after the file (collisions get a numeric suffix). A key absent from a
/// file contributes the missing-value token. An empty post-filter key set
/// yields a header-only table, not an error. Duplicate keys within one
/// file: the last occurrence wins.
pub fn join_files(paths: &[impl AsRef<Path>], opts: &JoinOptions) -> Result<Table> {
    let mut keys: IndexSet<String> = IndexSet::new();
    let mut maps: Vec<FxHashMap<String, String>> = Vec::with_capacity(paths.len());

    for path in paths {
        let pairs = read_key_value_file(path.as_ref(), opts.value_column)?;
        let mut map = FxHashMap::default();
        for (key, value) in pairs {
            if let Some(prefix) = &opts.ignore_key_prefix {
                if key.starts_with(prefix.as_str()) {
                    continue;
                }
            }
            if let Some(keep) = &opts.keep_keys {
                if !keep.contains(&key) {
                    continue;
                }
            }
            keys.insert(key.clone());
            map.insert(key, value);
        }
        maps.push(map);
    }

    let mut table = Table::from_headers([opts.key_name.clone()]);
    for path in paths {
        let name = table.unique_name(&derived_name(
            path.as_ref(),
            opts.filename_separator.as_deref(),
        ));
        let index = table.column_count();
        table.columns.push(Column::new(name, index));
    }

    for key in &keys {
        let mut row = Vec::with_capacity(maps.len() + 1);
        row.push(CellValue::parse(key));
        for map in &maps {
            match map.get(key) {
                Some(value) => row.push(CellValue::parse(value)),
                None => row.push(CellValue::parse(&opts.missing_value)),
            }
        }
        table.rows.push(row);
    }

    Ok(table)
}
