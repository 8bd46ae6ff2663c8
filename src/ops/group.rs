//! Collapsing rows that share a first-column key

use std::io::Write;

use indexmap::IndexMap;

use crate::error::Result;

/// Options for [`group_rows`]
#[derive(Debug, Clone)]
pub struct GroupOptions {
    /// Retain duplicate values instead of collapsing them
    pub keep_duplicates: bool,
    /// Pass the first line through unprocessed
    pub has_header: bool,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            keep_duplicates: false,
            has_header: false,
            delimiter: b'\t',
        }
    }
}

/// Collapse rows by their first field. Each output line is
/// `key <TAB> count <TAB> values`, where a row's value is its remaining
/// fields joined by `,` and the group's values are joined by `;`.
/// Keys keep first-seen order; without `keep_duplicates` repeated values
/// within a group are dropped (first occurrence kept).
pub fn group_rows<W: Write>(text: &str, opts: &GroupOptions, mut out: W) -> Result<()> {
    let mut lines = text.lines();
    if opts.has_header {
        if let Some(header) = lines.next() {
            writeln!(out, "{}", header)?;
        }
    }
    let sep = opts.delimiter as char;

    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(sep).collect();
        let key = fields[0].to_string();
        let value = fields[1..].join(",");
        let values = groups.entry(key).or_insert_with(Vec::new);
        if opts.keep_duplicates || !values.contains(&value) {
            values.push(value);
        }
    }

    for (key, values) in &groups {
        writeln!(out, "{}\t{}\t{}", key, values.len(), values.join(";"))?;
    }
    Ok(())
}
