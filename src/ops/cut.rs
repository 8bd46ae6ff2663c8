//! Keeping or dropping a subset of columns

use regex::Regex;

use crate::error::Result;
use crate::model::{ColumnSelector, Table};

/// Keep only the listed columns (or drop them when `invert` is set),
/// preserving the original column order
pub fn cut_columns(table: &mut Table, columns: &[ColumnSelector], invert: bool) -> Result<()> {
    let mut mask = vec![false; table.column_count()];
    for selector in columns {
        mask[selector.resolve(table)?] = true;
    }
    retain(table, &mask, invert);
    Ok(())
}

/// Keep only the columns whose name matches `pattern` (or drop them when
/// `invert` is set). The pattern is a literal substring unless `regex` is
/// set. No matching column yields an empty table, not an error.
pub fn cut_by_pattern(table: &mut Table, pattern: &str, regex: bool, invert: bool) -> Result<()> {
    let mask: Vec<bool> = if regex {
        let re = Regex::new(pattern)?;
        table
            .columns
            .iter()
            .map(|c| re.is_match(&c.name))
            .collect()
    } else {
        table
            .columns
            .iter()
            .map(|c| c.name.contains(pattern))
            .collect()
    };
    retain(table, &mask, invert);
    Ok(())
}

fn retain(table: &mut Table, mask: &[bool], invert: bool) {
    for idx in (0..mask.len()).rev() {
        if mask[idx] == invert {
            table.remove_column(idx);
        }
    }
    if table.column_count() == 0 {
        table.rows.clear();
    }
}
