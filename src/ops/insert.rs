//! Inserting a constant-valued column

use crate::error::Result;
use crate::model::{CellValue, Position, Table};

/// Insert a new column filled with `value` at `at`. The value supports
/// the escape sequences `\t`, `\n`, `\r`, and `\\`. Name collisions get a
/// numeric suffix.
pub fn insert_value_column(table: &mut Table, at: Position, name: &str, value: &str) -> Result<()> {
    let at = at.resolve_insertion(table.column_count())?;
    let name = table.unique_name(name);
    let value = unescape(value);
    let cells = vec![CellValue::parse(&value); table.row_count()];
    table.insert_column(at, name, cells);
    Ok(())
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
