//! Relocating a single column within the column ordering

use crate::error::Result;
use crate::model::{ColumnSelector, Position, Table};

/// Move `column` so it ends up at position `to`; all other columns keep
/// their relative order. Moving a column to its current position is a
/// no-op.
pub fn move_column(table: &mut Table, column: &ColumnSelector, to: Position) -> Result<()> {
    let from = column.resolve(table)?;
    let to = to.resolve(table.column_count())?;
    if from == to {
        return Ok(());
    }
    let (col, cells) = table.remove_column(from);
    table.insert_column(to, col.name, cells);
    Ok(())
}
