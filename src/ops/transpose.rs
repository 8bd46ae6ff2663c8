//! Swapping the row and column axes of a rectangular table

use crate::model::{CellValue, Column, Table};

/// Transpose the full grid, header line included: output row `i`,
/// column `j` equals input row `j`, column `i`. The input header becomes
/// the first output column and the input first column becomes the output
/// header. Values are copied as opaque strings.
pub fn transpose(table: &Table) -> Table {
    let in_cols = table.column_count();

    // Output header = input column 0, preceded by the input header's
    // first name.
    let mut headers = Vec::with_capacity(table.row_count() + 1);
    headers.push(
        table
            .columns
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_default(),
    );
    for row in &table.rows {
        headers.push(row.first().map(|c| c.as_str().to_string()).unwrap_or_default());
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .enumerate()
        .map(|(i, name)| Column::new(name, i))
        .collect();

    // One output row per remaining input column.
    let mut rows = Vec::with_capacity(in_cols.saturating_sub(1));
    for j in 1..in_cols {
        let mut out_row = Vec::with_capacity(table.row_count() + 1);
        out_row.push(CellValue::parse(&table.columns[j].name));
        for row in &table.rows {
            out_row.push(row[j].clone());
        }
        rows.push(out_row);
    }

    Table { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::read_table;

    #[test]
    fn test_transpose_swaps_axes() {
        let t = read_table("id\tx\ty\nr1\t1\t2\nr2\t3\t4\n", b'\t').unwrap();
        let out = transpose(&t);
        assert_eq!(
            out.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["id", "r1", "r2"]
        );
        assert_eq!(out.rows[0][0].as_str(), "x");
        assert_eq!(out.rows[0][1].as_str(), "1");
        assert_eq!(out.rows[1][2].as_str(), "4");
    }

    #[test]
    fn test_transpose_is_an_involution() {
        let t = read_table("id\tx\ty\nr1\t1\t2\nr2\t3\t\n", b'\t').unwrap();
        assert_eq!(transpose(&transpose(&t)), t);
    }

    #[test]
    fn test_transpose_single_column() {
        let t = read_table("id\nr1\nr2\n", b'\t').unwrap();
        let out = transpose(&t);
        assert_eq!(out.column_count(), 3);
        assert_eq!(out.row_count(), 0);
    }
}
