//! Sorting rows by one or more columns

use std::cmp::Ordering;

use crate::error::Result;
use crate::model::{CellValue, ColumnSelector, Table};

/// Stable sort of the rows by the given columns, in order of precedence.
/// Cells that both parse as numbers compare numerically, anything else
/// compares lexicographically.
pub fn sort_rows(table: &mut Table, by: &[ColumnSelector], descending: bool) -> Result<()> {
    let indices: Vec<usize> = by
        .iter()
        .map(|selector| selector.resolve(table))
        .collect::<Result<_>>()?;

    table.rows.sort_by(|a, b| {
        let mut ord = Ordering::Equal;
        for &i in &indices {
            ord = compare_cells(&a[i], &b[i]);
            if ord != Ordering::Equal {
                break;
            }
        }
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    Ok(())
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_str().parse::<f64>(), b.as_str().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.as_str().cmp(b.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::io::read_table;

    fn keys(t: &Table, col: usize) -> Vec<&str> {
        t.rows.iter().map(|r| r[col].as_str()).collect()
    }

    #[test]
    fn test_sort_numeric_not_lexicographic() {
        let mut t = read_table("id\tn\na\t10\nb\t9\nc\t100\n", b'\t').unwrap();
        sort_rows(&mut t, &[ColumnSelector::Name("n".into())], false).unwrap();
        assert_eq!(keys(&t, 1), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_sort_strings_lexicographic() {
        let mut t = read_table("id\tn\nb\tx\na\ty\n", b'\t').unwrap();
        sort_rows(&mut t, &[ColumnSelector::Index(1)], false).unwrap();
        assert_eq!(keys(&t, 0), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut t = read_table("id\tn\na\t1\nb\t2\n", b'\t').unwrap();
        sort_rows(&mut t, &[ColumnSelector::Name("n".into())], true).unwrap();
        assert_eq!(keys(&t, 0), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_multi_column_is_stable() {
        let mut t =
            read_table("g\tn\tid\nx\t2\tr1\nx\t1\tr2\ny\t1\tr3\nx\t1\tr4\n", b'\t').unwrap();
        sort_rows(
            &mut t,
            &[
                ColumnSelector::Name("g".into()),
                ColumnSelector::Name("n".into()),
            ],
            false,
        )
        .unwrap();
        // r2 stays ahead of r4 within the (x, 1) group.
        assert_eq!(keys(&t, 2), vec!["r2", "r4", "r1", "r3"]);
    }

    #[test]
    fn test_sort_unknown_column_fails() {
        let mut t = read_table("id\tn\na\t1\n", b'\t').unwrap();
        let err = sort_rows(&mut t, &[ColumnSelector::Name("nope".into())], false).unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(_)));
    }
}
