//! Row-wise concatenation of two columns into a new column

use crate::error::Result;
use crate::model::{CellValue, ColumnSelector, Table};

/// Options for [`merge_columns`]
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Separator placed between the two values
    pub separator: String,
    /// Output column name; defaults to `<a>_<b>`
    pub name: Option<String>,
    /// Drop the source columns after merging
    pub drop_sources: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            separator: ":".to_string(),
            name: None,
            drop_sources: false,
        }
    }
}

/// Concatenate columns `a` and `b` into a new column.
///
/// The merged column is inserted at the position of column `a`. When the
/// chosen name collides with an existing column, a numeric suffix is
/// appended.
pub fn merge_columns(
    table: &mut Table,
    a: &ColumnSelector,
    b: &ColumnSelector,
    opts: &MergeOptions,
) -> Result<()> {
    let ia = a.resolve(table)?;
    let ib = b.resolve(table)?;

    let merged: Vec<CellValue> = table
        .rows
        .iter()
        .map(|row| {
            CellValue::from(format!(
                "{}{}{}",
                row[ia].as_str(),
                opts.separator,
                row[ib].as_str()
            ))
        })
        .collect();

    let desired = match &opts.name {
        Some(name) => name.clone(),
        None => format!("{}_{}", table.columns[ia].name, table.columns[ib].name),
    };

    let mut insert_at = ia;
    if opts.drop_sources {
        let mut to_remove = vec![ia, ib];
        to_remove.sort_unstable();
        to_remove.dedup();
        for &idx in to_remove.iter().rev() {
            table.remove_column(idx);
        }
        insert_at = ia - to_remove.iter().filter(|&&idx| idx < ia).count();
    }

    let name = table.unique_name(&desired);
    table.insert_column(insert_at, name, merged);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Table {
        let mut t = Table::from_headers(["chr", "pos", "gene"]);
        t.add_row(vec!["1".into(), "100".into(), "tp53".into()], 2)
            .unwrap();
        t.add_row(vec!["2".into(), "200".into(), "brca1".into()], 3)
            .unwrap();
        t
    }

    #[test]
    fn test_merge_retains_sources_by_default() {
        let mut t = sample();
        merge_columns(
            &mut t,
            &ColumnSelector::Name("chr".into()),
            &ColumnSelector::Name("pos".into()),
            &MergeOptions::default(),
        )
        .unwrap();
        assert_eq!(
            t.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["chr_pos", "chr", "pos", "gene"]
        );
        assert_eq!(t.rows[0][0].as_str(), "1:100");
    }

    #[test]
    fn test_merge_drops_sources() {
        let mut t = sample();
        let opts = MergeOptions {
            drop_sources: true,
            separator: "-".to_string(),
            ..Default::default()
        };
        merge_columns(
            &mut t,
            &ColumnSelector::Index(1),
            &ColumnSelector::Index(2),
            &opts,
        )
        .unwrap();
        assert_eq!(
            t.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            vec!["chr_pos", "gene"]
        );
        assert_eq!(t.rows[1][0].as_str(), "2-200");
    }

    #[test]
    fn test_merge_name_collision_gets_suffix() {
        let mut t = sample();
        let opts = MergeOptions {
            name: Some("gene".to_string()),
            ..Default::default()
        };
        merge_columns(
            &mut t,
            &ColumnSelector::Index(1),
            &ColumnSelector::Index(2),
            &opts,
        )
        .unwrap();
        assert_eq!(t.columns[0].name, "gene_1");
    }

    #[test]
    fn test_merge_unknown_column_fails() {
        let mut t = sample();
        let err = merge_columns(
            &mut t,
            &ColumnSelector::Name("nope".into()),
            &ColumnSelector::Index(1),
            &MergeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(_)));
    }
}
