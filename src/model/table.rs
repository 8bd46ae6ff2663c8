//! Table, Column, and Cell data structures

use std::borrow::Cow;

use crate::error::{Error, Result};

/// A single cell: either a value or an explicit absence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellValue {
    Missing,
    Str(String),
}

impl CellValue {
    /// Check if the cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Borrow the cell text; missing cells read as the empty string
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Missing => "",
            CellValue::Str(s) => s,
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    /// Parse a raw field; an empty field is a missing cell
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Str(s.to_string())
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::parse(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Str(s)
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (from header)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

/// An in-memory rectangular table: ordered named columns over string cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create a new empty table with column definitions
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from header names
    pub fn from_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();
        Self::new(columns)
    }

    /// Add a row, enforcing the rectangular invariant.
    ///
    /// `source_line` is the 1-indexed line number in the source file, used
    /// only for the error message.
    pub fn add_row(&mut self, cells: Vec<CellValue>, source_line: usize) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(Error::RaggedTable {
                line: source_line,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Remove a column, returning its definition and cells
    pub fn remove_column(&mut self, index: usize) -> (Column, Vec<CellValue>) {
        let column = self.columns.remove(index);
        let cells = self.rows.iter_mut().map(|row| row.remove(index)).collect();
        self.reindex();
        (column, cells)
    }

    /// Insert a column at `index`; `cells` must have one entry per row
    pub fn insert_column(&mut self, index: usize, name: impl Into<String>, cells: Vec<CellValue>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        self.columns.insert(index, Column::new(name, index));
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row.insert(index, cell);
        }
        self.reindex();
    }

    /// Pick a column name that does not collide with existing ones.
    ///
    /// Appends `_1`, `_2`, ... to `desired` until the name is unique.
    pub fn unique_name(&self, desired: &str) -> String {
        if self.column_index(desired).is_none() {
            return desired.to_string();
        }
        let mut i = 1;
        loop {
            let candidate = format!("{}_{}", desired, i);
            if self.column_index(&candidate).is_none() {
                return candidate;
            }
            i += 1;
        }
    }

    fn reindex(&mut self) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.index = i;
        }
    }
}
