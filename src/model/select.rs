//! Resolving user-supplied column identifiers and positions

use crate::error::{Error, Result};
use crate::model::Table;

/// A column identifier from the command line: a 1-based position or a
/// header name. Numeric strings are always read as positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl ColumnSelector {
    /// Resolve to a 0-based column index in `table`
    pub fn resolve(&self, table: &Table) -> Result<usize> {
        match self {
            ColumnSelector::Index(i) => {
                if *i >= 1 && *i <= table.column_count() {
                    Ok(i - 1)
                } else {
                    Err(Error::ColumnNotFound(i.to_string()))
                }
            }
            ColumnSelector::Name(name) => table
                .column_index(name)
                .ok_or_else(|| Error::ColumnNotFound(name.clone())),
        }
    }
}

impl std::str::FromStr for ColumnSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(i) => Ok(ColumnSelector::Index(i)),
            Err(_) => Ok(ColumnSelector::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnSelector::Index(i) => write!(f, "{}", i),
            ColumnSelector::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A target position for column relocation: a 0-based final index, or one
/// of the anchors `first` / `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Last,
    Index(usize),
}

impl Position {
    /// Resolve to a 0-based final index for a table with `column_count`
    /// columns
    pub fn resolve(&self, column_count: usize) -> Result<usize> {
        match self {
            Position::First => Ok(0),
            Position::Last => Ok(column_count.saturating_sub(1)),
            Position::Index(i) => {
                if *i < column_count {
                    Ok(*i)
                } else {
                    Err(Error::InvalidPosition {
                        position: *i,
                        column_count,
                    })
                }
            }
        }
    }

    /// Resolve to an insertion index in `[0, column_count]`; `last`
    /// appends after the current columns
    pub fn resolve_insertion(&self, column_count: usize) -> Result<usize> {
        match self {
            Position::First => Ok(0),
            Position::Last => Ok(column_count),
            Position::Index(i) => {
                if *i <= column_count {
                    Ok(*i)
                } else {
                    Err(Error::InvalidPosition {
                        position: *i,
                        column_count: column_count + 1,
                    })
                }
            }
        }
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "first" => Ok(Position::First),
            "last" => Ok(Position::Last),
            _ => s
                .parse::<usize>()
                .map(Position::Index)
                .map_err(|_| format!("expected a 0-based index, 'first', or 'last': '{}'", s)),
        }
    }
}
