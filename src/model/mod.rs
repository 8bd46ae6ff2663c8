//! Data model for tabular data representation

mod select;
mod table;

pub use select::{ColumnSelector, Position};
pub use table::{CellValue, Column, Table};
