//! tabtools - small utilities for delimited text tables
//!
//! A collection of independent command-line transformations over
//! tab/comma-separated tables (merge, move, transpose, join, capture,
//! group), designed to be composed via pipes. Each binary reads a whole
//! input, applies one transformation, and writes a delimited table to
//! stdout.

pub mod error;
pub mod io;
pub mod model;
pub mod ops;

pub use error::{Error, Result};
pub use model::Table;
