//! The single transformation behind each utility

mod capture;
mod cut;
mod group;
mod insert;
mod join;
mod merge;
mod move_col;
mod sort;
mod transpose;

pub use capture::{capture_fields, capture_lines, compile_pattern, CaptureOptions};
pub use cut::{cut_by_pattern, cut_columns};
pub use group::{group_rows, GroupOptions};
pub use insert::insert_value_column;
pub use join::{join_files, load_key_list, JoinOptions};
pub use merge::{merge_columns, MergeOptions};
pub use move_col::move_column;
pub use sort::sort_rows;
pub use transpose::transpose;
