//! DataTable Component
//!
//! A striped table built from column definitions and rows.

pub mod column;
pub mod data_table;

pub use column::{Column, ColumnAlign, ColumnWidth};
pub use data_table::DataTable;
