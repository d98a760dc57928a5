//! Composite Components
//!
//! Components built from primitives: tables and cards.

pub mod card;
pub mod data_table;
