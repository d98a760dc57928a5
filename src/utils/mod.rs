//! Utils - Formatting and Configuration Storage

pub mod config_store;
pub mod format;
