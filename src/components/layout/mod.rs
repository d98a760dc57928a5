//! Layout Components
//!
//! Shell, header, sidebar and event panel of the catalog.

pub mod event_panel;
pub mod header;
pub mod shell;
pub mod sidebar;
