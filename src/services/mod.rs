//! Service Layer
//!
//! Narrow interfaces over platform services used by the components.

pub mod clipboard;
