//! Features - Vertical Feature Slices
//!
//! Each feature contains its components and their local logic.

pub mod pricing;
