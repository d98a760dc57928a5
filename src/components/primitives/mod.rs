//! Primitive Components
//!
//! Basic building blocks like buttons, inputs, etc.

pub mod button;
pub mod input_text;
pub mod select;
