//! UI Constants
//!
//! Centralized constants for layout breakpoints and timings.

/// Above this container width the pricing table switches to the table layout
pub const PRICING_TABLE_BREAKPOINT: f32 = 550.0;

/// From this container width the estimation recap is laid out on one row
pub const ESTIMATION_RECAP_BREAKPOINT: f32 = 600.0;

/// How long the copy confirmation icon stays visible
pub const COPY_CONFIRMATION_MS: u64 = 1000;

/// Line height of the input text, used to size multiline inputs
pub const INPUT_LINE_HEIGHT: f32 = 27.0;

/// Catalog sidebar width
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Event panel ring buffer capacity
pub const EVENT_LOG_CAPACITY: usize = 500;

/// Placeholder displayed in a cell whose value cannot be formatted
pub const PLACEHOLDER_CELL: &str = "—";

/// Filler text used by skeleton states
pub const SKELETON_TEXT: &str = "??????????";

/// Number of filler rows rendered by a skeleton product
pub const SKELETON_ROWS: usize = 3;
