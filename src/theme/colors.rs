//! Colors - Pricing Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Pricing color palette - All colors are accessed via associated functions
pub struct PricingColors;

impl PricingColors {
    // Primary colors
    /// Catalog header background - Deep purple
    pub fn header_bg() -> Rgba { rgb(0x3a3871) }
    /// Primary accent - Purple (add buttons, selected currency)
    pub fn accent() -> Rgba { rgb(0x5754aa) }
    /// Accent hover
    pub fn accent_hover() -> Rgba { rgb(0x46438c) }
    /// Accent tint for selected items
    pub fn accent_soft() -> Rgba { rgb(0xeeedfa) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf6f6fb) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Event panel background - Dark blue
    pub fn event_panel_bg() -> Rgba { rgb(0x1a2332) }
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Skeleton filler block
    pub fn skeleton() -> Rgba { rgb(0xe4e4ef) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green (copy confirmation)
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x5754aa) }

    // Button colors
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }
    /// Ghost button hover
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfafafe) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Disabled input background
    pub fn input_disabled_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
