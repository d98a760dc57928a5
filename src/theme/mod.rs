//! Theme - Colors and Typography

pub mod colors;
pub mod typography;

pub use colors::PricingColors;
pub use typography::Typography;
