//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the pricing domain.

pub mod config;
pub mod currency;
pub mod feature;
pub mod plan;
pub mod product;
pub mod selection;

pub use currency::Currency;
pub use feature::{Feature, FeatureColumn, FeatureType, FeatureValue};
pub use plan::{ItemId, PricingItem};
pub use product::Product;
pub use selection::{ProductSelection, QuantityChange, SelectedProduct, Selection};
