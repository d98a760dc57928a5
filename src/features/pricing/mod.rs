//! Pricing - Table, Product, Header, Estimation and Page
//!
//! Props flow down from [`page::PricingPage`]; every child reports user
//! intents through its own event enum.

pub mod cells;
pub mod estimation;
pub mod header;
pub mod layout;
pub mod page;
pub mod product;
pub mod table;
