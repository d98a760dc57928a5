//! Pricing GUI Library
//!
//! GPUI components for presenting product plans, estimating a monthly
//! price and picking a currency, plus the component catalog used to browse
//! them.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod fixtures;
pub mod helpers;
pub mod i18n;
pub mod logger;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
