//! Pricing GUI - Main Entry Point
//!
//! Component catalog for the pricing components

use pricing_gui::app::application::run_app;
use pricing_gui::logger::init_logging;
use pricing_gui::utils::config_store::{config_path, load_config};

fn main() {
    let (config, load_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (Default::default(), Some(err)),
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging(&config.log);

    if let Some(err) = load_error {
        tracing::warn!(error = %err, "Failed to load config, using defaults");
    }
    if let Ok(path) = config_path() {
        tracing::debug!(path = %path.display(), "Config file");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Pricing GUI...");

    run_app(config);
}
