//! ConfigState - Application Configuration State

use crate::domain::config::AppConfig;
use crate::utils::config_store::save_config;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Apply a change and persist it; a failed save is logged and ignored
    pub fn update_and_save(&mut self, update: impl FnOnce(&mut AppConfig)) {
        update(&mut self.config);
        if let Err(e) = save_config(&self.config) {
            tracing::warn!(error = %e, "Failed to save configuration");
        }
    }
}
