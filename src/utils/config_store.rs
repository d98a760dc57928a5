//! ConfigStore - Local Configuration Storage
//!
//! The application configuration lives in `pricing-gui.toml` inside the
//! platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Configuration file name
pub const CONFIG_FILE: &str = "pricing-gui.toml";

/// Full path of the configuration file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load the configuration, falling back to defaults when the file is missing
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Save the configuration
pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

/// Load a configuration file from an explicit path
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save a configuration file to an explicit path
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pricing-gui-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing.toml");
        let config = load_config_from(&path).expect("defaults");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.toml");
        let config = AppConfig {
            currency: Currency::Gbp,
            ..AppConfig::default()
        };

        save_config_to(&path, &config).expect("save");
        let loaded = load_config_from(&path).expect("load");
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let path = temp_path("invalid.toml");
        fs::write(&path, "currency = 12").expect("write");
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }
}
