//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Main application configuration, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Locale code ("en", "fr"); empty means detect from the system
    pub locale: Option<String>,
    /// Display currency the pricing page starts with
    pub currency: Currency,
    /// Logging options
    pub log: LogConfig,
    /// Component catalog options
    pub catalog: CatalogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Also write a daily rolling log file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Component catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// Story selected at startup (story slug)
    pub story: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            currency = "GBP"

            [catalog]
            story = "pricing-page"
            "#,
        )
        .expect("partial config");

        assert_eq!(config.currency, Currency::Gbp);
        assert_eq!(config.catalog.story.as_deref(), Some("pricing-page"));
        assert!(!config.log.file);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig {
            locale: Some("fr".to_string()),
            currency: Currency::Usd,
            log: LogConfig {
                level: "debug".to_string(),
                file: true,
            },
            catalog: CatalogConfig::default(),
        };
        let text = toml::to_string(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&text).expect("parse back");
        assert_eq!(parsed, config);
    }
}
