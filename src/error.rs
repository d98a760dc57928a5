//! Error types for Pricing-GUI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON deserialization error (catalog fixtures)
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// A catalog fixture could not be loaded
    #[snafu(display("Fixture {name} is invalid: {source}"))]
    Fixture {
        name: String,
        source: serde_json::Error,
    },

    /// Writing to the system clipboard failed
    #[snafu(display("Clipboard error: {message}"))]
    Clipboard { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Errors raised while turning a plan feature into display text.
///
/// These are caller data errors: the table renders a placeholder cell
/// and logs the error instead of failing the whole render.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum FormatError {
    /// The plan has no feature for a column of the table
    #[snafu(display("Plan {plan} has no feature {code}"))]
    MissingFeature { plan: String, code: String },

    /// The feature type slug is not one we know how to display
    #[snafu(display("Feature {code} has an unknown type"))]
    UnknownFeatureType { code: String },

    /// The feature value does not match its declared type
    #[snafu(display("Feature {code} expects a {expected} value"))]
    FeatureValueMismatch { code: String, expected: &'static str },
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
