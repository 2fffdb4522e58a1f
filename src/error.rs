//! Domain-specific error types for claimlens

use thiserror::Error;

/// Main error type for the claimlens engine.
///
/// Scoring itself is total over well-typed inputs; errors only arise at the
/// boundary (configuration load, malformed CLI input).
#[derive(Error, Debug)]
pub enum ClaimlensError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for ClaimlensError {
    fn from(err: serde_json::Error) -> Self {
        ClaimlensError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ClaimlensError {
    fn from(err: toml::de::Error) -> Self {
        ClaimlensError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for claimlens operations
pub type Result<T> = std::result::Result<T, ClaimlensError>;
