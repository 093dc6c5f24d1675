//! Error types for the cache
//!
//! Cache operations are total; errors only arise while loading configuration.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while building a cache configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable holds a value that does not parse
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// A JSON configuration document is malformed
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
