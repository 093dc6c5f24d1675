//! Configuration Module
//!
//! Handles the two cache options, TTL and maximum size, and their defaults.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default entry lifetime in milliseconds (one minute)
pub const DEFAULT_TTL_MS: u64 = 60 * 1000;

/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Environment variable holding the TTL in milliseconds
pub const TTL_ENV_VAR: &str = "CACHE_TTL_MS";

/// Environment variable holding the maximum entry count
pub const MAX_SIZE_ENV_VAR: &str = "CACHE_MAX_SIZE";

/// Cache configuration.
///
/// Both options are optional and fall back to their defaults independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Entry lifetime in milliseconds
    #[serde(default)]
    pub ttl: Option<u64>,
    /// Maximum number of entries
    #[serde(default)]
    pub max_size: Option<usize>,
}

impl CacheConfig {
    /// Creates a configuration with both options set.
    pub fn new(ttl_ms: u64, max_size: usize) -> Self {
        Self {
            ttl: Some(ttl_ms),
            max_size: Some(max_size),
        }
    }

    /// Sets the TTL in milliseconds.
    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl = Some(ttl_ms);
        self
    }

    /// Sets the maximum entry count.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Effective TTL in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl.unwrap_or(DEFAULT_TTL_MS)
    }

    /// Effective maximum entry count.
    pub fn max_size(&self) -> usize {
        self.max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Loads the configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - TTL in milliseconds (default: 60000)
    /// - `CACHE_MAX_SIZE` - Maximum entries (default: 100)
    ///
    /// Unset variables leave the option unset; values that fail to parse
    /// are rejected.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            ttl: read_var(TTL_ENV_VAR)?,
            max_size: read_var(MAX_SIZE_ENV_VAR)?,
        })
    }

    /// Parses a JSON document such as `{"ttl": 1000, "maxSize": 3}`.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

fn read_var<V: FromStr>(var: &'static str) -> Result<Option<V>> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        Err(_) => Ok(None),
    }
}
