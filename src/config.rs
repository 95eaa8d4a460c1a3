//! Configuration Module
//!
//! Handles loading cache and workload configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache and workload configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL in milliseconds applied to filled entries, 0 = never expires
    pub default_ttl_ms: u64,
    /// Number of worker threads driving the cache
    pub threads: usize,
    /// Operations performed by each worker
    pub operations: usize,
    /// Number of distinct keys the workload draws from
    pub key_space: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL_MS` - TTL in milliseconds (default: 0, never expires)
    /// - `WORKLOAD_THREADS` - Worker threads (default: 4)
    /// - `WORKLOAD_OPERATIONS` - Operations per worker (default: 10000)
    /// - `WORKLOAD_KEY_SPACE` - Distinct keys (default: 2000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_or("CACHE_CAPACITY", defaults.capacity),
            default_ttl_ms: env_or("CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms),
            threads: env_or("WORKLOAD_THREADS", defaults.threads),
            operations: env_or("WORKLOAD_OPERATIONS", defaults.operations),
            key_space: env_or("WORKLOAD_KEY_SPACE", defaults.key_space),
        }
    }

    /// Like [`from_env`](Self::from_env), but rejects values that do not parse
    /// or that would make the workload meaningless.
    pub fn try_from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            capacity: env_parse("CACHE_CAPACITY", defaults.capacity)?,
            default_ttl_ms: env_parse("CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms)?,
            threads: env_parse("WORKLOAD_THREADS", defaults.threads)?,
            operations: env_parse("WORKLOAD_OPERATIONS", defaults.operations)?,
            key_space: env_parse("WORKLOAD_KEY_SPACE", defaults.key_space)?,
        };

        if config.capacity == 0 {
            return Err(CacheError::Capacity(0));
        }
        if config.threads == 0 {
            return Err(CacheError::InvalidConfig {
                name: "WORKLOAD_THREADS",
                value: "0".to_string(),
            });
        }
        if config.key_space == 0 {
            return Err(CacheError::InvalidConfig {
                name: "WORKLOAD_KEY_SPACE",
                value: "0".to_string(),
            });
        }
        Ok(config)
    }

    /// TTL applied to filled entries.
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 1000,
            default_ttl_ms: 0,
            threads: 4,
            operations: 10_000,
            key_space: 2000,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_parse<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| CacheError::InvalidConfig { name, value }),
        Err(_) => Ok(default),
    }
}
