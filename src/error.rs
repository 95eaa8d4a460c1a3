//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero
    #[error("Capacity must be positive, got {0}")]
    Capacity(usize),

    /// The cache actor is no longer running
    #[error("Cache actor has shut down")]
    Closed,

    /// An environment value could not be parsed
    #[error("Invalid config value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
}

// == Fetch Error Enum ==
/// Error returned by fetches that cross a channel to the cache actor.
///
/// `Compute` carries the callback's own error untouched.
#[derive(Error, Debug)]
pub enum FetchError<E> {
    /// The compute callback failed; the cache was left unmodified
    #[error("Compute failed: {0}")]
    Compute(E),

    /// The cache itself could not serve the request
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl<E> FetchError<E> {
    /// Returns the compute error, if that is what this is.
    pub fn into_compute(self) -> Option<E> {
        match self {
            FetchError::Compute(err) => Some(err),
            FetchError::Cache(_) => None,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
