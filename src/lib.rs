//! ttl_lru - A bounded in-memory LRU cache
//!
//! Combines least-recently-used eviction with optional per-entry TTL
//! expiration and a get-or-compute fill pattern, behind either a single
//! lock ([`SharedCache`]) or a single-owner task ([`CacheHandle`]).

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Expiry, LruCache, SharedCache};
pub use config::Config;
pub use error::{CacheError, FetchError, Result};
pub use tasks::{spawn_cache_actor, CacheHandle};
