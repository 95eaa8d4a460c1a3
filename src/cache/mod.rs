//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction, lazy TTL expiration
//! and get-or-compute fills.
//!
//! - [`LruCache`]: single-threaded engine
//! - [`SharedCache`]: the engine behind one exclusive lock

mod entry;
mod recency;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{BySize, Expiry, Sizeable, Unit, Weigher};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
