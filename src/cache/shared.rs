//! Shared Cache Module
//!
//! Thread-safe facade over [`LruCache`]. One exclusive lock guards the whole
//! engine; there is no reader/writer split because even `get` reorders
//! recency.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::entry::{Expiry, Unit, Weigher};
use crate::cache::{CacheStats, LruCache};
use crate::config::Config;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable handle to one [`LruCache`] behind a mutex.
///
/// Every call, `fetch` included, holds the lock for its whole duration, so
/// calls are totally ordered and never interleave. A slow `compute` in
/// [`fetch`](Self::fetch) therefore blocks all other callers.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use ttl_lru::cache::SharedCache;
///
/// let cache = SharedCache::new(2).unwrap();
/// cache.add("a", 1, Duration::ZERO);
/// cache.add("b", 2, Duration::ZERO);
/// assert!(cache.add("c", 3, Duration::ZERO));
/// assert_eq!(cache.get("a"), None);
/// ```
#[derive(Debug)]
pub struct SharedCache<K, V, W = Unit> {
    inner: Arc<Mutex<LruCache<K, V, W>>>,
}

impl<K, V, W> Clone for SharedCache<K, V, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V, Unit>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a shared cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `CacheError::Capacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::from_engine(LruCache::new(capacity)?))
    }

    /// Creates a shared cache sized from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }
}

impl<K, V, W> SharedCache<K, V, W>
where
    K: Hash + Eq + Clone,
    V: Clone,
    W: Weigher<V>,
{
    /// Wraps an existing engine.
    pub fn from_engine(engine: LruCache<K, V, W>) -> Self {
        debug!(capacity = engine.capacity(), "shared cache created");
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Creates a shared cache whose entry sizes are reported by `weigher`.
    pub fn with_weigher(capacity: usize, weigher: W) -> Result<Self> {
        Ok(Self::from_engine(LruCache::with_weigher(capacity, weigher)?))
    }

    /// Adds or updates an entry. Returns `true` if another entry was evicted.
    pub fn add(&self, key: K, value: V, ttl: Duration) -> bool {
        self.inner.lock().add(key, value, ttl)
    }

    /// Returns a clone of the value, marking it most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    pub fn expires<Q>(&self, key: &Q) -> Option<Expiry>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().expires(key)
    }

    // == Fetch ==
    /// Returns the cached value or computes, stores and returns it.
    ///
    /// The lock is held while `compute` runs. `compute` must not call back
    /// into this cache (or any clone of it): the lock is not reentrant and
    /// the call would deadlock.
    pub fn fetch<F, E>(&self, key: K, ttl: Duration, compute: F) -> std::result::Result<(V, bool), E>
    where
        F: FnOnce() -> std::result::Result<V, E>,
    {
        let mut cache = self.inner.lock();
        let (value, evicted) = cache.fetch(key, ttl, compute)?;
        Ok((value.clone(), evicted))
    }

    // == Fetch Unlocked ==
    /// Like [`fetch`](Self::fetch), but runs `compute` without holding the
    /// lock.
    ///
    /// Other callers proceed while `compute` runs, and `compute` may use this
    /// cache. Concurrent misses on the same key may each run their own
    /// `compute`; when the result is stored, an unexpired entry that another
    /// caller stored in the meantime wins and is returned instead (with
    /// `evicted == false`).
    pub fn fetch_unlocked<F, E>(
        &self,
        key: K,
        ttl: Duration,
        compute: F,
    ) -> std::result::Result<(V, bool), E>
    where
        F: FnOnce() -> std::result::Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok((value, false));
        }

        let computed = compute()?;

        // the miss was already counted by the get above
        let mut cache = self.inner.lock();
        let (value, evicted) = cache.fill(key, computed, ttl);
        Ok((value.clone(), evicted))
    }

    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    pub fn get_oldest(&self) -> Option<(K, V)> {
        self.inner
            .lock()
            .get_oldest()
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    pub fn remove_oldest(&self) -> Option<(K, V)> {
        self.inner.lock().remove_oldest()
    }

    /// Returns resident keys from oldest to newest.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn total_size(&self) -> u64 {
        self.inner.lock().total_size()
    }

    pub fn purge(&self) {
        self.inner.lock().purge();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}
