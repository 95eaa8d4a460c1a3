//! Cache Store Module
//!
//! Single-threaded cache engine combining a HashMap index with an arena-backed
//! recency list, LRU eviction and lazy TTL expiration.
//!
//! Expiry rule: lookups (`get`, `contains`, `expires`, `fetch`) treat an
//! expired entry as absent. Eviction-candidate inspection (`get_oldest`,
//! `remove_oldest`) and listings (`keys`, `len`) see every resident entry,
//! expired or not. Expired entries are only dropped when a `get` or `fetch`
//! touches them, or when the LRU policy evicts them.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::cache::entry::{CacheEntry, Expiry, Unit, Weigher};
use crate::cache::recency::{RecencyList, SlotId};
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Capacity-bounded LRU cache with per-entry TTL.
///
/// Not synchronized; wrap it in a [`SharedCache`](crate::cache::SharedCache)
/// to share it between threads.
#[derive(Debug)]
pub struct LruCache<K, V, W = Unit> {
    /// Key to recency slot
    index: HashMap<K, SlotId>,
    /// Entries ordered most to least recently used
    recency: RecencyList<CacheEntry<K, V>>,
    /// Maximum number of resident entries
    capacity: usize,
    weigher: W,
    /// Sum of resident entry sizes
    total_size: u64,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V, Unit>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `CacheError::Capacity` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_weigher(capacity, Unit)
    }
}

impl<K, V, W> LruCache<K, V, W>
where
    K: Hash + Eq + Clone,
    W: Weigher<V>,
{
    /// Creates a cache whose entry sizes are reported by `weigher`.
    ///
    /// Sizes are bookkeeping only: capacity is always an entry count.
    pub fn with_weigher(capacity: usize, weigher: W) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::Capacity(capacity));
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            recency: RecencyList::with_capacity(capacity),
            capacity,
            weigher,
            total_size: 0,
            stats: CacheStats::new(),
        })
    }

    // == Add ==
    /// Stores `value` under `key` with the given TTL (`Duration::ZERO` never
    /// expires).
    ///
    /// An existing key is updated in place and moved to the head; that never
    /// evicts. A new key that pushes the cache over capacity evicts the least
    /// recently used entry.
    ///
    /// # Returns
    /// `true` if an entry was evicted to make room.
    pub fn add(&mut self, key: K, value: V, ttl: Duration) -> bool {
        self.insert(key, value, ttl, Utc::now()).1
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.lookup(key, Utc::now())?;
        Some(&self.recency[id].value)
    }

    // == Contains ==
    /// Checks whether `key` is resident and unexpired, without touching recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live_entry(key, Utc::now()).is_some()
    }

    // == Expires ==
    /// Returns when `key` expires, or `None` if it is absent or already expired.
    pub fn expires<Q>(&self, key: &Q) -> Option<Expiry>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live_entry(key, Utc::now())
            .map(CacheEntry::expires_at)
    }

    // == Fetch ==
    /// Returns the cached value for `key`, or fills it from `compute`.
    ///
    /// `compute` runs at most once, and only on a miss. Its error is returned
    /// unchanged and leaves the cache as it was.
    ///
    /// # Returns
    /// The value and whether storing it evicted another entry (always `false`
    /// on a hit).
    pub fn fetch<F, E>(
        &mut self,
        key: K,
        ttl: Duration,
        compute: F,
    ) -> std::result::Result<(&V, bool), E>
    where
        F: FnOnce() -> std::result::Result<V, E>,
    {
        let (id, evicted) = match self.lookup(&key, Utc::now()) {
            Some(id) => (id, false),
            None => {
                let value = compute()?;
                self.insert(key, value, ttl, Utc::now())
            }
        };
        Ok((&self.recency[id].value, evicted))
    }

    // == Get Oldest ==
    /// Returns the next eviction candidate, expired or not.
    pub fn get_oldest(&self) -> Option<(&K, &V)> {
        self.recency
            .back()
            .map(|entry| (&entry.key, &entry.value))
    }

    // == Remove Oldest ==
    /// Removes and returns the next eviction candidate, expired or not.
    pub fn remove_oldest(&mut self) -> Option<(K, V)> {
        let id = self.recency.back_id()?;
        self.remove_slot(id).map(|entry| (entry.key, entry.value))
    }

    // == Remove ==
    /// Removes `key`. Returns `true` if it was resident.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(id) => self.remove_slot(id).is_some(),
            None => false,
        }
    }

    // == Keys ==
    /// Returns resident keys from oldest to newest.
    pub fn keys(&self) -> Vec<K> {
        self.recency
            .iter_oldest_first()
            .map(|entry| entry.key.clone())
            .collect()
    }

    // == Length ==
    /// Returns the number of resident entries, expired ones included.
    pub fn len(&self) -> usize {
        self.recency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recency.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sum of the sizes the weigher reported for resident entries.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    // == Purge ==
    /// Removes all entries. Counters in [`stats`](Self::stats) are kept.
    pub fn purge(&mut self) {
        let removed = self.recency.len();
        self.index.clear();
        self.recency.clear();
        self.total_size = 0;
        debug!(removed, "cache purged");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.len();
        stats.total_size = self.total_size;
        stats
    }

    /// Stores `value` under `key` unless a live entry is already resident, in
    /// which case that entry is kept, moved to the head and returned.
    ///
    /// Records no hit or miss: the caller has already counted the lookup.
    pub(crate) fn fill(&mut self, key: K, value: V, ttl: Duration) -> (&V, bool) {
        let now = Utc::now();
        let live = self
            .index
            .get(&key)
            .copied()
            .filter(|&id| !self.recency[id].is_expired(now));

        let (id, evicted) = match live {
            Some(id) => {
                self.recency[id].refresh(now);
                self.recency.move_to_front(id);
                (id, false)
            }
            None => self.insert(key, value, ttl, now),
        };
        (&self.recency[id].value, evicted)
    }

    /// Inserts or updates `key`, returning its slot and whether the tail was
    /// evicted.
    fn insert(&mut self, key: K, value: V, ttl: Duration, now: DateTime<Utc>) -> (SlotId, bool) {
        let size = self.weigher.weigh(&value);

        if let Some(&id) = self.index.get(&key) {
            let entry = &mut self.recency[id];
            self.total_size = self
                .total_size
                .saturating_sub(entry.size())
                .saturating_add(size);
            entry.value = value;
            entry.ttl = ttl;
            entry.size = size;
            entry.refresh(now);
            self.recency.move_to_front(id);
            return (id, false);
        }

        let id = self
            .recency
            .push_front(CacheEntry::new(key.clone(), value, ttl, size, now));
        self.index.insert(key, id);
        self.total_size = self.total_size.saturating_add(size);

        let evicted = self.recency.len() > self.capacity;
        if evicted {
            self.evict_oldest();
        }
        (id, evicted)
    }

    /// Resolves `key` to a live slot, refreshing it and moving it to the head.
    /// Drops the entry if it has expired.
    fn lookup<Q>(&mut self, key: &Q, now: DateTime<Utc>) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if self.recency[id].is_expired(now) {
            self.remove_slot(id);
            self.stats.record_expiration();
            self.stats.record_miss();
            trace!(len = self.len(), "expired entry dropped on access");
            return None;
        }

        self.recency[id].refresh(now);
        self.recency.move_to_front(id);
        self.stats.record_hit();
        Some(id)
    }

    fn live_entry<Q>(&self, key: &Q, now: DateTime<Utc>) -> Option<&CacheEntry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        let entry = &self.recency[id];
        (!entry.is_expired(now)).then_some(entry)
    }

    fn evict_oldest(&mut self) {
        if let Some(id) = self.recency.back_id() {
            self.remove_slot(id);
            self.stats.record_eviction();
            trace!(capacity = self.capacity, "evicted least recently used entry");
        }
    }

    fn remove_slot(&mut self, id: SlotId) -> Option<CacheEntry<K, V>> {
        let entry = self.recency.remove(id)?;
        self.index.remove(&entry.key);
        self.total_size = self.total_size.saturating_sub(entry.size());
        Some(entry)
    }

    /// Asserts that the index and recency list describe the same entry set.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.recency.len());
        assert!(self.recency.len() <= self.capacity);

        let mut size = 0;
        for entry in self.recency.iter_oldest_first() {
            let id = self.index.get(&entry.key).copied();
            assert!(id.is_some(), "listed key missing from index");
            size = entry.size().saturating_add(size);
        }
        assert_eq!(size, self.total_size);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{BySize, Sizeable};
    use std::cell::Cell;
    use std::thread::sleep;

    const SHORT_TTL: Duration = Duration::from_millis(50);
    const PAST_SHORT_TTL: Duration = Duration::from_millis(120);

    fn cache(capacity: usize) -> LruCache<&'static str, i32> {
        LruCache::new(capacity).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result: Result<LruCache<u32, u32>> = LruCache::new(0);
        assert_eq!(result.unwrap_err(), CacheError::Capacity(0));
    }

    #[test]
    fn test_store_new() {
        let store = cache(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_add_and_get() {
        let mut store = cache(100);

        assert!(!store.add("key1", 1, Duration::ZERO));
        assert_eq!(store.get("key1"), Some(&1));
        assert_eq!(store.len(), 1);
        store.assert_consistent();
    }

    #[test]
    fn test_get_nonexistent() {
        let mut store = cache(100);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_get_with_borrowed_key() {
        let mut store: LruCache<String, i32> = LruCache::new(4).unwrap();
        store.add("owned".to_string(), 7, Duration::ZERO);

        assert_eq!(store.get("owned"), Some(&7));
        assert!(store.contains("owned"));
        assert!(store.remove("owned"));
    }

    #[test]
    fn test_update_in_place() {
        let mut store = cache(2);

        assert!(!store.add("k", 1, Duration::ZERO));
        assert!(!store.add("other", 9, Duration::ZERO));
        // full cache, existing key: no eviction
        assert!(!store.add("k", 2, Duration::ZERO));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("k"), Some(&2));
        assert_eq!(store.get("other"), Some(&9));
        assert_eq!(store.stats().evictions, 0);
        store.assert_consistent();
    }

    #[test]
    fn test_update_moves_to_head() {
        let mut store = cache(3);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);
        store.add("c", 3, Duration::ZERO);

        store.add("a", 10, Duration::ZERO);
        assert_eq!(store.keys(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_update_replaces_ttl() {
        let mut store = cache(2);
        store.add("k", 1, SHORT_TTL);
        store.add("k", 2, Duration::ZERO);

        sleep(PAST_SHORT_TTL);
        assert_eq!(store.get("k"), Some(&2));
        assert_eq!(store.expires("k"), Some(Expiry::Never));
    }

    #[test]
    fn test_eviction_order() {
        let mut store = cache(2);

        assert!(!store.add("a", 1, Duration::ZERO));
        assert!(!store.add("b", 2, Duration::ZERO));
        assert!(store.add("c", 3, Duration::ZERO));

        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some(&2));
        assert_eq!(store.get("c"), Some(&3));
        store.assert_consistent();
    }

    #[test]
    fn test_get_protects_from_eviction() {
        let mut store = cache(3);
        store.add("key1", 1, Duration::ZERO);
        store.add("key2", 2, Duration::ZERO);
        store.add("key3", 3, Duration::ZERO);

        store.get("key1");
        store.add("key4", 4, Duration::ZERO);

        assert!(store.contains("key1"));
        assert!(!store.contains("key2"));
    }

    #[test]
    fn test_ttl_expiration() {
        let mut store = cache(10);
        store.add("key1", 1, SHORT_TTL);

        assert_eq!(store.get("key1"), Some(&1));
        assert_eq!(store.len(), 1);

        sleep(PAST_SHORT_TTL);

        assert_eq!(store.get("key1"), None);
        assert_eq!(store.len(), 0);
        assert_eq!(store.stats().expirations, 1);
        store.assert_consistent();
    }

    #[test]
    fn test_get_refreshes_ttl_window() {
        let mut store = cache(10);
        store.add("key1", 1, Duration::from_millis(200));

        for _ in 0..4 {
            sleep(Duration::from_millis(80));
            assert_eq!(store.get("key1"), Some(&1));
        }
    }

    #[test]
    fn test_expired_entry_stays_resident_until_touched() {
        let mut store = cache(10);
        store.add("stale", 1, SHORT_TTL);
        store.add("fresh", 2, Duration::ZERO);

        sleep(PAST_SHORT_TTL);

        // lookups see it as absent, without removing it
        assert!(!store.contains("stale"));
        assert_eq!(store.expires("stale"), None);
        assert_eq!(store.len(), 2);
        assert_eq!(store.keys(), vec!["stale", "fresh"]);

        // eviction-candidate inspection ignores expiry
        assert_eq!(store.get_oldest(), Some((&"stale", &1)));

        assert_eq!(store.get("stale"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_expired_entry_counts_against_capacity() {
        let mut store = cache(2);
        store.add("stale", 1, SHORT_TTL);
        store.add("fresh", 2, Duration::ZERO);

        sleep(PAST_SHORT_TTL);

        assert!(store.add("new", 3, Duration::ZERO));
        assert_eq!(store.keys(), vec!["fresh", "new"]);
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_remove_oldest_ignores_expiry() {
        let mut store = cache(4);
        store.add("stale", 1, SHORT_TTL);
        store.add("fresh", 2, Duration::ZERO);

        sleep(PAST_SHORT_TTL);

        assert_eq!(store.remove_oldest(), Some(("stale", 1)));
        assert_eq!(store.remove_oldest(), Some(("fresh", 2)));
        assert_eq!(store.remove_oldest(), None);
        assert_eq!(store.get_oldest(), None);
    }

    #[test]
    fn test_expires() {
        let mut store = cache(4);
        store.add("forever", 1, Duration::ZERO);
        store.add("minute", 2, Duration::from_secs(60));

        assert_eq!(store.expires("forever"), Some(Expiry::Never));
        assert_eq!(store.expires("missing"), None);

        let before = store.keys();
        match store.expires("minute") {
            Some(Expiry::At(at)) => {
                let remaining = at - Utc::now();
                assert!(remaining.num_seconds() <= 60);
                assert!(remaining.num_seconds() >= 58);
            }
            other => panic!("unexpected expiry {:?}", other),
        }
        // read-only
        assert_eq!(store.keys(), before);
    }

    #[test]
    fn test_contains_does_not_touch_recency() {
        let mut store = cache(2);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);

        assert!(store.contains("a"));
        store.add("c", 3, Duration::ZERO);

        assert!(!store.contains("a"));
    }

    #[test]
    fn test_remove() {
        let mut store = cache(4);
        store.add("a", 1, Duration::ZERO);

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);
        store.assert_consistent();
    }

    #[test]
    fn test_get_oldest_and_remove_oldest() {
        let mut store = cache(4);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);
        store.get("a");

        assert_eq!(store.get_oldest(), Some((&"b", &2)));
        // inspection does not reorder
        assert_eq!(store.get_oldest(), Some((&"b", &2)));

        assert_eq!(store.remove_oldest(), Some(("b", 2)));
        assert_eq!(store.keys(), vec!["a"]);
        store.assert_consistent();
    }

    #[test]
    fn test_keys_oldest_to_newest() {
        let mut store = cache(5);
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            store.add(key, i as i32, Duration::ZERO);
        }
        store.get("b");

        assert_eq!(store.keys(), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_purge() {
        let mut store = cache(4);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);
        store.get("a");

        store.purge();

        assert!(store.is_empty());
        assert!(store.keys().is_empty());
        assert_eq!(store.total_size(), 0);
        assert_eq!(store.stats().hits, 1);

        // usable after purge
        store.add("c", 3, Duration::ZERO);
        assert_eq!(store.get("c"), Some(&3));
        store.assert_consistent();
    }

    #[test]
    fn test_fetch_miss_computes_once() {
        let mut store = cache(4);
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            Ok::<_, String>(42)
        };

        let (value, evicted) = store.fetch("x", Duration::ZERO, compute).unwrap();
        assert_eq!((*value, evicted), (42, false));

        let (value, evicted) = store.fetch("x", Duration::ZERO, compute).unwrap();
        assert_eq!((*value, evicted), (42, false));

        assert_eq!(calls.get(), 1);
        assert_eq!(store.stats().hits, 1);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_fetch_reports_eviction() {
        let mut store = cache(1);
        store.add("a", 1, Duration::ZERO);

        let (value, evicted) = store
            .fetch("b", Duration::ZERO, || Ok::<_, String>(2))
            .unwrap();
        assert_eq!((*value, evicted), (2, true));
        assert_eq!(store.keys(), vec!["b"]);
    }

    #[test]
    fn test_fetch_failure_leaves_no_trace() {
        let mut store = cache(1);
        store.add("a", 1, Duration::ZERO);

        let result = store.fetch("x", Duration::ZERO, || Err::<i32, _>("no value"));

        assert_eq!(result.unwrap_err(), "no value");
        assert!(!store.contains("x"));
        assert_eq!(store.keys(), vec!["a"]);
        store.assert_consistent();
    }

    #[test]
    fn test_fetch_recomputes_after_expiry() {
        let mut store = cache(4);
        store.add("x", 1, SHORT_TTL);

        sleep(PAST_SHORT_TTL);

        let (value, evicted) = store
            .fetch("x", Duration::ZERO, || Ok::<_, String>(2))
            .unwrap();
        assert_eq!((*value, evicted), (2, false));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_total_size_with_weigher() {
        let mut store: LruCache<&str, String, BySize> = LruCache::with_weigher(2, BySize).unwrap();

        store.add("a", "hello".to_string(), Duration::ZERO);
        store.add("b", "hi".to_string(), Duration::ZERO);
        assert_eq!(store.total_size(), 7);

        store.add("a", "hey".to_string(), Duration::ZERO);
        assert_eq!(store.total_size(), 5);

        store.add("c", "x".to_string(), Duration::ZERO);
        assert_eq!(store.total_size(), 4);
        assert_eq!(store.stats().total_size, 4);

        store.remove("c");
        assert_eq!(store.total_size(), 3);
        store.assert_consistent();
    }

    #[test]
    fn test_custom_sizeable_value() {
        #[derive(Debug)]
        struct Blob(u64);
        impl Sizeable for Blob {
            fn size(&self) -> u64 {
                self.0
            }
        }

        let mut store = LruCache::with_weigher(4, BySize).unwrap();
        store.add(1, Blob(100), Duration::ZERO);
        store.add(2, Blob(28), Duration::ZERO);
        assert_eq!(store.total_size(), 128);
        assert_eq!(store.remove_oldest().map(|(k, v)| (k, v.0)), Some((1, 100)));
        assert_eq!(store.total_size(), 28);
    }

    #[test]
    fn test_total_size_saturates() {
        #[derive(Debug)]
        struct Huge;
        impl Sizeable for Huge {
            fn size(&self) -> u64 {
                u64::MAX
            }
        }

        let mut store = LruCache::with_weigher(4, BySize).unwrap();
        store.add(1, Huge, Duration::ZERO);
        store.add(2, Huge, Duration::ZERO);
        assert_eq!(store.total_size(), u64::MAX);
        assert_eq!(store.stats().total_size, u64::MAX);

        // updating in place also saturates
        store.add(1, Huge, Duration::ZERO);
        assert_eq!(store.total_size(), u64::MAX);
        assert_eq!(store.len(), 2);

        store.purge();
        assert_eq!(store.total_size(), 0);
    }

    #[test]
    fn test_fill_stores_without_counting() {
        let mut store = cache(2);

        let (value, evicted) = store.fill("a", 1, Duration::ZERO);
        assert_eq!((*value, evicted), (1, false));
        store.fill("b", 2, Duration::ZERO);

        let (value, evicted) = store.fill("c", 3, Duration::ZERO);
        assert_eq!((*value, evicted), (3, true));

        let stats = store.stats();
        assert_eq!((stats.hits, stats.misses), (0, 0));
        assert_eq!(stats.evictions, 1);
        store.assert_consistent();
    }

    #[test]
    fn test_fill_keeps_live_entry() {
        let mut store = cache(2);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);

        let (value, evicted) = store.fill("a", 10, Duration::ZERO);
        assert_eq!((*value, evicted), (1, false));
        assert_eq!(store.keys(), vec!["b", "a"]);
        assert_eq!(store.stats().hits, 0);
    }

    #[test]
    fn test_fill_replaces_expired_entry() {
        let mut store = cache(2);
        store.add("a", 1, SHORT_TTL);

        sleep(PAST_SHORT_TTL);

        let (value, evicted) = store.fill("a", 2, Duration::ZERO);
        assert_eq!((*value, evicted), (2, false));
        assert_eq!(store.len(), 1);
        assert_eq!(store.expires("a"), Some(Expiry::Never));
    }

    #[test]
    fn test_default_size_is_one_per_entry() {
        let mut store = cache(10);
        store.add("a", 1, Duration::ZERO);
        store.add("b", 2, Duration::ZERO);
        assert_eq!(store.total_size(), 2);
    }

    #[test]
    fn test_stats() {
        let mut store = cache(100);

        store.add("key1", 1, Duration::ZERO);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
