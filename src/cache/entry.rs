//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support, and the
//! weigher strategies that report an entry's logical size.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

// == Sized Capability ==
/// Implemented by values that can report their own logical size.
pub trait Sizeable {
    /// Logical size of the value, in caller-defined units.
    fn size(&self) -> u64;
}

/// Strategy that assigns a size to every cached value.
pub trait Weigher<V> {
    fn weigh(&self, value: &V) -> u64;
}

/// Weighs every value as 1. The default for caches whose values do not
/// report a size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit;

impl<V> Weigher<V> for Unit {
    fn weigh(&self, _value: &V) -> u64 {
        1
    }
}

/// Weighs values by their [`Sizeable`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySize;

impl<V: Sizeable> Weigher<V> for BySize {
    fn weigh(&self, value: &V) -> u64 {
        value.size()
    }
}

impl Sizeable for String {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

impl Sizeable for Vec<u8> {
    fn size(&self) -> u64 {
        self.len() as u64
    }
}

// == Expiry ==
/// When an entry stops being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiry {
    /// Entry was stored with a zero TTL
    Never,
    /// Entry expires once this instant has passed
    At(DateTime<Utc>),
}

// == Cache Entry ==
/// A single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Zero means the entry never expires
    pub(crate) ttl: Duration,
    /// Instant of the last insert or refresh
    pub(crate) timestamp: DateTime<Utc>,
    /// Size reported by the cache's weigher
    pub(crate) size: u64,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new entry stamped at `now`.
    pub(crate) fn new(key: K, value: V, ttl: Duration, size: u64, now: DateTime<Utc>) -> Self {
        Self {
            key,
            value,
            ttl,
            timestamp: now,
            size,
        }
    }

    // == Refresh ==
    /// Re-stamps the entry, restarting its TTL window.
    pub(crate) fn refresh(&mut self, now: DateTime<Utc>) {
        self.timestamp = now;
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired only once strictly more than
    /// `ttl` has elapsed since `timestamp`. A zero TTL never expires.
    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.ttl.is_zero() {
            return false;
        }
        match (now - self.timestamp).to_std() {
            Ok(elapsed) => elapsed > self.ttl,
            // clock stepped backwards past the timestamp
            Err(_) => false,
        }
    }

    // == Expires At ==
    /// Returns the instant this entry expires.
    ///
    /// TTLs too large for chrono to represent saturate at the latest
    /// representable instant.
    pub(crate) fn expires_at(&self) -> Expiry {
        if self.ttl.is_zero() {
            return Expiry::Never;
        }
        let at = TimeDelta::from_std(self.ttl)
            .ok()
            .and_then(|delta| self.timestamp.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Expiry::At(at)
    }

    /// Size reported for the value when it was stored.
    pub(crate) fn size(&self) -> u64 {
        self.size
    }
}
