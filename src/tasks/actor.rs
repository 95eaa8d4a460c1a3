//! Cache Actor Task
//!
//! Single-owner alternative to [`SharedCache`](crate::cache::SharedCache): a
//! tokio task owns the [`LruCache`] and applies requests one at a time, in
//! arrival order. Requests are closures over the engine, so every operation
//! is as atomic as it is under the shared cache's lock.

use std::borrow::Borrow;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, Expiry, LruCache, Unit, Weigher};
use crate::error::{CacheError, FetchError, Result};

type Job<K, V, W> = Box<dyn FnOnce(&mut LruCache<K, V, W>) + Send>;

/// Spawns a task that owns `cache` and serves requests from the returned
/// handle.
///
/// `buffer` bounds the number of queued requests (at least 1). The task
/// stops once every handle has been dropped; the returned JoinHandle can
/// also abort it.
///
/// # Example
/// ```ignore
/// let (cache, actor) = spawn_cache_actor(LruCache::new(1000)?, 64);
/// cache.add("k".to_string(), 1, Duration::ZERO).await?;
/// // Later, during shutdown:
/// drop(cache);
/// actor.await?;
/// ```
pub fn spawn_cache_actor<K, V, W>(
    cache: LruCache<K, V, W>,
    buffer: usize,
) -> (CacheHandle<K, V, W>, JoinHandle<()>)
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
    W: Weigher<V> + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<Job<K, V, W>>(buffer.max(1));

    let handle = tokio::spawn(async move {
        let mut cache = cache;
        info!(capacity = cache.capacity(), "cache actor started");

        while let Some(job) = rx.recv().await {
            job(&mut cache);
        }

        info!(entries = cache.len(), "cache actor stopped");
    });

    (CacheHandle { tx }, handle)
}

// == Cache Handle ==
/// Cloneable async handle to a cache actor.
///
/// Every method fails with `CacheError::Closed` once the actor has stopped.
#[derive(Debug)]
pub struct CacheHandle<K, V, W = Unit> {
    tx: mpsc::Sender<Job<K, V, W>>,
}

impl<K, V, W> Clone for CacheHandle<K, V, W> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<K, V, W> CacheHandle<K, V, W>
where
    K: Hash + Eq + Clone + Send + 'static,
    V: Clone + Send + 'static,
    W: Weigher<V> + Send + 'static,
{
    /// Runs `f` against the cache inside the actor and returns its result.
    pub async fn call<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut LruCache<K, V, W>) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let job: Job<K, V, W> = Box::new(move |cache| {
            // caller may have given up waiting
            let _ = reply_tx.send(f(cache));
        });

        self.tx.send(job).await.map_err(|_| {
            debug!("request sent to stopped cache actor");
            CacheError::Closed
        })?;
        reply_rx.await.map_err(|_| CacheError::Closed)
    }

    pub async fn add(&self, key: K, value: V, ttl: Duration) -> Result<bool> {
        self.call(move |cache| cache.add(key, value, ttl)).await
    }

    pub async fn get<Q>(&self, key: Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Send + 'static,
    {
        self.call(move |cache| cache.get(&key).cloned()).await
    }

    pub async fn contains<Q>(&self, key: Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Send + 'static,
    {
        self.call(move |cache| cache.contains(&key)).await
    }

    pub async fn expires<Q>(&self, key: Q) -> Result<Option<Expiry>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Send + 'static,
    {
        self.call(move |cache| cache.expires(&key)).await
    }

    // == Fetch ==
    /// Returns the cached value or computes, stores and returns it.
    ///
    /// `compute` runs inside the actor, so no other request is served until
    /// it returns. It must not wait on this cache.
    pub async fn fetch<F, E>(
        &self,
        key: K,
        ttl: Duration,
        compute: F,
    ) -> std::result::Result<(V, bool), FetchError<E>>
    where
        F: FnOnce() -> std::result::Result<V, E> + Send + 'static,
        E: Send + 'static,
    {
        self.call(move |cache| {
            cache
                .fetch(key, ttl, compute)
                .map(|(value, evicted)| (value.clone(), evicted))
        })
        .await?
        .map_err(FetchError::Compute)
    }

    pub async fn remove<Q>(&self, key: Q) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Send + 'static,
    {
        self.call(move |cache| cache.remove(&key)).await
    }

    pub async fn get_oldest(&self) -> Result<Option<(K, V)>> {
        self.call(|cache| {
            cache
                .get_oldest()
                .map(|(key, value)| (key.clone(), value.clone()))
        })
        .await
    }

    pub async fn remove_oldest(&self) -> Result<Option<(K, V)>> {
        self.call(|cache| cache.remove_oldest()).await
    }

    pub async fn keys(&self) -> Result<Vec<K>> {
        self.call(|cache| cache.keys()).await
    }

    pub async fn len(&self) -> Result<usize> {
        self.call(|cache| cache.len()).await
    }

    pub async fn purge(&self) -> Result<()> {
        self.call(|cache| cache.purge()).await
    }

    pub async fn stats(&self) -> Result<CacheStats> {
        self.call(|cache| cache.stats()).await
    }
}
