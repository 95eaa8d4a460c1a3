//! ttl_lru workload driver
//!
//! Drives a [`SharedCache`] from several threads with a get-or-compute
//! workload and prints the resulting statistics as JSON.

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_lru::{Config, SharedCache};

/// Main entry point for the workload driver.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache
/// 4. Run the workload on `threads` workers
/// 5. Print statistics
fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_from_env().context("failed to load configuration")?;
    info!(
        capacity = config.capacity,
        default_ttl_ms = config.default_ttl_ms,
        threads = config.threads,
        operations = config.operations,
        key_space = config.key_space,
        "configuration loaded"
    );

    let cache: SharedCache<u64, String> =
        SharedCache::from_config(&config).context("failed to create cache")?;

    let started = Instant::now();
    let computed = thread::scope(|s| {
        let workers: Vec<_> = (0..config.threads)
            .map(|worker| {
                let cache = cache.clone();
                let config = &config;
                s.spawn(move || run_worker(&cache, config, worker))
            })
            .collect();

        workers
            .into_iter()
            .map(|w| w.join().map_err(|_| anyhow::anyhow!("worker panicked")))
            .sum::<Result<u64>>()
    })?;
    let elapsed = started.elapsed();

    let stats = cache.stats();
    info!(
        elapsed_ms = elapsed.as_millis() as u64,
        computed,
        hit_rate = stats.hit_rate(),
        "workload finished"
    );

    let report = serde_json::to_string_pretty(&stats).context("failed to encode statistics")?;
    println!("{}", report);
    Ok(())
}

/// Runs one worker's share of the workload. Returns how many values it had to
/// compute.
fn run_worker(cache: &SharedCache<u64, String>, config: &Config, worker: usize) -> u64 {
    let ttl = config.default_ttl();
    let mut computed = 0;

    for i in 0..config.operations {
        // multiplicative hashing spreads workers over the key space, with
        // low keys revisited more often
        let spread = (i as u64).wrapping_mul(2_654_435_761) ^ worker as u64;
        let key = spread % config.key_space;
        let key = if i % 4 == 0 { key / 8 } else { key };

        match i % 16 {
            15 => {
                cache.remove(&key);
            }
            _ => {
                let result = cache.fetch(key, ttl, || {
                    computed += 1;
                    Ok::<_, std::convert::Infallible>(format!("value-{}", key))
                });
                if let Ok((_, true)) = result {
                    debug!(worker, key, "fill evicted an entry");
                }
            }
        }
    }

    computed
}
