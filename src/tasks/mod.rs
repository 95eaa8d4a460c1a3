//! Background Tasks Module
//!
//! Contains tasks that run alongside callers.
//!
//! # Tasks
//! - Cache actor: owns a cache and serves requests over a channel

mod actor;

pub use actor::{spawn_cache_actor, CacheHandle};
