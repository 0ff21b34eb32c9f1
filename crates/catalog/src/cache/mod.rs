//! Cache backend implementations.
//!
//! Concrete implementations of `catalog_core::cache::Cache`. The runtime
//! backend is chosen at compile time (see `state.rs`):
//!
//! - `memory` (default): in-process LRU cache with lazy TTL expiry
//! - `redis`: shared Redis instance through a connection manager
//!
//! The memory backend is always compiled because the repository tests run
//! against it.

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryCache;

#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
