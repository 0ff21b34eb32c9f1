//! Cached repository decorator.
//!
//! Wraps a store with the read-through cache:
//!
//! - **Reads**: probe the cache, on miss fetch from the store and populate
//! - **Writes**: persist to the store, drop the entity key, sweep every
//!   collection entry
//!
//! Cache trouble of any kind (errors, timeouts, undecodable payloads) is
//! logged and treated as a miss. Only store errors reach the caller.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("catalog.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let cached = CachedCatalogRepository::new(repo, cache, CachePolicy::default());
//! ```

mod catalog;
mod policy;

pub use catalog::CachedCatalogRepository;
pub use policy::CachePolicy;
