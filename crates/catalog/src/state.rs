//! Application state wiring.
//!
//! Builds the `Catalog` over the store and cache selected by feature flags.
//! Every combination wraps the store in `CachedCatalogRepository`.

use std::sync::Arc;

use catalog_core::storage::CatalogRepository;

use crate::catalog::Catalog;
use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'sqlite'");

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    fn build(repo: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog: Catalog::new(repo),
        }
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedCatalogRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::debug!(path = %config.sqlite_path, "Using SQLite store with memory cache");
            Ok(Self::build(Arc::new(CachedCatalogRepository::new(
                sqlite_repo,
                memory_cache,
                config.cache_policy(),
            ))))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CachedCatalogRepository;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::debug!(path = %config.sqlite_path, "Using SQLite store with Redis cache");
            Ok(Self::build(Arc::new(CachedCatalogRepository::new(
                sqlite_repo,
                redis_cache,
                config.cache_policy(),
            ))))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedCatalogRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Useful for testing without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            Ok(Self::build(Arc::new(CachedCatalogRepository::new(
                inmemory_repo,
                memory_cache,
                config.cache_policy(),
            ))))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;
    use crate::storage::cached::CachedCatalogRepository;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            Ok(Self::build(Arc::new(CachedCatalogRepository::new(
                inmemory_repo,
                redis_cache,
                config.cache_policy(),
            ))))
        }
    }
}
