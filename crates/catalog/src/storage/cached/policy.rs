//! TTLs and time limits applied by the cached repository.

use std::future::Future;
use std::time::Duration;

use catalog_core::cache::{CacheError, Result as CacheResult};

/// Lifetime of a single product entry.
pub const DEFAULT_PRODUCT_TTL: Duration = Duration::from_secs(600);

/// Lifetime of a collection entry.
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(300);

/// Time limit for one cache call on the request path.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(250);

/// Time limit for a whole collection sweep.
pub const DEFAULT_INVALIDATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Cache tuning for `CachedCatalogRepository`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub product_ttl: Duration,
    pub list_ttl: Duration,
    pub operation_timeout: Duration,
    pub invalidation_timeout: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            product_ttl: DEFAULT_PRODUCT_TTL,
            list_ttl: DEFAULT_LIST_TTL,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            invalidation_timeout: DEFAULT_INVALIDATION_TIMEOUT,
        }
    }
}

/// Runs a cache future under `limit`, reporting expiry as `CacheError::Timeout`.
pub async fn bounded<T, F>(limit: Duration, operation: F) -> CacheResult<T>
where
    F: Future<Output = CacheResult<T>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .unwrap_or(Err(CacheError::Timeout(limit)))
}
