use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations against a shared key/value space.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Deletes a value from the cache by key. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Lists the live keys matching a glob pattern (e.g., "products:*").
    async fn keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Deletes a batch of keys. An empty batch is a no-op.
    async fn delete_many(&self, keys: &[String]) -> Result<()>;

    /// Deletes every key matching a pattern and returns how many were found.
    async fn delete_pattern(&self, pattern: &str) -> Result<usize> {
        let keys = self.keys(pattern).await?;
        if keys.is_empty() {
            return Ok(0);
        }
        self.delete_many(&keys).await?;
        Ok(keys.len())
    }
}
