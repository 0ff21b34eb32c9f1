use std::{env, time::Duration};

use crate::storage::cached::CachePolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Single product TTL in seconds (default: 600)
    pub product_ttl_seconds: u64,
    /// Collection TTL in seconds (default: 300)
    pub list_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Time limit for one cache call in milliseconds (default: 250)
    pub cache_timeout_ms: u64,
    /// Time limit for a collection sweep in milliseconds (default: 2,000)
    pub invalidation_timeout_ms: u64,
    /// Path to SQLite database file (default: "catalog.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_PRODUCT_TTL_SECONDS` - Single product TTL (default: 600)
    /// - `CACHE_LIST_TTL_SECONDS` - Collection TTL (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 10,000)
    /// - `CACHE_TIMEOUT_MS` - Per cache call time limit (default: 250)
    /// - `CACHE_INVALIDATION_TIMEOUT_MS` - Collection sweep time limit (default: 2,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalog.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            product_ttl_seconds: parsed("CACHE_PRODUCT_TTL_SECONDS", 600),
            list_ttl_seconds: parsed("CACHE_LIST_TTL_SECONDS", 300),
            cache_max_entries: parsed("CACHE_MAX_ENTRIES", 10_000),
            cache_timeout_ms: parsed("CACHE_TIMEOUT_MS", 250),
            invalidation_timeout_ms: parsed("CACHE_INVALIDATION_TIMEOUT_MS", 2_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "catalog.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// TTLs and time limits for the cached repository.
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            product_ttl: Duration::from_secs(self.product_ttl_seconds),
            list_ttl: Duration::from_secs(self.list_ttl_seconds),
            operation_timeout: Duration::from_millis(self.cache_timeout_ms),
            invalidation_timeout: Duration::from_millis(self.invalidation_timeout_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "CACHE_PRODUCT_TTL_SECONDS",
        "CACHE_LIST_TTL_SECONDS",
        "CACHE_MAX_ENTRIES",
        "CACHE_TIMEOUT_MS",
        "CACHE_INVALIDATION_TIMEOUT_MS",
        "SQLITE_PATH",
        "REDIS_URL",
    ];

    #[test]
    fn test_cache_policy_conversion() {
        let config = Config {
            product_ttl_seconds: 60,
            list_ttl_seconds: 30,
            cache_max_entries: 100,
            cache_timeout_ms: 75,
            invalidation_timeout_ms: 500,
            sqlite_path: "test.db".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
        };

        let policy = config.cache_policy();

        assert_eq!(policy.product_ttl, Duration::from_secs(60));
        assert_eq!(policy.list_ttl, Duration::from_secs(30));
        assert_eq!(policy.operation_timeout, Duration::from_millis(75));
        assert_eq!(policy.invalidation_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        for var in VARS {
            env::remove_var(var);
        }

        let config = Config::from_env();

        assert_eq!(config.product_ttl_seconds, 600);
        assert_eq!(config.list_ttl_seconds, 300);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.cache_timeout_ms, 250);
        assert_eq!(config.invalidation_timeout_ms, 2_000);
        assert_eq!(config.sqlite_path, "catalog.db");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.cache_policy(), CachePolicy::default());
    }
}
