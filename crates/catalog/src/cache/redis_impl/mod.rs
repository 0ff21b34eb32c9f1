//! Redis cache backend for deployments sharing one cache instance.

mod cache;
mod error;

pub use cache::RedisCache;
