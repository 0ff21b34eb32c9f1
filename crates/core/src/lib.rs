//! Functional core for the catalog service.
//!
//! Pure domain types, the cache key strategy, and the traits implemented by
//! the storage and cache adapters in the `catalog` crate. Nothing here
//! performs I/O.

pub mod cache;
pub mod catalog;
pub mod storage;
