//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `catalog_core::storage`, plus the cached decorator that wraps them.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local maps, for development and tests
//!
//! These features are mutually exclusive (checked in `state.rs`). The
//! in-memory backend is also compiled for tests, which run the decorator
//! against it.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p catalog
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p catalog --no-default-features --features inmemory,memory
//! ```

pub mod cached;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
