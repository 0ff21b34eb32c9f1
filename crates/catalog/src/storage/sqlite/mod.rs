//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` to run them
//! on a dedicated thread. Every repository call is a single closure on that
//! thread, so a dropped caller future never leaves a half-applied write.

mod conversions;
mod error;
mod query;
mod repository;
mod schema;

pub use repository::SqliteRepository;
