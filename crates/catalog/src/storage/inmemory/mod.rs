//! In-memory storage backend.
//!
//! Stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. Used by the
//! `inmemory` feature and by the repository tests; data is lost on drop.

mod repository;

pub use repository::InMemoryRepository;
