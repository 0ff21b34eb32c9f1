//! Repository traits and error types shared by every store backend.

mod error;
mod kind;
mod traits;

pub use error::{RepositoryError, Result};
pub use kind::{repository_error_kind, ErrorKind};
pub use traits::{CatalogRepository, CategoryRepository, ProductRepository};
