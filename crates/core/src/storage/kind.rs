//! Pure classification of repository errors for callers.
//!
//! Callers (the CLI, or an HTTP layer in front of the catalog) only need to
//! know which family an error belongs to, not which backend produced it.

use std::fmt;

use super::RepositoryError;

/// Coarse error families exposed to the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Maps a [`RepositoryError`] to its [`ErrorKind`].
///
/// - `NotFound` -> `NotFound`
/// - `AlreadyExists`, `Conflict` -> `Conflict`
/// - `InvalidData` -> `InvalidInput`
/// - `ConnectionFailed`, `QueryFailed`, `Serialization` -> `Internal`
///
/// # Examples
///
/// ```
/// use catalog_core::storage::{repository_error_kind, ErrorKind, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Product",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_kind(&error), ErrorKind::NotFound);
/// ```
pub fn repository_error_kind(error: &RepositoryError) -> ErrorKind {
    match error {
        RepositoryError::NotFound { .. } => ErrorKind::NotFound,
        RepositoryError::AlreadyExists { .. } | RepositoryError::Conflict(_) => ErrorKind::Conflict,
        RepositoryError::InvalidData(_) => ErrorKind::InvalidInput,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_) => ErrorKind::Internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind() {
        let error = RepositoryError::product_not_found("p-1");
        assert_eq!(repository_error_kind(&error), ErrorKind::NotFound);
    }

    #[test]
    fn test_conflict_kinds() {
        let exists = RepositoryError::AlreadyExists {
            entity_type: "Product",
            id: "SKU-1".to_string(),
        };
        let conflict = RepositoryError::Conflict("category has products".to_string());
        assert_eq!(repository_error_kind(&exists), ErrorKind::Conflict);
        assert_eq!(repository_error_kind(&conflict), ErrorKind::Conflict);
    }

    #[test]
    fn test_invalid_data_kind() {
        let error = RepositoryError::InvalidData("parent cycle".to_string());
        assert_eq!(repository_error_kind(&error), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_store_failures_are_internal() {
        for error in [
            RepositoryError::ConnectionFailed("refused".to_string()),
            RepositoryError::QueryFailed("syntax".to_string()),
            RepositoryError::Serialization("bad uuid".to_string()),
        ] {
            assert_eq!(repository_error_kind(&error), ErrorKind::Internal);
        }
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::Internal.to_string(), "internal");
    }
}
