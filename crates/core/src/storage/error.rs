use thiserror::Error;

use crate::catalog::CategoryError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing product.
    pub fn product_not_found(id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type: "Product",
            id: id.to_string(),
        }
    }

    /// Shorthand for a missing category.
    pub fn category_not_found(id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type: "Category",
            id: id.to_string(),
        }
    }

    /// Returns true for the not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

impl From<CategoryError> for RepositoryError {
    fn from(error: CategoryError) -> Self {
        RepositoryError::InvalidData(error.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Product",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Product not found: abc-123");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Product",
            id: "SKU-1".to_string(),
        };
        assert_eq!(error.to_string(), "Product already exists: SKU-1");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_repository_error_conflict_display() {
        let error = RepositoryError::Conflict("category has products".to_string());
        assert_eq!(error.to_string(), "Conflict: category has products");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: products".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: products");
    }

    #[test]
    fn test_not_found_shorthands() {
        assert_eq!(
            RepositoryError::product_not_found("p-1").to_string(),
            "Product not found: p-1"
        );
        assert_eq!(
            RepositoryError::category_not_found("c-1").to_string(),
            "Category not found: c-1"
        );
    }

    #[test]
    fn test_category_error_becomes_invalid_data() {
        let error: RepositoryError = CategoryError::SelfParent.into();
        assert_eq!(
            error,
            RepositoryError::InvalidData("Category cannot be its own parent".to_string())
        );
    }
}
