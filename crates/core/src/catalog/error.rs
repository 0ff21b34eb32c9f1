use thiserror::Error;

/// Errors raised when a category's parent reference would break the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category cannot be its own parent")]
    SelfParent,
    #[error("Parent {0} is a descendant of the category")]
    ParentCycle(String),
}
