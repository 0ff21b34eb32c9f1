//! Pure functions for serializing/deserializing cached payloads.
//!
//! Values are stored as JSON so entries stay readable from `redis-cli` and
//! interoperate with other deployments reading the same namespace.

use thiserror::Error;

use crate::catalog::{Product, ProductPage};

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a product to JSON bytes.
///
/// # Arguments
/// * `product` - The product to serialize
///
/// # Returns
/// JSON-encoded bytes representing the product
pub fn serialize_product(product: &Product) -> Result<Vec<u8>> {
    serde_json::to_vec(product).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a product.
pub fn deserialize_product(bytes: &[u8]) -> Result<Product> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a collection page (`{"products": [...], "total": n}`) to JSON bytes.
///
/// # Arguments
/// * `page` - The page to serialize
///
/// # Returns
/// JSON-encoded bytes representing the page
pub fn serialize_page(page: &ProductPage) -> Result<Vec<u8>> {
    serde_json::to_vec(page).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a collection page.
pub fn deserialize_page(bytes: &[u8]) -> Result<ProductPage> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
