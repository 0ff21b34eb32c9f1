use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{Category, Product, ProductFilters, ProductPage};

use super::Result;

/// Repository for product operations against the authoritative store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its ID.
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// Gets a product by its SKU.
    async fn get_product_by_sku(&self, sku: &str) -> Result<Option<Product>>;

    /// Creates a new product.
    async fn create_product(&self, product: &Product) -> Result<()>;

    /// Updates an existing product.
    async fn update_product(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its ID.
    async fn delete_product(&self, id: Uuid) -> Result<()>;

    /// Runs a filtered, sorted and paginated query.
    ///
    /// The returned `total` counts every match and ignores `limit`/`offset`.
    async fn query_products(&self, filters: &ProductFilters) -> Result<ProductPage>;
}

/// Repository for category operations against the authoritative store.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Gets a category by its ID, with its direct children populated.
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>>;

    /// Gets a category by its unique name.
    async fn get_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// Lists active categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Creates a new category.
    async fn create_category(&self, category: &Category) -> Result<()>;

    /// Updates an existing category.
    async fn update_category(&self, category: &Category) -> Result<()>;

    /// Deletes a category by its ID.
    async fn delete_category(&self, id: Uuid) -> Result<()>;
}

/// The cache-aware repository consumed by the service layer.
///
/// Products are served through the cache; categories pass straight through
/// to the store.
#[async_trait]
pub trait CatalogRepository: ProductRepository + CategoryRepository {
    /// Removes every cached collection result and returns how many entries
    /// were dropped. Failures are logged, never returned.
    async fn invalidate_product_lists(&self) -> usize;
}
