//! Cached catalog repository decorator.
//!
//! Products are read through the cache. Categories pass straight through to
//! the store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use catalog_core::cache::{
    deserialize_page, deserialize_product, product_key, product_list_key, product_list_pattern,
    serialize_page, serialize_product, Cache,
};
use catalog_core::catalog::{Category, Product, ProductFilters, ProductPage};
use catalog_core::storage::{CatalogRepository, CategoryRepository, ProductRepository, Result};

use super::policy::{bounded, CachePolicy};

/// Cached catalog repository decorator.
///
/// # Type Parameters
///
/// * `R` - The underlying store
/// * `C` - The cache implementation
pub struct CachedCatalogRepository<R, C>
where
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
    policy: CachePolicy,
}

impl<R, C> CachedCatalogRepository<R, C>
where
    C: Cache,
{
    /// Creates a new cached repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The authoritative store
    /// * `cache` - The shared cache
    /// * `policy` - TTLs and cache time limits
    pub fn new(repository: Arc<R>, cache: Arc<C>, policy: CachePolicy) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    /// Probes the cache. Errors and timeouts read as a miss.
    async fn cache_get(&self, key: &str) -> Option<Vec<u8>> {
        match bounded(self.policy.operation_timeout, self.cache.get(key)).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache read failed");
                None
            }
        }
    }

    async fn cache_set(&self, key: &str, bytes: &[u8], ttl: Duration) {
        let write = self.cache.set(key, bytes, Some(ttl));
        if let Err(err) = bounded(self.policy.operation_timeout, write).await {
            tracing::warn!(key = %key, error = %err, "Cache write failed");
        }
    }

    async fn cache_delete(&self, key: &str) {
        if let Err(err) = bounded(self.policy.operation_timeout, self.cache.delete(key)).await {
            tracing::warn!(key = %key, error = %err, "Failed to invalidate product cache");
        }
    }

    /// Drops every collection entry under its own time limit.
    async fn sweep_product_lists(&self) -> usize {
        let pattern = product_list_pattern();
        let sweep = self.cache.delete_pattern(&pattern);
        match bounded(self.policy.invalidation_timeout, sweep).await {
            Ok(removed) => {
                tracing::debug!(removed, "Swept product list cache");
                removed
            }
            Err(err) => {
                tracing::warn!(
                    pattern = %pattern,
                    error = %err,
                    "Failed to invalidate product list cache"
                );
                0
            }
        }
    }
}

#[async_trait]
impl<R, C> ProductRepository for CachedCatalogRepository<R, C>
where
    R: ProductRepository + 'static,
    C: Cache + 'static,
{
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let cache_key = product_key(id);

        if let Some(bytes) = self.cache_get(&cache_key).await {
            match deserialize_product(&bytes) {
                Ok(product) => {
                    tracing::trace!(product_id = %id, "Cache hit for product");
                    return Ok(Some(product));
                }
                Err(err) => {
                    tracing::warn!(product_id = %id, error = %err, "Cached product is unreadable");
                }
            }
        }

        tracing::trace!(product_id = %id, "Cache miss for product");
        let product = self.repository.get_product(id).await?;

        // Absent products are never cached.
        let Some(product) = product else {
            return Ok(None);
        };

        match serialize_product(&product) {
            Ok(bytes) => {
                self.cache_set(&cache_key, &bytes, self.policy.product_ttl)
                    .await
            }
            Err(err) => tracing::warn!(product_id = %id, error = %err, "Failed to encode product"),
        }

        Ok(Some(product))
    }

    async fn get_product_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        self.repository.get_product_by_sku(sku).await
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        self.repository.create_product(product).await?;

        self.sweep_product_lists().await;

        tracing::debug!(product_id = %product.id, "Product created");
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        self.repository.update_product(product).await?;

        self.cache_delete(&product_key(product.id)).await;
        self.sweep_product_lists().await;

        tracing::debug!(product_id = %product.id, "Product updated");
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        self.repository.delete_product(id).await?;

        self.cache_delete(&product_key(id)).await;
        self.sweep_product_lists().await;

        tracing::debug!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn query_products(&self, filters: &ProductFilters) -> Result<ProductPage> {
        let filters = filters.clone().normalize();
        let cache_key = product_list_key(&filters);

        if let Some(key) = cache_key.as_deref() {
            if let Some(bytes) = self.cache_get(key).await {
                match deserialize_page(&bytes) {
                    Ok(page) => {
                        tracing::trace!(
                            key = %key,
                            total = page.total,
                            "Cache hit for product list"
                        );
                        return Ok(page);
                    }
                    Err(err) => {
                        tracing::warn!(
                            key = %key,
                            error = %err,
                            "Cached product list is unreadable"
                        );
                    }
                }
            }
            tracing::trace!(key = %key, "Cache miss for product list");
        }

        let page = self.repository.query_products(&filters).await?;

        if let Some(key) = cache_key.as_deref() {
            match serialize_page(&page) {
                Ok(bytes) => self.cache_set(key, &bytes, self.policy.list_ttl).await,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Failed to encode product list")
                }
            }
        }

        Ok(page)
    }
}

#[async_trait]
impl<R, C> CategoryRepository for CachedCatalogRepository<R, C>
where
    R: CategoryRepository + 'static,
    C: Cache + 'static,
{
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
        self.repository.get_category(id).await
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        self.repository.get_category_by_name(name).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.repository.list_categories().await
    }

    async fn create_category(&self, category: &Category) -> Result<()> {
        self.repository.create_category(category).await
    }

    async fn update_category(&self, category: &Category) -> Result<()> {
        self.repository.update_category(category).await
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        self.repository.delete_category(id).await
    }
}

#[async_trait]
impl<R, C> CatalogRepository for CachedCatalogRepository<R, C>
where
    R: ProductRepository + CategoryRepository + 'static,
    C: Cache + 'static,
{
    async fn invalidate_product_lists(&self) -> usize {
        self.sweep_product_lists().await
    }
}
