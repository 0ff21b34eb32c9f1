//! Catalog service facade.
//!
//! Turns caller requests into repository calls: normalizes filters, applies
//! patch requests, checks category references, and maps absent rows to
//! `RepositoryError::NotFound`.

use std::sync::Arc;

use uuid::Uuid;

use catalog_core::catalog::{
    check_parent_chain, Category, CreateCategoryRequest, CreateProductRequest, Product,
    ProductFilters, ProductList, UpdateCategoryRequest, UpdateProductRequest,
};
use catalog_core::storage::{CatalogRepository, RepositoryError, Result};

/// Product and category operations over a cache-aware repository.
#[derive(Clone)]
pub struct Catalog {
    repo: Arc<dyn CatalogRepository>,
}

impl Catalog {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    // ------------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------------

    pub async fn get_product(&self, id: Uuid) -> Result<Product> {
        self.repo
            .get_product(id)
            .await?
            .ok_or_else(|| RepositoryError::product_not_found(id))
    }

    pub async fn get_product_by_sku(&self, sku: &str) -> Result<Product> {
        self.repo
            .get_product_by_sku(sku)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Product",
                id: sku.to_string(),
            })
    }

    /// Lists one page of products.
    ///
    /// Limits outside `1..=100` are normalized before the query runs, and the
    /// returned `limit`/`offset` are the normalized values.
    pub async fn list_products(&self, filters: ProductFilters) -> Result<ProductList> {
        let filters = filters.normalize();
        let page = self.repo.query_products(&filters).await?;
        Ok(ProductList::from_page(page, &filters))
    }

    /// Free-text search over name and description.
    ///
    /// An empty term is a plain listing with the given filters.
    pub async fn search_products(
        &self,
        term: &str,
        filters: ProductFilters,
    ) -> Result<ProductList> {
        if term.is_empty() {
            return self.list_products(filters).await;
        }
        self.list_products(filters.with_search(term)).await
    }

    pub async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        self.require_category(request.category_id).await?;

        let product = request.into_product();
        self.repo.create_product(&product).await?;

        tracing::info!(product_id = %product.id, sku = %product.sku, "Created product");
        Ok(product)
    }

    pub async fn update_product(&self, id: Uuid, request: UpdateProductRequest) -> Result<Product> {
        let mut product = self.get_product(id).await?;
        if let Some(category_id) = request.category_id {
            self.require_category(category_id).await?;
        }

        request.apply_to(&mut product);
        self.repo.update_product(&product).await?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<()> {
        self.repo.delete_product(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    /// Drops every cached product list. Returns the number of entries removed.
    pub async fn sweep_product_lists(&self) -> usize {
        let removed = self.repo.invalidate_product_lists().await;
        tracing::info!(removed, "Swept product list cache");
        removed
    }

    // ------------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------------

    /// Gets a category with its direct children.
    pub async fn get_category(&self, id: Uuid) -> Result<Category> {
        self.repo
            .get_category(id)
            .await?
            .ok_or_else(|| RepositoryError::category_not_found(id))
    }

    pub async fn get_category_by_name(&self, name: &str) -> Result<Category> {
        self.repo
            .get_category_by_name(name)
            .await?
            .ok_or_else(|| RepositoryError::category_not_found(name))
    }

    /// Lists active categories ordered by name.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.repo.list_categories().await
    }

    pub async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category> {
        if let Some(parent_id) = request.parent_id {
            self.require_category(parent_id).await?;
        }

        let category = request.into_category();
        self.repo.create_category(&category).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Created category");
        Ok(category)
    }

    /// Applies a patch to a category.
    ///
    /// Moving a category under itself or one of its descendants is rejected
    /// with `RepositoryError::InvalidData`.
    pub async fn update_category(
        &self,
        id: Uuid,
        request: UpdateCategoryRequest,
    ) -> Result<Category> {
        let mut category = self.get_category(id).await?;
        if let Some(parent_id) = request.parent_id {
            let chain = self.ancestor_chain(parent_id).await?;
            check_parent_chain(id, &chain)?;
        }

        request.apply_to(&mut category);
        self.repo.update_category(&category).await?;

        tracing::info!(category_id = %id, "Updated category");
        category.children.clear();
        Ok(category)
    }

    pub async fn delete_category(&self, id: Uuid) -> Result<()> {
        self.repo.delete_category(id).await?;
        tracing::info!(category_id = %id, "Deleted category");
        Ok(())
    }

    async fn require_category(&self, id: Uuid) -> Result<()> {
        match self.repo.get_category(id).await? {
            Some(_) => Ok(()),
            None => Err(RepositoryError::category_not_found(id)),
        }
    }

    /// Returns `parent_id` followed by its ancestors, nearest first.
    ///
    /// Stops at a root or at the first repeated id, so a tree that is already
    /// cyclic cannot loop forever.
    async fn ancestor_chain(&self, parent_id: Uuid) -> Result<Vec<Uuid>> {
        self.require_category(parent_id).await?;

        let mut chain = Vec::new();
        let mut next = Some(parent_id);
        while let Some(id) = next {
            if chain.contains(&id) {
                break;
            }
            chain.push(id);
            next = self.repo.get_category(id).await?.and_then(|c| c.parent_id);
        }
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::cache::Cache;
    use catalog_core::catalog::{SortField, SortOrder};

    use crate::cache::MemoryCache;
    use crate::storage::cached::{CachePolicy, CachedCatalogRepository};
    use crate::storage::InMemoryRepository;

    fn setup() -> (Catalog, Arc<MemoryCache>) {
        let repo = Arc::new(InMemoryRepository::new());
        let cache = Arc::new(MemoryCache::new(1_000));
        let cached = CachedCatalogRepository::new(repo, cache.clone(), CachePolicy::default());
        (Catalog::new(Arc::new(cached)), cache)
    }

    async fn category(catalog: &Catalog, name: &str) -> Category {
        catalog
            .create_category(CreateCategoryRequest::new(name))
            .await
            .unwrap()
    }

    async fn seed(catalog: &Catalog, category_id: Uuid, count: usize) -> Vec<Product> {
        let mut products = Vec::new();
        for i in 0..count {
            let request = CreateProductRequest::new(
                format!("Item {i}"),
                format!("SKU-{i}"),
                10.0 + i as f64,
                category_id,
            );
            products.push(catalog.create_product(request).await.unwrap());
        }
        products
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let (catalog, _) = setup();
        let id = Uuid::new_v4();

        let err = catalog.get_product(id).await.unwrap_err();

        assert_eq!(err, RepositoryError::product_not_found(id));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;

        let request = CreateProductRequest::new("Mouse", "MS-1", 19.5, electronics.id)
            .with_stock(3)
            .with_description("Wireless");
        let created = catalog.create_product(request).await.unwrap();

        assert_eq!(catalog.get_product(created.id).await.unwrap(), created);
        assert_eq!(catalog.get_product_by_sku("MS-1").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_fails() {
        let (catalog, _) = setup();
        let missing = Uuid::new_v4();

        let request = CreateProductRequest::new("Mouse", "MS-1", 19.5, missing);
        let err = catalog.create_product(request).await.unwrap_err();

        assert_eq!(err, RepositoryError::category_not_found(missing));
    }

    #[tokio::test]
    async fn test_list_pagination_metadata() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        seed(&catalog, electronics.id, 5).await;

        let first = catalog
            .list_products(ProductFilters::new().paginate(2, 0))
            .await
            .unwrap();
        assert_eq!(first.products.len(), 2);
        assert_eq!(first.total, 5);
        assert!(first.has_more);

        let last = catalog
            .list_products(ProductFilters::new().paginate(2, 4))
            .await
            .unwrap();
        assert_eq!(last.products.len(), 1);
        assert!(!last.has_more);
    }

    #[tokio::test]
    async fn test_list_reports_normalized_limit() {
        let (catalog, _) = setup();

        let list = catalog
            .list_products(ProductFilters::new().paginate(0, -3))
            .await
            .unwrap();
        assert_eq!(list.limit, 20);
        assert_eq!(list.offset, 0);

        let list = catalog
            .list_products(ProductFilters::new().paginate(1_000, 0))
            .await
            .unwrap();
        assert_eq!(list.limit, 100);
    }

    #[tokio::test]
    async fn test_list_sees_new_product() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        seed(&catalog, electronics.id, 5).await;
        let filters = ProductFilters::new().for_category(electronics.id);

        assert_eq!(catalog.list_products(filters.clone()).await.unwrap().total, 5);

        let request = CreateProductRequest::new("Extra", "SKU-X", 1.0, electronics.id);
        catalog.create_product(request).await.unwrap();

        assert_eq!(catalog.list_products(filters).await.unwrap().total, 6);
    }

    #[tokio::test]
    async fn test_search_matches_description_and_skips_cache() {
        let (catalog, cache) = setup();
        let electronics = category(&catalog, "Electronics").await;
        let request = CreateProductRequest::new("Mouse", "MS-1", 19.5, electronics.id)
            .with_description("Wireless optical mouse");
        catalog.create_product(request).await.unwrap();
        seed(&catalog, electronics.id, 2).await;

        let found = catalog
            .search_products("WIRELESS", ProductFilters::new())
            .await
            .unwrap();

        assert_eq!(found.total, 1);
        assert_eq!(found.products[0].sku, "MS-1");
        assert!(cache.keys("products:*").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_search_is_a_listing() {
        let (catalog, cache) = setup();
        let electronics = category(&catalog, "Electronics").await;
        seed(&catalog, electronics.id, 3).await;

        let found = catalog
            .search_products("", ProductFilters::new())
            .await
            .unwrap();

        assert_eq!(found.total, 3);
        assert_eq!(cache.keys("products:*").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_applies_patch() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        let created = seed(&catalog, electronics.id, 1).await.remove(0);
        catalog.get_product(created.id).await.unwrap();

        let updated = catalog
            .update_product(created.id, UpdateProductRequest::new().with_stock(20))
            .await
            .unwrap();

        assert_eq!(updated.stock, 20);
        assert_eq!(updated.name, created.name);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(catalog.get_product(created.id).await.unwrap().stock, 20);
    }

    #[tokio::test]
    async fn test_update_to_unknown_category_fails() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        let created = seed(&catalog, electronics.id, 1).await.remove(0);
        let missing = Uuid::new_v4();

        let err = catalog
            .update_product(created.id, UpdateProductRequest::new().with_category(missing))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::category_not_found(missing));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let (catalog, _) = setup();
        let err = catalog
            .update_product(Uuid::new_v4(), UpdateProductRequest::new().with_price(1.0))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_product() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        let created = seed(&catalog, electronics.id, 1).await.remove(0);
        catalog.get_product(created.id).await.unwrap();

        catalog.delete_product(created.id).await.unwrap();

        assert!(catalog.get_product(created.id).await.unwrap_err().is_not_found());
        assert!(catalog.delete_product(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_sorted_listing() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        seed(&catalog, electronics.id, 3).await;

        let list = catalog
            .list_products(ProductFilters::new().sorted_by(SortField::Price, SortOrder::Desc))
            .await
            .unwrap();

        let prices: Vec<f64> = list.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![12.0, 11.0, 10.0]);
    }

    #[tokio::test]
    async fn test_sweep_counts_entries() {
        let (catalog, _) = setup();
        catalog.list_products(ProductFilters::new()).await.unwrap();
        catalog
            .list_products(ProductFilters::new().with_active(true))
            .await
            .unwrap();

        assert_eq!(catalog.sweep_product_lists().await, 2);
        assert_eq!(catalog.sweep_product_lists().await, 0);
    }

    #[tokio::test]
    async fn test_category_tree() {
        let (catalog, _) = setup();
        let root = category(&catalog, "Electronics").await;
        let child = catalog
            .create_category(CreateCategoryRequest::new("Phones").with_parent(root.id))
            .await
            .unwrap();

        let fetched = catalog.get_category(root.id).await.unwrap();
        assert_eq!(fetched.children.len(), 1);
        assert_eq!(fetched.children[0].id, child.id);

        let by_name = catalog.get_category_by_name("Phones").await.unwrap();
        assert_eq!(by_name.parent_id, Some(root.id));
    }

    #[tokio::test]
    async fn test_create_category_with_unknown_parent_fails() {
        let (catalog, _) = setup();
        let missing = Uuid::new_v4();

        let err = catalog
            .create_category(CreateCategoryRequest::new("Phones").with_parent(missing))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::category_not_found(missing));
    }

    #[tokio::test]
    async fn test_category_cannot_be_its_own_parent() {
        let (catalog, _) = setup();
        let root = category(&catalog, "Electronics").await;

        let err = catalog
            .update_category(root.id, UpdateCategoryRequest::new().with_parent(root.id))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_category_cycle_rejected() {
        let (catalog, _) = setup();
        let root = category(&catalog, "Electronics").await;
        let phones = catalog
            .create_category(CreateCategoryRequest::new("Phones").with_parent(root.id))
            .await
            .unwrap();
        let android = catalog
            .create_category(CreateCategoryRequest::new("Android").with_parent(phones.id))
            .await
            .unwrap();

        let err = catalog
            .update_category(root.id, UpdateCategoryRequest::new().with_parent(android.id))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidData(_)));
        assert_eq!(catalog.get_category(root.id).await.unwrap().parent_id, None);
    }

    #[tokio::test]
    async fn test_category_move_is_allowed() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        let audio = category(&catalog, "Audio").await;
        let headphones = catalog
            .create_category(CreateCategoryRequest::new("Headphones").with_parent(electronics.id))
            .await
            .unwrap();

        let moved = catalog
            .update_category(headphones.id, UpdateCategoryRequest::new().with_parent(audio.id))
            .await
            .unwrap();

        assert_eq!(moved.parent_id, Some(audio.id));
        assert!(catalog.get_category(electronics.id).await.unwrap().children.is_empty());
    }

    #[tokio::test]
    async fn test_list_categories_and_delete() {
        let (catalog, _) = setup();
        let books = category(&catalog, "Books").await;
        category(&catalog, "Audio").await;
        catalog
            .update_category(books.id, UpdateCategoryRequest::new().with_active(false))
            .await
            .unwrap();

        let names: Vec<String> = catalog
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Audio"]);

        catalog.delete_category(books.id).await.unwrap();
        assert!(catalog.get_category(books.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_category_in_use_conflicts() {
        let (catalog, _) = setup();
        let electronics = category(&catalog, "Electronics").await;
        seed(&catalog, electronics.id, 1).await;

        let err = catalog.delete_category(electronics.id).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
    }
}
