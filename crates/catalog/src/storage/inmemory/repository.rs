//! In-memory repository implementation.
//!
//! Enforces the same constraints as the SQLite schema: unique SKU, unique
//! category name, a finite non-negative price, products must reference an
//! existing category, and a category still referenced by products cannot be
//! deleted.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::catalog::{self, Category, Product, ProductFilters, ProductPage};
use catalog_core::storage::{CategoryRepository, ProductRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Locks are always taken categories first, then products.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    categories: Arc<RwLock<HashMap<Uuid, Category>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            categories: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn sku_taken(products: &HashMap<Uuid, Product>, product: &Product) -> bool {
    products
        .values()
        .any(|existing| existing.sku == product.sku && existing.id != product.id)
}

fn name_taken(categories: &HashMap<Uuid, Category>, category: &Category) -> bool {
    categories
        .values()
        .any(|existing| existing.name == category.name && existing.id != category.id)
}

fn missing_category(category_id: Uuid) -> RepositoryError {
    RepositoryError::InvalidData(format!("category {} does not exist", category_id))
}

fn invalid_price(product: &Product) -> RepositoryError {
    RepositoryError::InvalidData(format!("invalid price for product: {}", product.price))
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn get_product_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.values().find(|p| p.sku == sku).cloned())
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        let categories = self.categories.read().await;
        let mut products = self.products.write().await;

        if products.contains_key(&product.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Product",
                id: product.id.to_string(),
            });
        }
        if !product.has_valid_price() {
            return Err(invalid_price(product));
        }
        if sku_taken(&products, product) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Product",
                id: product.sku.clone(),
            });
        }
        if !categories.contains_key(&product.category_id) {
            return Err(missing_category(product.category_id));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        let categories = self.categories.read().await;
        let mut products = self.products.write().await;

        if !products.contains_key(&product.id) {
            return Err(RepositoryError::product_not_found(product.id));
        }
        if !product.has_valid_price() {
            return Err(invalid_price(product));
        }
        if sku_taken(&products, product) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Product",
                id: product.sku.clone(),
            });
        }
        if !categories.contains_key(&product.category_id) {
            return Err(missing_category(product.category_id));
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let mut products = self.products.write().await;
        if products.remove(&id).is_none() {
            return Err(RepositoryError::product_not_found(id));
        }
        Ok(())
    }

    async fn query_products(&self, filters: &ProductFilters) -> Result<ProductPage> {
        let filters = filters.clone().normalize();
        let products = self.products.read().await;
        Ok(catalog::query_products(products.values(), &filters))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).map(|category| Category {
            children: catalog::direct_children(id, categories.values()),
            ..category.clone()
        }))
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;
        let mut active: Vec<Category> = categories
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }

    async fn create_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        if categories.contains_key(&category.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Category",
                id: category.id.to_string(),
            });
        }
        if name_taken(&categories, category) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Category",
                id: category.name.clone(),
            });
        }
        if let Some(parent_id) = category.parent_id {
            if !categories.contains_key(&parent_id) {
                return Err(missing_category(parent_id));
            }
        }
        let stored = Category {
            children: Vec::new(),
            ..category.clone()
        };
        categories.insert(category.id, stored);
        Ok(())
    }

    async fn update_category(&self, category: &Category) -> Result<()> {
        let mut categories = self.categories.write().await;
        if !categories.contains_key(&category.id) {
            return Err(RepositoryError::category_not_found(category.id));
        }
        if name_taken(&categories, category) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Category",
                id: category.name.clone(),
            });
        }
        if let Some(parent_id) = category.parent_id {
            if !categories.contains_key(&parent_id) {
                return Err(missing_category(parent_id));
            }
        }
        let stored = Category {
            children: Vec::new(),
            ..category.clone()
        };
        categories.insert(category.id, stored);
        Ok(())
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        let mut categories = self.categories.write().await;
        let products = self.products.read().await;

        if !categories.contains_key(&id) {
            return Err(RepositoryError::category_not_found(id));
        }
        if products.values().any(|p| p.category_id == id) {
            return Err(RepositoryError::Conflict(format!(
                "category {} is referenced by products",
                id
            )));
        }
        categories.remove(&id);
        for child in categories.values_mut() {
            if child.parent_id == Some(id) {
                child.parent_id = None;
            }
        }
        Ok(())
    }
}
