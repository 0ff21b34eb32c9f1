//! SQLite repository implementation.
//!
//! Implements the repository traits from `catalog_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::params;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use catalog_core::catalog::{Category, Product, ProductFilters, ProductPage};
use catalog_core::storage::{CategoryRepository, ProductRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_category, row_to_product};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::query::ProductQuery;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// The CHECK constraint does not see NaN (bound as NULL) or infinity.
fn check_price(product: &Product) -> Result<()> {
    if product.has_valid_price() {
        Ok(())
    } else {
        Err(RepositoryError::InvalidData(format!(
            "invalid price for product: {}",
            product.price
        )))
    }
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for products and categories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ProductRepository implementation
// ============================================================================

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_PRODUCT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_product) {
                    Ok(product) => Ok(Some(product)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Product", id.to_string()))
    }

    async fn get_product_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let sku = sku.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_BY_SKU)
                    .map_err(wrap_err)?;
                match stmt.query_row([&sku], row_to_product) {
                    Ok(product) => Ok(Some(product)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        check_price(product)?;
        let product = product.clone();
        let sku = product.sku.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PRODUCT,
                    params![
                        product.id.to_string(),
                        product.name,
                        product.description,
                        product.price,
                        product.category_id.to_string(),
                        product.stock,
                        product.image_url,
                        product.sku,
                        product.is_active,
                        format_datetime(&product.created_at),
                        format_datetime(&product.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Product", sku))
    }

    async fn update_product(&self, product: &Product) -> Result<()> {
        check_price(product)?;
        let product = product.clone();
        let id = product.id;
        let sku = product.sku.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PRODUCT,
                        params![
                            product.id.to_string(),
                            product.name,
                            product.description,
                            product.price,
                            product.category_id.to_string(),
                            product.stock,
                            product.image_url,
                            product.sku,
                            product.is_active,
                            format_datetime(&product.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| match map_tokio_rusqlite_error_with_id(e, "Product", sku) {
                RepositoryError::NotFound { .. } => RepositoryError::product_not_found(id),
                other => other,
            })
    }

    async fn delete_product(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PRODUCT, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Product", id.to_string()))
    }

    async fn query_products(&self, filters: &ProductFilters) -> Result<ProductPage> {
        let query = ProductQuery::from_filters(&filters.clone().normalize());

        self.conn
            .call(move |conn| {
                let total: i64 = conn
                    .query_row(
                        &query.count_sql(),
                        rusqlite::params_from_iter(query.filter_params()),
                        |row| row.get(0),
                    )
                    .map_err(wrap_err)?;

                let mut stmt = conn.prepare(&query.select_sql()).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        rusqlite::params_from_iter(query.page_params()),
                        row_to_product,
                    )
                    .map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(ProductPage::new(products, u64::try_from(total).unwrap_or(0)))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Product"))
    }
}

// ============================================================================
// CategoryRepository implementation
// ============================================================================

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORY_BY_ID)
                    .map_err(wrap_err)?;
                let mut category = match stmt.query_row([&id_str], row_to_category) {
                    Ok(category) => category,
                    Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                    Err(e) => return Err(wrap_err(e)),
                };

                let mut stmt = conn
                    .prepare(schema::SELECT_CHILD_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([&id_str], row_to_category)
                    .map_err(wrap_err)?;
                for row_result in rows {
                    category.children.push(row_result.map_err(wrap_err)?);
                }
                Ok(Some(category))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Category", id.to_string()))
    }

    async fn get_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let name = name.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CATEGORY_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name], row_to_category) {
                    Ok(category) => Ok(Some(category)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Category"))
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ACTIVE_CATEGORIES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

                let mut categories = Vec::new();
                for row_result in rows {
                    categories.push(row_result.map_err(wrap_err)?);
                }
                Ok(categories)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Category"))
    }

    async fn create_category(&self, category: &Category) -> Result<()> {
        let category = category.clone();
        let name = category.name.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CATEGORY,
                    params![
                        category.id.to_string(),
                        category.name,
                        category.description,
                        category.parent_id.map(|id| id.to_string()),
                        category.is_active,
                        format_datetime(&category.created_at),
                        format_datetime(&category.updated_at),
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Category", name))
    }

    async fn update_category(&self, category: &Category) -> Result<()> {
        let category = category.clone();
        let id = category.id;
        let name = category.name.clone();

        let result = self
            .conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CATEGORY,
                        params![
                            category.id.to_string(),
                            category.name,
                            category.description,
                            category.parent_id.map(|id| id.to_string()),
                            category.is_active,
                            format_datetime(&category.updated_at),
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await;

        result.map_err(|e| match map_tokio_rusqlite_error_with_id(e, "Category", name) {
            RepositoryError::NotFound { .. } => RepositoryError::category_not_found(id),
            other => other,
        })
    }

    async fn delete_category(&self, id: Uuid) -> Result<()> {
        let id_str = id.to_string();

        let referencing = self
            .conn
            .call(move |conn| {
                let referencing: i64 = conn
                    .query_row(schema::COUNT_PRODUCTS_IN_CATEGORY, [&id_str], |row| {
                        row.get(0)
                    })
                    .map_err(wrap_err)?;
                if referencing > 0 {
                    return Ok(referencing);
                }

                let rows = conn
                    .execute(schema::DELETE_CATEGORY, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(0)
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Category", id.to_string()))?;

        if referencing > 0 {
            return Err(RepositoryError::Conflict(format!(
                "category {} is referenced by {} products",
                id, referencing
            )));
        }
        Ok(())
    }
}
