//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Product collection queries are assembled in
//! `query.rs` because their WHERE clause depends on the filter set.

/// SQL statement to create all tables.
///
/// Timestamps are RFC 3339 strings with a fixed nanosecond width so they sort
/// lexicographically.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Categories table (tree via parent_id)
CREATE TABLE IF NOT EXISTS categories (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    parent_id TEXT REFERENCES categories(id) ON DELETE SET NULL,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Products table
CREATE TABLE IF NOT EXISTS products (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price REAL NOT NULL CHECK (price >= 0),
    category_id TEXT NOT NULL REFERENCES categories(id),
    stock INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
    image_url TEXT NOT NULL DEFAULT '',
    sku TEXT NOT NULL UNIQUE,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Indexes for collection queries
CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id);
CREATE INDEX IF NOT EXISTS idx_products_created_at ON products(created_at);
CREATE INDEX IF NOT EXISTS idx_products_price ON products(price);
CREATE INDEX IF NOT EXISTS idx_products_name ON products(name);
CREATE INDEX IF NOT EXISTS idx_categories_parent_id ON categories(parent_id);
"#;

/// Column list shared by every product SELECT, in `row_to_product` order.
pub const PRODUCT_COLUMNS: &str =
    "id, name, description, price, category_id, stock, image_url, sku, is_active, created_at, updated_at";

// Product queries
pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (id, name, description, price, category_id, stock, image_url, sku, is_active, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
"#;

pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT id, name, description, price, category_id, stock, image_url, sku, is_active, created_at, updated_at
FROM products
WHERE id = ?1
"#;

pub const SELECT_PRODUCT_BY_SKU: &str = r#"
SELECT id, name, description, price, category_id, stock, image_url, sku, is_active, created_at, updated_at
FROM products
WHERE sku = ?1
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, description = ?3, price = ?4, category_id = ?5, stock = ?6,
    image_url = ?7, sku = ?8, is_active = ?9, updated_at = ?10
WHERE id = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products
WHERE id = ?1
"#;

// Category queries
pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categories (id, name, description, parent_id, is_active, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_CATEGORY_BY_ID: &str = r#"
SELECT id, name, description, parent_id, is_active, created_at, updated_at
FROM categories
WHERE id = ?1
"#;

pub const SELECT_CATEGORY_BY_NAME: &str = r#"
SELECT id, name, description, parent_id, is_active, created_at, updated_at
FROM categories
WHERE name = ?1
"#;

pub const SELECT_CHILD_CATEGORIES: &str = r#"
SELECT id, name, description, parent_id, is_active, created_at, updated_at
FROM categories
WHERE parent_id = ?1
ORDER BY name ASC
"#;

pub const SELECT_ACTIVE_CATEGORIES: &str = r#"
SELECT id, name, description, parent_id, is_active, created_at, updated_at
FROM categories
WHERE is_active = 1
ORDER BY name ASC
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categories
SET name = ?2, description = ?3, parent_id = ?4, is_active = ?5, updated_at = ?6
WHERE id = ?1
"#;

pub const COUNT_PRODUCTS_IN_CATEGORY: &str = r#"
SELECT COUNT(*)
FROM products
WHERE category_id = ?1
"#;

pub const DELETE_CATEGORY: &str = r#"
DELETE FROM categories
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_enables_foreign_keys() {
        assert!(CREATE_TABLES.contains("PRAGMA foreign_keys = ON"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS categories"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS products"));
        assert!(CREATE_TABLES.contains("sku TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn test_product_selects_share_column_order() {
        assert!(SELECT_PRODUCT_BY_ID.contains(PRODUCT_COLUMNS));
        assert!(SELECT_PRODUCT_BY_SKU.contains(PRODUCT_COLUMNS));
    }

    #[test]
    fn test_queries_have_correct_placeholders() {
        assert!(INSERT_PRODUCT.contains("?11"));
        assert!(UPDATE_PRODUCT.contains("?10"));
        assert!(INSERT_CATEGORY.contains("?7"));
        assert!(UPDATE_CATEGORY.contains("?6"));
    }

    #[test]
    fn test_category_listing_is_ordered_by_name() {
        assert!(SELECT_ACTIVE_CATEGORIES.contains("is_active = 1"));
        assert!(SELECT_ACTIVE_CATEGORIES.contains("ORDER BY name ASC"));
        assert!(SELECT_CHILD_CATEGORIES.contains("ORDER BY name ASC"));
    }
}
