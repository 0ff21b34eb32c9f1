//! Filter sets for collection queries and the pages they produce.
//!
//! A [`ProductFilters`] value is used both to query the store and to derive the
//! collection cache key, so normalization lives here as a pure function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::Product;

/// Page size used when the caller asks for zero or a negative number of rows.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a caller may request.
pub const MAX_LIMIT: i64 = 100;

/// Product field a collection can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Price,
    #[default]
    CreatedAt,
}

impl SortField {
    /// Returns the wire name, also used in cache keys and as the SQL column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "created_at" => Ok(SortField::CreatedAt),
            other => Err(format!(
                "invalid sort field '{other}' (expected name, price or created_at)"
            )),
        }
    }
}

/// Direction of a collection ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order '{other}' (expected asc or desc)")),
        }
    }
}

/// Parameters of a product collection query.
///
/// Unset optional fields do not constrain the result. `in_stock = Some(false)`
/// does not filter either, it only distinguishes the cache key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl ProductFilters {
    /// Creates an empty filter set (first page, default ordering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the query to one category.
    pub fn for_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Restricts the query to active or inactive products.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Sets the in-stock flag.
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    /// Sets the lower price bound (inclusive).
    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Sets the upper price bound (inclusive).
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Sets the free-text search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sets the page size and offset.
    pub fn paginate(mut self, limit: i64, offset: i64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Sets the ordering.
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = Some(order);
        self
    }

    /// Returns the search term if it is non-empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }

    /// Returns true when the filter set may be served from the collection cache.
    ///
    /// Free-text search and price bounds make a query uncacheable.
    pub fn is_cacheable(&self) -> bool {
        self.search_term().is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// Applies defaults so that equal logical queries compare equal.
    ///
    /// - limit `<= 0` becomes [`DEFAULT_LIMIT`], limit above [`MAX_LIMIT`] is clamped
    /// - negative offset becomes 0
    /// - unset ordering becomes `created_at desc`
    /// - an empty search term is dropped
    ///
    /// Normalizing an already normalized filter set is a no-op.
    pub fn normalize(mut self) -> Self {
        if self.limit <= 0 {
            self.limit = DEFAULT_LIMIT;
        }
        if self.limit > MAX_LIMIT {
            self.limit = MAX_LIMIT;
        }
        if self.offset < 0 {
            self.offset = 0;
        }
        self.sort_by = Some(self.sort_by.unwrap_or_default());
        self.sort_order = Some(self.sort_order.unwrap_or_default());
        if self.search.as_deref().is_some_and(str::is_empty) {
            self.search = None;
        }
        self
    }
}

/// One page of a collection query plus the unpaginated match count.
///
/// This is the payload stored under collection cache keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, total: u64) -> Self {
        Self { products, total }
    }
}

/// A page returned to callers, with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
    pub total: u64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

impl ProductList {
    /// Builds the caller-facing list from a page and the normalized filters
    /// that produced it.
    pub fn from_page(page: ProductPage, filters: &ProductFilters) -> Self {
        let end = filters.offset.saturating_add(filters.limit);
        let has_more = u64::try_from(end).is_ok_and(|end| end < page.total);
        Self {
            products: page.products,
            total: page.total,
            limit: filters.limit,
            offset: filters.offset,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_limit_defaults_to_twenty() {
        let filters = ProductFilters::new().paginate(0, 0).normalize();
        assert_eq!(filters.limit, 20);
    }

    #[test]
    fn test_normalize_negative_limit_defaults_to_twenty() {
        let filters = ProductFilters::new().paginate(-5, 0).normalize();
        assert_eq!(filters.limit, 20);
    }

    #[test]
    fn test_normalize_clamps_large_limit() {
        let filters = ProductFilters::new().paginate(500, 0).normalize();
        assert_eq!(filters.limit, 100);

        let filters = ProductFilters::new().paginate(100, 0).normalize();
        assert_eq!(filters.limit, 100);
    }

    #[test]
    fn test_normalize_negative_offset() {
        let filters = ProductFilters::new().paginate(10, -3).normalize();
        assert_eq!(filters.offset, 0);
    }

    #[test]
    fn test_normalize_default_sort() {
        let filters = ProductFilters::new().normalize();
        assert_eq!(filters.sort_by, Some(SortField::CreatedAt));
        assert_eq!(filters.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_normalize_keeps_explicit_sort() {
        let filters = ProductFilters::new()
            .sorted_by(SortField::Price, SortOrder::Asc)
            .normalize();
        assert_eq!(filters.sort_by, Some(SortField::Price));
        assert_eq!(filters.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = ProductFilters::new()
            .for_category(Uuid::nil())
            .paginate(250, -1)
            .with_search("")
            .normalize();
        assert_eq!(once.clone().normalize(), once);
        assert_eq!(once.search, None);
    }

    #[test]
    fn test_is_cacheable() {
        assert!(ProductFilters::new().is_cacheable());
        assert!(ProductFilters::new().with_search("").is_cacheable());
        assert!(ProductFilters::new().with_in_stock(true).is_cacheable());
        assert!(!ProductFilters::new().with_search("wireless").is_cacheable());
        assert!(!ProductFilters::new().with_min_price(1.0).is_cacheable());
        assert!(!ProductFilters::new().with_max_price(1.0).is_cacheable());
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!("created_at".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert!("stock".parse::<SortField>().is_err());
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_product_list_has_more() {
        let filters = ProductFilters::new().paginate(20, 0).normalize();
        let list = ProductList::from_page(ProductPage::new(vec![], 5), &filters);
        assert!(!list.has_more);

        let list = ProductList::from_page(ProductPage::new(vec![], 21), &filters);
        assert!(list.has_more);

        let list = ProductList::from_page(ProductPage::new(vec![], 20), &filters);
        assert!(!list.has_more);
    }

    #[test]
    fn test_product_page_json_shape() {
        let page = ProductPage::new(vec![], 3);
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"products":[],"total":3}"#);
    }
}
