//! Cache key strategy for the product namespace.
//!
//! Keys are a persisted convention shared with other deployments of the
//! service and must stay bit-exact:
//!
//! - single products: `product:<uuid>`
//! - collections: `products:list[:cat_<uuid>][:active_<bool>][:stock_<bool>]:limit_<n>:offset_<n>:sort_<field>_<dir>`

use std::fmt::Write;

use uuid::Uuid;

use crate::catalog::ProductFilters;

const PRODUCT_LIST_PREFIX: &str = "products:";

/// Returns the cache key for a single product.
pub fn product_key(product_id: Uuid) -> String {
    format!("product:{}", product_id)
}

/// Returns the cache key for a collection query, or `None` if the query must
/// not be cached.
///
/// Filters are normalized first, so two filter sets that differ only in
/// defaulted fields share a key. Search terms and price bounds yield `None`.
///
/// # Examples
///
/// ```
/// use catalog_core::cache::product_list_key;
/// use catalog_core::catalog::ProductFilters;
///
/// let key = product_list_key(&ProductFilters::new().with_in_stock(true));
/// assert_eq!(
///     key.as_deref(),
///     Some("products:list:stock_true:limit_20:offset_0:sort_created_at_desc")
/// );
///
/// assert_eq!(product_list_key(&ProductFilters::new().with_search("mouse")), None);
/// ```
pub fn product_list_key(filters: &ProductFilters) -> Option<String> {
    let filters = filters.clone().normalize();
    if !filters.is_cacheable() {
        return None;
    }

    let mut key = String::from("products:list");
    // Writing to a String cannot fail.
    if let Some(category_id) = filters.category_id {
        let _ = write!(key, ":cat_{}", category_id);
    }
    if let Some(is_active) = filters.is_active {
        let _ = write!(key, ":active_{}", is_active);
    }
    if let Some(in_stock) = filters.in_stock {
        let _ = write!(key, ":stock_{}", in_stock);
    }
    let _ = write!(
        key,
        ":limit_{}:offset_{}:sort_{}_{}",
        filters.limit,
        filters.offset,
        filters.sort_by.unwrap_or_default(),
        filters.sort_order.unwrap_or_default()
    );
    Some(key)
}

/// Returns the pattern matching every collection key.
pub fn product_list_pattern() -> String {
    format!("{}*", PRODUCT_LIST_PREFIX)
}
