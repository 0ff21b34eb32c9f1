use std::cmp::Ordering;

use uuid::Uuid;

use super::error::CategoryError;
use super::filters::{ProductFilters, ProductPage, SortField, SortOrder};
use super::types::{Category, Product};

/// Returns true if a product satisfies every constraint in the filter set.
///
/// Search matches a substring of the name or description, ignoring ASCII
/// case only, the same folding SQLite's `LIKE` applies.
/// `in_stock = Some(false)` matches everything.
fn matches_filters(product: &Product, filters: &ProductFilters, needle: Option<&str>) -> bool {
    filters.category_id.is_none_or(|id| product.category_id == id)
        && filters.min_price.is_none_or(|min| product.price >= min)
        && filters.max_price.is_none_or(|max| product.price <= max)
        && filters.is_active.is_none_or(|active| product.is_active == active)
        && (filters.in_stock != Some(true) || product.in_stock())
        && needle.is_none_or(|needle| {
            product.name.to_ascii_lowercase().contains(needle)
                || product.description.to_ascii_lowercase().contains(needle)
        })
}

/// Orders products in place by the given field, ties broken by id ascending.
pub fn sort_products(products: &mut [Product], field: SortField, order: SortOrder) {
    products.sort_by(|a, b| {
        let primary = match field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        let primary = match order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        match primary {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        }
    });
}

/// Runs a collection query over an in-memory product set.
///
/// Expects normalized filters. `total` counts every match regardless of
/// pagination.
pub fn query_products<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filters: &ProductFilters,
) -> ProductPage {
    let needle = filters.search_term().map(str::to_ascii_lowercase);
    let mut matched: Vec<Product> = products
        .into_iter()
        .filter(|product| matches_filters(product, filters, needle.as_deref()))
        .cloned()
        .collect();

    sort_products(
        &mut matched,
        filters.sort_by.unwrap_or_default(),
        filters.sort_order.unwrap_or_default(),
    );

    let total = matched.len() as u64;
    let offset = usize::try_from(filters.offset.max(0)).unwrap_or(usize::MAX);
    let limit = usize::try_from(filters.limit.max(0)).unwrap_or(usize::MAX);
    let products = matched.into_iter().skip(offset).take(limit).collect();

    ProductPage::new(products, total)
}

/// Returns the direct children of a category, ordered by name.
pub fn direct_children<'a>(
    parent_id: Uuid,
    categories: impl IntoIterator<Item = &'a Category>,
) -> Vec<Category> {
    let mut children: Vec<Category> = categories
        .into_iter()
        .filter(|category| category.parent_id == Some(parent_id))
        .map(|category| Category {
            children: Vec::new(),
            ..category.clone()
        })
        .collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));
    children
}

/// Checks that giving `category_id` a new parent keeps the tree acyclic.
///
/// `chain` is the proposed parent followed by its ancestors, nearest first.
pub fn check_parent_chain(category_id: Uuid, chain: &[Uuid]) -> Result<(), CategoryError> {
    match chain.first() {
        Some(parent_id) if *parent_id == category_id => Err(CategoryError::SelfParent),
        Some(parent_id) if chain.contains(&category_id) => {
            Err(CategoryError::ParentCycle(parent_id.to_string()))
        }
        _ => Ok(()),
    }
}
