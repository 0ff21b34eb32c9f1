//! Pretty output formatting.

use catalog_core::catalog::{Category, Product, ProductList};

/// Format a product for display.
pub fn format_product(product: &Product) -> String {
    let status = if product.is_active { "active" } else { "inactive" };
    let mut output = format!(
        "{} [{}] ({})\n  ID: {}\n  Price: {:.2}\n  Stock: {}\n  Category: {}",
        product.name,
        product.sku,
        status,
        product.id,
        product.price,
        product.stock,
        product.category_id
    );
    if !product.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", product.description));
    }
    if !product.image_url.is_empty() {
        output.push_str(&format!("\n  Image: {}", product.image_url));
    }
    output
}

/// Format a page of products with pagination details.
pub fn format_products(list: &ProductList) -> String {
    if list.products.is_empty() {
        return format!("No products found (total {}).", list.total);
    }
    let last = list.offset + list.products.len() as i64;
    let mut output = format!(
        "PRODUCTS {}-{} of {}{}\n",
        list.offset + 1,
        last,
        list.total,
        if list.has_more { " (more)" } else { "" }
    );
    output.push_str(&"-".repeat(40));
    for product in &list.products {
        output.push_str(&format!("\n{}", format_product(product)));
        output.push('\n');
    }
    output
}

/// Format a category for display, children included.
pub fn format_category(category: &Category) -> String {
    let mut output = format!("{}\n  ID: {}", category.name, category.id);
    if let Some(parent_id) = category.parent_id {
        output.push_str(&format!("\n  Parent: {}", parent_id));
    }
    if !category.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", category.description));
    }
    if !category.is_active {
        output.push_str("\n  Inactive");
    }
    for child in &category.children {
        output.push_str(&format!("\n  - {} ({})", child.name, child.id));
    }
    output
}

/// Format categories for display.
pub fn format_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }
    let mut output = format!("CATEGORIES ({})\n", categories.len());
    output.push_str(&"-".repeat(40));
    for category in categories {
        output.push_str(&format!("\n{}", format_category(category)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::catalog::{ProductFilters, ProductPage};
    use uuid::Uuid;

    #[test]
    fn test_format_product() {
        let product = Product::new("Mouse", "MS-1", 19.5, Uuid::nil()).with_stock(3);
        let output = format_product(&product);

        assert!(output.starts_with("Mouse [MS-1] (active)"));
        assert!(output.contains("Price: 19.50"));
        assert!(output.contains("Stock: 3"));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_format_products_range() {
        let products = vec![
            Product::new("A", "A-1", 1.0, Uuid::nil()),
            Product::new("B", "B-1", 2.0, Uuid::nil()),
        ];
        let filters = ProductFilters::new().paginate(2, 2).normalize();
        let list = ProductList::from_page(ProductPage::new(products, 5), &filters);

        let output = format_products(&list);

        assert!(output.starts_with("PRODUCTS 3-4 of 5 (more)"));
    }

    #[test]
    fn test_format_empty_lists() {
        let list =
            ProductList::from_page(ProductPage::default(), &ProductFilters::new().normalize());
        assert_eq!(format_products(&list), "No products found (total 0).");
        assert_eq!(format_categories(&[]), "No categories found.");
    }

    #[test]
    fn test_format_category_children() {
        let parent = Category::new("Electronics");
        let child = Category::new("Phones").with_parent(parent.id);
        let parent = Category {
            children: vec![child.clone()],
            ..parent
        };

        let output = format_category(&parent);

        assert!(output.contains(&format!("- Phones ({})", child.id)));
    }
}
