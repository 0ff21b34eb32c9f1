//! Product CLI commands.

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use catalog_core::catalog::{
    CreateProductRequest, ProductFilters, SortField, SortOrder, UpdateProductRequest,
    DEFAULT_LIMIT,
};

/// Product management commands.
#[derive(Debug, Parser)]
pub struct ProductsCommand {
    #[command(subcommand)]
    pub action: ProductsAction,
}

/// Filters shared by `list` and `search`.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Only products in this category.
    #[arg(long)]
    pub category: Option<Uuid>,
    /// Only active (true) or inactive (false) products.
    #[arg(long)]
    pub active: Option<bool>,
    /// Only products with stock (true). `false` does not filter.
    #[arg(long)]
    pub in_stock: Option<bool>,
    /// Lower price bound.
    #[arg(long)]
    pub min_price: Option<f64>,
    /// Upper price bound.
    #[arg(long)]
    pub max_price: Option<f64>,
    /// Page size; values outside 1..=100 are normalized.
    #[arg(long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,
    /// Number of products to skip.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,
    /// Sort field: name, price or created_at.
    #[arg(long)]
    pub sort_by: Option<SortField>,
    /// Sort direction: asc or desc.
    #[arg(long)]
    pub sort_order: Option<SortOrder>,
}

impl FilterArgs {
    pub fn into_filters(self) -> ProductFilters {
        ProductFilters {
            category_id: self.category,
            min_price: self.min_price,
            max_price: self.max_price,
            search: None,
            is_active: self.active,
            in_stock: self.in_stock,
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

/// Available product actions.
#[derive(Debug, Subcommand)]
pub enum ProductsAction {
    /// Get product by ID.
    Get {
        /// Product ID.
        id: Uuid,
    },
    /// Get product by SKU.
    Sku {
        /// Stock keeping unit.
        sku: String,
    },
    /// List products.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Search product names and descriptions.
    Search {
        /// Search term (case-insensitive).
        term: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Create a new product.
    Create(CreateArgs),
    /// Update a product. Only the given fields change.
    Update {
        /// Product ID.
        id: Uuid,
        #[command(flatten)]
        patch: UpdateArgs,
    },
    /// Delete product by ID.
    Delete {
        /// Product ID.
        id: Uuid,
    },
}

/// Fields for a new product.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Product name.
    #[arg(long)]
    pub name: String,
    /// Stock keeping unit.
    #[arg(long)]
    pub sku: String,
    /// Unit price.
    #[arg(long)]
    pub price: f64,
    /// Category ID.
    #[arg(long)]
    pub category: Uuid,
    /// Product description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Units in stock.
    #[arg(long, default_value_t = 0)]
    pub stock: u32,
    /// Image reference.
    #[arg(long, default_value = "")]
    pub image_url: String,
}

impl CreateArgs {
    pub fn into_request(self) -> CreateProductRequest {
        CreateProductRequest::new(self.name, self.sku, self.price, self.category)
            .with_description(self.description)
            .with_stock(self.stock)
            .with_image_url(self.image_url)
    }
}

/// Product fields to overwrite.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub category: Option<Uuid>,
    #[arg(long)]
    pub stock: Option<u32>,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long)]
    pub sku: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl UpdateArgs {
    pub fn into_request(self) -> UpdateProductRequest {
        UpdateProductRequest {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category,
            stock: self.stock,
            image_url: self.image_url,
            sku: self.sku,
            is_active: self.active,
        }
    }
}
