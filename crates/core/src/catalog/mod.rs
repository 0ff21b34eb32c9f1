mod error;
mod filters;
mod operations;
mod requests;
mod types;

pub use error::CategoryError;
pub use filters::{
    ProductFilters, ProductList, ProductPage, SortField, SortOrder, DEFAULT_LIMIT, MAX_LIMIT,
};
pub use operations::{check_parent_chain, direct_children, query_products, sort_products};
pub use requests::{
    CreateCategoryRequest, CreateProductRequest, UpdateCategoryRequest, UpdateProductRequest,
};
pub use types::{Category, Product};
