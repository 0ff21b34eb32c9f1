//! Request payloads for catalog writes.
//!
//! Update requests carry patch semantics: only the fields that are `Some`
//! overwrite the stored value.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Category, Product};

/// Request payload for creating a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: Uuid,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image_url: String,
    pub sku: String,
}

impl CreateProductRequest {
    /// Create a new request with the required fields.
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        category_id: Uuid,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category_id,
            stock: 0,
            image_url: String::new(),
            sku: sku.into(),
        }
    }

    /// Set the product description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Set the image reference.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Convert into an active Product with a fresh ID.
    pub fn into_product(self) -> Product {
        Product::new(self.name, self.sku, self.price, self.category_id)
            .with_description(self.description)
            .with_stock(self.stock)
            .with_image_url(self.image_url)
    }
}

/// Request payload for updating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateProductRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Apply updates to an existing product and bump `updated_at`.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(sku) = self.sku {
            product.sku = sku;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        product.updated_at = Utc::now();
    }
}

/// Request payload for creating a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

impl CreateCategoryRequest {
    /// Create a new request for a root category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parent_id: None,
        }
    }

    /// Set the category description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Place the new category under a parent.
    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Convert into an active Category with a fresh ID.
    pub fn into_category(self) -> Category {
        let category = Category::new(self.name).with_description(self.description);
        match self.parent_id {
            Some(parent_id) => category.with_parent(parent_id),
            None => category,
        }
    }
}

/// Request payload for updating a category.
///
/// A parent can be set or moved but not cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Apply updates to an existing category and bump `updated_at`.
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(parent_id) = self.parent_id {
            category.parent_id = Some(parent_id);
        }
        if let Some(is_active) = self.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();
    }
}
