//! Category CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use catalog_core::catalog::{CreateCategoryRequest, UpdateCategoryRequest};

/// Category management commands.
#[derive(Debug, Parser)]
pub struct CategoriesCommand {
    #[command(subcommand)]
    pub action: CategoriesAction,
}

/// Available category actions.
#[derive(Debug, Subcommand)]
pub enum CategoriesAction {
    /// List active categories.
    List,
    /// Get category by ID, with its direct children.
    Get {
        /// Category ID.
        id: Uuid,
    },
    /// Get category by name.
    Find {
        /// Category name.
        name: String,
    },
    /// Create a new category.
    Create {
        /// Category name.
        #[arg(long)]
        name: String,
        /// Category description.
        #[arg(long, default_value = "")]
        description: String,
        /// Parent category ID.
        #[arg(long)]
        parent: Option<Uuid>,
    },
    /// Update a category. Only the given fields change.
    Update {
        /// Category ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New parent category ID.
        #[arg(long)]
        parent: Option<Uuid>,
        /// Activate (true) or deactivate (false).
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete category by ID.
    Delete {
        /// Category ID.
        id: Uuid,
    },
}

pub fn create_request(
    name: String,
    description: String,
    parent: Option<Uuid>,
) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name,
        description,
        parent_id: parent,
    }
}

pub fn update_request(
    name: Option<String>,
    description: Option<String>,
    parent: Option<Uuid>,
    active: Option<bool>,
) -> UpdateCategoryRequest {
    UpdateCategoryRequest {
        name,
        description,
        parent_id: parent,
        is_active: active,
    }
}
