use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};

/// Category entity - a node in the catalog taxonomy, stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name, unique across all categories
    pub name: String,
    /// URL-safe identifier, unique, always lowercase
    pub slug: String,
    pub description: String,
    /// Image URL shown for the category
    pub image: String,
    /// Optional parent category (weak reference, no cycle check)
    #[serde(default)]
    pub parent_category: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    #[validate(
        required(message = "Category name is required"),
        length(max = 100, message = "Category name cannot exceed 100 characters")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Category slug is required"))]
    pub slug: Option<String>,
    #[validate(
        required(message = "Category description is required"),
        length(max = 500, message = "Description cannot exceed 500 characters")
    )]
    pub description: Option<String>,
    #[validate(required(message = "Category image is required"))]
    pub image: Option<String>,
    #[serde(default)]
    pub parent_category: Option<String>,
}

/// DTO for updating an existing category
///
/// Only supplied fields change; the rest keep their stored values.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    #[validate(length(max = 100, message = "Category name cannot exceed 100 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
    pub image: Option<String>,
    pub parent_category: Option<String>,
}

impl Category {
    /// Build a new category from a validated CreateCategory DTO
    ///
    /// Trims string fields and lowercases the slug before storage.
    pub fn new(input: CreateCategory) -> CategoryResult<Self> {
        let CreateCategory {
            name: Some(name),
            slug: Some(slug),
            description: Some(description),
            image: Some(image),
            parent_category,
        } = input
        else {
            return Err(CategoryError::Validation(
                "Please provide all required fields: name, slug, description, image".to_string(),
            ));
        };

        let parent_category = parse_parent(parent_category)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            name: name.trim().to_string(),
            slug: slug.trim().to_lowercase(),
            description: description.trim().to_string(),
            image: image.trim().to_string(),
            parent_category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update, refreshing `updated_at`
    pub fn apply_update(&mut self, update: UpdateCategory) -> CategoryResult<()> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(slug) = update.slug {
            self.slug = slug.trim().to_lowercase();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(image) = update.image {
            self.image = image.trim().to_string();
        }
        if update.parent_category.is_some() {
            self.parent_category = parse_parent(update.parent_category)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn parse_parent(parent: Option<String>) -> CategoryResult<Option<Uuid>> {
    parent
        .map(|id| {
            Uuid::parse_str(&id)
                .map_err(|_| CategoryError::Validation("Invalid parent category ID".to_string()))
        })
        .transpose()
}
