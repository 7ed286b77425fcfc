use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};

/// Repository trait for Category persistence
///
/// Defines the data access interface for categories; implementations
/// can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List all categories in natural storage order
    async fn list(&self) -> CategoryResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    /// Get a category by ID
    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>>;

    /// Check whether a category with the given name exists
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool>;

    /// Apply a partial update to an existing category
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category>;
}
