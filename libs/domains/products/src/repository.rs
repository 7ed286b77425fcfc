use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductDetail, UpdateProduct};

/// Repository trait for Product persistence
///
/// Defines the data access interface for products; implementations
/// can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Get a product by ID with its category reference expanded
    async fn get_detail(&self, id: Uuid) -> ProductResult<Option<ProductDetail>>;

    /// Apply a partial update to an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
