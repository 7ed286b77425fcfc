//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use axum_helpers::validation_message;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductDetail, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Handles validation and orchestrates repository operations. There is
/// no uniqueness pre-check here: the store's unique slug and SKU
/// indexes resolve colliding writes, surfaced as duplicate errors.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(ProductError::Validation(format!(
                "Please provide all required fields: {}",
                missing.join(", ")
            )));
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        // Only the identifier's syntax is checked; the referenced
        // category is not required to exist
        if let Some(ref category) = input.category {
            Uuid::parse_str(category)
                .map_err(|_| ProductError::Validation("Invalid category ID".to_string()))?;
        }

        self.repository.create(input).await
    }

    /// Get a product by ID with its category expanded
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<ProductDetail> {
        self.repository
            .get_detail(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Update an existing product, returning it with its category expanded
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<ProductDetail> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(validation_message(&e)))?;

        if let Some(ref category) = input.category {
            Uuid::parse_str(category)
                .map_err(|_| ProductError::Validation("Invalid category ID".to_string()))?;
        }

        // Check if product exists
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        self.repository.update(id, input).await?;

        self.repository
            .get_detail(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product, echoing its identifier as confirmation
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Uuid> {
        // Check if product exists
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete(id).await?;
        Ok(id)
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
