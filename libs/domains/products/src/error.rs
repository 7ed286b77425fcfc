use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("A product with this slug already exists")]
    DuplicateSlug,

    #[error("A variant with this SKU already exists")]
    DuplicateSku,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses.
///
/// Uniqueness conflicts are caller errors in this API and map to 400.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::DuplicateSlug => {
                AppError::BadRequest("A product with this slug already exists".to_string())
            }
            ProductError::DuplicateSku => {
                AppError::BadRequest("A variant with this SKU already exists".to_string())
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
