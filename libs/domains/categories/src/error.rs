use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(Uuid),

    #[error("Category with this name already exists")]
    DuplicateName,

    #[error("A category with this slug already exists")]
    DuplicateSlug,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

/// Convert CategoryError to AppError for standardized error responses.
///
/// Uniqueness conflicts are caller errors in this API and map to 400.
impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound("Category not found".to_string()),
            CategoryError::DuplicateName => {
                AppError::BadRequest("Category with this name already exists".to_string())
            }
            CategoryError::DuplicateSlug => {
                AppError::BadRequest("A category with this slug already exists".to_string())
            }
            CategoryError::Validation(msg) => AppError::BadRequest(msg),
            CategoryError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CategoryError {
    fn from(err: mongodb::error::Error) -> Self {
        CategoryError::Database(err.to_string())
    }
}
