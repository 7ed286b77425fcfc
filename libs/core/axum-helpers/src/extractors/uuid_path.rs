//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// A malformed identifier is rejected with a 400 validation failure
/// before the handler runs, so it can never be mistaken for a missing
/// entity.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_product(UuidPath(id): UuidPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid ID: {}", id))),
        }
    }
}
