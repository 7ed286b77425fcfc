//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{validation_message, AppError};
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then runs the `validator` rules of
/// the target type. All field failures are aggregated into a single
/// 400 response message.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateCategory {
///     #[validate(required(message = "Category name is required"))]
///     name: Option<String>,
/// }
///
/// async fn create_category(ValidatedJson(payload): ValidatedJson<CreateCategory>) {
///     // payload passed all field validators
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;

        data.validate()
            .map_err(|e| AppError::BadRequest(validation_message(&e)))?;

        Ok(ValidatedJson(data))
    }
}
