//! Success response envelope shared by every endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope.
///
/// Every successful response carries `success: true` plus whichever of
/// the optional fields the endpoint populates:
///
/// ```json
/// {
///   "success": true,
///   "message": "Product created successfully",
///   "data": { "...": "..." }
/// }
/// ```
///
/// List endpoints add `count` with the number of returned items.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope with data only
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    /// Envelope with a message and data
    pub fn message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Envelope for list endpoints: `count` mirrors `data.len()`
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
        }
    }
}
