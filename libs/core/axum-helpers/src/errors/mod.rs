pub mod handlers;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_config::Environment;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Standard error response body.
///
/// Returned for every failed request:
///
/// ```json
/// {
///   "success": false,
///   "message": "Product not found"
/// }
/// ```
///
/// Internal failures additionally carry an `error` field with the
/// underlying detail, but only when running in development.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable error message
    pub message: String,
    /// Underlying error detail, development mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }
}

/// Application error type that converts to HTTP responses.
///
/// Domain errors are mapped into these variants; the `IntoResponse`
/// impl is the single place where failures become status codes and
/// envelope bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), ErrorResponse::new(e.body_text()))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorResponse::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal server error: {}", detail);
                let mut body = ErrorResponse::new("An unexpected error occurred");
                // Internal detail is withheld outside development
                if Environment::from_env().is_development() {
                    body.error = Some(detail);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Flatten a [`ValidationErrors`] tree into one aggregated message.
///
/// Field messages are joined with `", "`; nested (struct and list)
/// validators are walked recursively so sub-record failures surface in
/// the same message.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.join(", ")
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{} is invalid ({})", field, error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(list) => {
                for nested in list.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}
