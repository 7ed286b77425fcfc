//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Product name is required, Product must have between 1 and 10 images"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid identifier",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid ID: not-an-id"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Duplicate value for a unique field",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "A product with this slug already exists"
    })
)]
pub struct BadRequestDuplicateResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
