//! HTTP handlers for the Products API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestDuplicateResponse, BadRequestIdResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    ApiResponse, UuidPath, ValidatedJson,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{
    CategorySummary, CreateProduct, Product, ProductDetail, Rating, RatingInput, UpdateProduct,
    Variant, VariantInput, VariantSize,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_product, update_product, delete_product),
    components(
        schemas(
            Product, ProductDetail, CategorySummary, CreateProduct, UpdateProduct,
            Variant, VariantInput, VariantSize, Rating, RatingInput, DeletedProduct
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestDuplicateResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Deletion confirmation payload: the identifier that was removed
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedProduct {
    pub id: Uuid,
}

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message("Product created successfully", product)),
    ))
}

/// Get a product by ID, category expanded
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductDetail>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ApiResponse<ProductDetail>>> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiResponse::data(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductDetail>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ApiResponse<ProductDetail>>> {
    let product = service.update_product(id, input).await?;
    Ok(Json(ApiResponse::message(
        "Product updated successfully",
        product,
    )))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse<DeletedProduct>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ApiResponse<DeletedProduct>>> {
    let id = service.delete_product(id).await?;
    Ok(Json(ApiResponse::message(
        "Product deleted successfully",
        DeletedProduct { id },
    )))
}
