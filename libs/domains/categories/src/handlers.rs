//! HTTP handlers for the Categories API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestDuplicateResponse, BadRequestIdResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
    ApiResponse, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, create_category, update_category),
    components(
        schemas(Category, CreateCategory, UpdateCategory),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestDuplicateResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", put(update_category))
        .with_state(shared_service)
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<Category>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
) -> CategoryResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = service.list_categories().await?;
    Ok(Json(ApiResponse::list(categories)))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<Category>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CategoryResult<impl IntoResponse> {
    let category = service.create_category(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message("Category created successfully", category)),
    ))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<Category>),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCategory>,
) -> CategoryResult<Json<ApiResponse<Category>>> {
    let category = service.update_category(id, input).await?;
    Ok(Json(ApiResponse::message(
        "Category updated successfully",
        category,
    )))
}
