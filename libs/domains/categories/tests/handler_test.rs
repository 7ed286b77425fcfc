//! Handler tests for the Categories domain
//!
//! These drive the domain router end to end over an in-memory
//! repository: request deserialization, status codes, and the
//! `{success, message, count, data}` envelope.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_categories::{
    handlers, Category, CategoryError, CategoryRepository, CategoryResult, CategoryService,
    CreateCategory, UpdateCategory,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

#[derive(Default)]
struct InMemoryCategoryRepository {
    categories: Mutex<HashMap<Uuid, Category>>,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let category = Category::new(input)?;
        let mut categories = self.categories.lock().unwrap();
        // The unique slug index stands in for the store's second line
        // of defense
        if categories.values().any(|c| c.slug == category.slug) {
            return Err(CategoryError::DuplicateSlug);
        }
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&id).cloned())
    }

    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .values()
            .any(|c| c.name == name))
    }

    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        let category = categories.get_mut(&id).ok_or(CategoryError::NotFound(id))?;
        category.apply_update(input)?;
        Ok(category.clone())
    }
}

fn app() -> axum::Router {
    let service = CategoryService::new(InMemoryCategoryRepository::default());
    handlers::router(service)
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_category(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn category_payload(name: &str, slug: &str) -> Value {
    json!({
        "name": name,
        "slug": slug,
        "description": "Test category",
        "image": "https://cdn.example.com/cat.png"
    })
}

#[tokio::test]
async fn test_create_category_returns_201_with_envelope() {
    let response = app()
        .oneshot(post_category(category_payload("Coffee", "coffee")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Category created successfully");
    assert_eq!(body["data"]["name"], "Coffee");
    assert_eq!(body["data"]["slug"], "coffee");
    assert!(body["data"]["_id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_category_missing_name_is_400() {
    let response = app()
        .oneshot(post_category(json!({
            "slug": "coffee",
            "description": "Test",
            "image": "https://cdn.example.com/cat.png"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Category name is required"));
}

#[tokio::test]
async fn test_create_duplicate_name_is_400() {
    let app = app();

    let first = app
        .clone()
        .oneshot(post_category(category_payload("Coffee", "coffee")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Same name, different slug: rejected by the pre-check
    let second = app
        .oneshot(post_category(category_payload("Coffee", "espresso")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = json_body(second.into_body()).await;
    assert_eq!(body["message"], "Category with this name already exists");
}

#[tokio::test]
async fn test_create_duplicate_slug_is_400() {
    let app = app();

    app.clone()
        .oneshot(post_category(category_payload("Coffee", "coffee")))
        .await
        .unwrap();

    let second = app
        .oneshot(post_category(category_payload("Tea", "coffee")))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = json_body(second.into_body()).await;
    assert_eq!(body["message"], "A category with this slug already exists");
}

#[tokio::test]
async fn test_list_categories_carries_count() {
    let app = app();

    for (name, slug) in [("Coffee", "coffee"), ("Tea", "tea")] {
        app.clone()
            .oneshot(post_category(category_payload(name, slug)))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_category_malformed_id_is_400() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/not-an-id")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name": "Renamed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_update_category_unknown_id_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", Uuid::now_v7()))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name": "Renamed"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn test_update_category_partial_fields() {
    let app = app();

    let created = app
        .clone()
        .oneshot(post_category(category_payload("Coffee", "coffee")))
        .await
        .unwrap();
    let created_body = json_body(created.into_body()).await;
    let id = created_body["data"]["_id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"description": "Fresh roasted"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Category updated successfully");
    assert_eq!(body["data"]["description"], "Fresh roasted");
    // Unsupplied fields keep their stored values
    assert_eq!(body["data"]["name"], "Coffee");
    assert_eq!(body["data"]["slug"], "coffee");
}
