use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

/// Health payload served at the root path.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
}

/// Health check endpoint handler.
///
/// Always returns 200 while the process is serving; the version comes
/// from the binary's Cargo metadata via [`AppInfo`].
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        success: true,
        message: "API is running...",
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router serving the health payload at `/`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = api_router.merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .with_state(app_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_payload() {
        let app_info = AppInfo {
            name: "catalog-api",
            version: "1.0.0",
        };

        let response = health_router(app_info)
            .oneshot(
                axum::http::Request::builder()
                    .uri("/")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "API is running...");
        assert_eq!(body["version"], "1.0.0");
    }
}
