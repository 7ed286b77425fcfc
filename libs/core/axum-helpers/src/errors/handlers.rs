use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::ErrorResponse;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new("Route not found"));

    (StatusCode::NOT_FOUND, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
