use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address, or if the server encounters an error while running.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_app;
/// use core_config::server::ServerConfig;
///
/// create_app(Router::new(), &ServerConfig::default()).await?;
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router with common middleware and documentation.
///
/// Sets up:
/// - OpenAPI documentation (Swagger UI at `/swagger-ui`)
/// - API routes nested under `/api`
/// - Per-request trace spans
/// - Permissive CORS (the API is consumed from arbitrary origins)
/// - The `{success: false, message: "Route not found"}` 404 fallback
///
/// Domain routers apply their own state; this function combines them
/// with the cross-cutting concerns.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_router;
/// use utoipa::OpenApi;
///
/// #[derive(OpenApi)]
/// #[openapi(paths())]
/// struct ApiDoc;
///
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
