//! # Axum Helpers
//!
//! Shared plumbing for the catalog HTTP services.
//!
//! ## Modules
//!
//! - **[`response`]**: the `{success, message, count, data}` success envelope
//! - **[`errors`]**: error translation into `{success: false, message}` bodies
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

// Re-export error types
pub use errors::{validation_message, AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};

// Re-export the success envelope
pub use response::ApiResponse;

// Re-export server types
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
