//! API routes module

pub mod categories;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/categories", categories::router(state))
}

/// Initialize database indexes for every domain
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await?;
    categories::init_indexes(state).await
}
