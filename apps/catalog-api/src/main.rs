//! Catalog API - REST server for the product catalog

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // A failed initial connection propagates out of main and the
    // process exits with a non-zero code
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Unique and search indexes must exist before the first request
    api::init_indexes(&state).await?;

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} on port {}. Environment: {:?}",
        state.config.app.name, state.config.server.port, state.config.environment
    );

    create_app(app, &state.config.server).await?;

    info!("Shutting down: closing MongoDB connection");
    drop(state.mongo_client);

    info!("Catalog API shutdown complete");
    Ok(())
}
