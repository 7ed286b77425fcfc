//! Application state management

use mongodb::{Client, Database};

/// Shared application state
///
/// The client owns the connection pool for the whole process lifetime;
/// it is dropped once the server has drained.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mongo_client: Client,
    pub db: Database,
}
