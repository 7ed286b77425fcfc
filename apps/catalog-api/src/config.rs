//! Configuration for the Catalog API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration, assembled once at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
        })
    }
}
