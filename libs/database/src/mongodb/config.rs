use core_config::{ConfigError, FromEnv};

/// MongoDB connection settings.
///
/// Construct manually or load from environment variables.
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "catalog");
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// MongoDB connection URL
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Database name to use
    pub database: String,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    /// Maximum number of connections in the pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config with just a URL and the default database name
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "catalog".to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Create a config with a specific database name
    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    /// Set the application name reported in server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Load MongoConfig from environment variables
///
/// Environment variables:
/// - `MONGODB_URI` or `MONGODB_URL` (required) - connection string
/// - `MONGODB_DATABASE` (optional, default: "catalog") - database name
/// - `MONGODB_APP_NAME` (optional) - application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var("MONGODB_URI")
            .or_else(|_| std::env::var("MONGODB_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URI or MONGODB_URL".to_string()))?;

        let database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "catalog".to_string());

        let app_name = std::env::var("MONGODB_APP_NAME").ok();

        let max_pool_size = std::env::var("MONGODB_MAX_POOL_SIZE")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_MAX_POOL_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        let min_pool_size = std::env::var("MONGODB_MIN_POOL_SIZE")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_MIN_POOL_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        let connect_timeout_secs = std::env::var("MONGODB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_CONNECT_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        let server_selection_timeout_secs = std::env::var("MONGODB_SERVER_SELECTION_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "MONGODB_SERVER_SELECTION_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            url,
            database,
            app_name,
            max_pool_size,
            min_pool_size,
            connect_timeout_secs,
            server_selection_timeout_secs,
        })
    }
}
