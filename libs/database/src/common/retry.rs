use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry configuration for database connections
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,

    /// Initial delay between retries in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum delay between retries in milliseconds
    pub max_delay_ms: u64,

    /// Multiplier for exponential backoff (typically 2.0)
    pub backoff_multiplier: f64,

    /// Whether to add jitter to prevent thundering herd
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Create a new retry configuration with defaults
    ///
    /// Defaults:
    /// - max_retries: 3
    /// - initial_delay_ms: 100
    /// - max_delay_ms: 5000
    /// - backoff_multiplier: 2.0
    /// - use_jitter: true
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff
///
/// # Example
/// ```ignore
/// use database::common::{retry_with_backoff, RetryConfig};
///
/// let config = RetryConfig::new().with_max_retries(5);
/// let client = retry_with_backoff(|| mongodb::connect(&url), config).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!("Operation succeeded after {} retries", attempt);
                }
                return Ok(result);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!(
                        "Operation failed after {} attempts: {}",
                        config.max_retries, e
                    );
                    return Err(e);
                }

                let current_delay = if config.use_jitter {
                    apply_jitter(delay)
                } else {
                    delay
                };

                debug!(
                    "Operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                    attempt, config.max_retries, e, current_delay
                );

                tokio::time::sleep(Duration::from_millis(current_delay)).await;

                delay =
                    ((delay as f64 * config.backoff_multiplier) as u64).min(config.max_delay_ms);
            }
        }
    }
}

/// Retry an async operation with the default configuration
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Apply jitter to a delay value to prevent thundering herd
///
/// Uses a pseudo-random value between 50% and 100% of the original delay.
fn apply_jitter(delay: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let random_factor =
        (RandomState::new().hash_one(std::time::SystemTime::now()) % 50) as f64 / 100.0 + 0.5;

    (delay as f64 * random_factor) as u64
}
