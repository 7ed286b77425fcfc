//! MongoDB connection management for the catalog services.
//!
//! Provides configuration loading, connection establishment with
//! retry, and lightweight health checks around the `mongodb` driver.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//! let collection = db.collection::<Document>("products");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{retry, retry_with_backoff, RetryConfig};
