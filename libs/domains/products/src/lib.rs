//! Products Domain
//!
//! Product catalog management backed by MongoDB, including embedded
//! variant and rating sub-records and read-time category expansion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = MongoProductRepository::new(&db);
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CategorySummary, CreateProduct, Product, ProductDetail, Rating, RatingInput, UpdateProduct,
    Variant, VariantInput, VariantSize,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
