//! Categories Domain
//!
//! Catalog taxonomy management backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, uniqueness pre-checks
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

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, CreateCategory, UpdateCategory};
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
