//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CategorySummary, CreateProduct, Product, ProductDetail, UpdateProduct,
};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
///
/// Holds a handle on the categories collection as well, used only for
/// the read-time category expansion.
pub struct MongoProductRepository {
    collection: Collection<Product>,
    categories: Collection<CategorySummary>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>("products"),
            categories: db.collection::<CategorySummary>("categories"),
        }
    }

    /// Create a repository with custom collection names
    pub fn with_collections(db: &Database, products: &str, categories: &str) -> Self {
        Self {
            collection: db.collection::<Product>(products),
            categories: db.collection::<CategorySummary>(categories),
        }
    }

    /// Initialize indexes for query performance and uniqueness
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Unique slug index, the arbiter for concurrent creates
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_slug_unique".to_string())
                        .build(),
                )
                .build(),
            // Category listings sorted by price
            IndexModel::builder()
                .keys(doc! { "category": 1, "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_price".to_string())
                        .build(),
                )
                .build(),
            // Newest-first listings
            IndexModel::builder()
                .keys(doc! { "createdAt": -1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_created_at".to_string())
                        .build(),
                )
                .build(),
            // Text search on name and description
            IndexModel::builder()
                .keys(doc! { "name": "text", "description": "text" })
                .options(
                    IndexOptions::builder()
                        .name("idx_text_search".to_string())
                        .build(),
                )
                .build(),
            // SKUs are globally unique; sparse because products may
            // have no variants
            IndexModel::builder()
                .keys(doc! { "variants.sku": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .sparse(true)
                        .name("idx_variant_sku_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }
}

/// Map a write error to a duplicate-key failure where applicable.
///
/// Duplicate-key violations (code 11000) are classified by the index
/// named in the server message.
fn map_write_error(err: mongodb::error::Error) -> ProductError {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == 11000 {
            return classify_duplicate(&write_error.message);
        }
    }
    ProductError::Database(err.to_string())
}

fn classify_duplicate(message: &str) -> ProductError {
    if message.contains("sku") {
        ProductError::DuplicateSku
    } else {
        ProductError::DuplicateSlug
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input)?;

        self.collection
            .insert_one(&product)
            .await
            .map_err(map_write_error)?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let product = self.collection.find_one(filter).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_detail(&self, id: Uuid) -> ProductResult<Option<ProductDetail>> {
        let Some(product) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        // Read-time join; a dangling reference expands to null
        let category_filter = doc! { "_id": to_bson(&product.category).unwrap_or(Bson::Null) };
        let category = self.categories.find_one(category_filter).await?;

        Ok(Some(ProductDetail::from_parts(product, category)))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input)?;

        self.collection
            .replace_one(filter, &updated)
            .await
            .map_err(map_write_error)?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(ProductError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product deleted successfully");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_duplicate_slug_index() {
        let err = classify_duplicate(
            "E11000 duplicate key error collection: catalog.products index: idx_slug_unique dup key: { slug: \"espresso-blend\" }",
        );
        assert!(matches!(err, ProductError::DuplicateSlug));
    }

    #[test]
    fn test_classify_duplicate_variant_sku_index() {
        let err = classify_duplicate(
            "E11000 duplicate key error collection: catalog.products index: idx_variant_sku_unique dup key: { variants.sku: \"ESP-250\" }",
        );
        assert!(matches!(err, ProductError::DuplicateSku));
    }
}
