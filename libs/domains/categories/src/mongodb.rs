//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    /// Create a new MongoCategoryRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Category>("categories");
        Self { collection }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Category>(collection_name);
        Self { collection }
    }

    /// Initialize indexes; the unique name/slug indexes are the second
    /// line of defense behind the service-level pre-checks.
    pub async fn init_indexes(&self) -> CategoryResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_name_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "slug": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_slug_unique".to_string())
                        .build(),
                )
                .build(),
            // Subcategory lookups
            IndexModel::builder()
                .keys(doc! { "parentCategory": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_parent_category".to_string())
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
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Category indexes created successfully");
        Ok(())
    }
}

/// Map a write error to a duplicate-key failure where applicable.
///
/// Duplicate-key violations (code 11000) are classified by the index
/// named in the server message.
fn map_write_error(err: mongodb::error::Error) -> CategoryError {
    use mongodb::error::{ErrorKind, WriteFailure};

    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == 11000 {
            return classify_duplicate(&write_error.message);
        }
    }
    CategoryError::Database(err.to_string())
}

fn classify_duplicate(message: &str) -> CategoryError {
    if message.contains("slug") {
        CategoryError::DuplicateSlug
    } else {
        CategoryError::DuplicateName
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> CategoryResult<Vec<Category>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let categories: Vec<Category> = cursor.try_collect().await?;

        Ok(categories)
    }

    #[instrument(skip(self, input), fields(category_name = ?input.name))]
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let category = Category::new(input)?;

        self.collection
            .insert_one(&category)
            .await
            .map_err(map_write_error)?;

        tracing::info!(category_id = %category.id, "Category created successfully");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let category = self.collection.find_one(filter).await?;
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> CategoryResult<bool> {
        let filter = doc! { "name": name };
        let count = self.collection.count_documents(filter).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateCategory) -> CategoryResult<Category> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input)?;

        self.collection
            .replace_one(filter, &updated)
            .await
            .map_err(map_write_error)?;

        tracing::info!(category_id = %id, "Category updated successfully");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_duplicate_slug_index() {
        let err = classify_duplicate(
            "E11000 duplicate key error collection: catalog.categories index: idx_slug_unique dup key: { slug: \"beans\" }",
        );
        assert!(matches!(err, CategoryError::DuplicateSlug));
    }

    #[test]
    fn test_classify_duplicate_name_index() {
        let err = classify_duplicate(
            "E11000 duplicate key error collection: catalog.categories index: idx_name_unique dup key: { name: \"Beans\" }",
        );
        assert!(matches!(err, CategoryError::DuplicateName));
    }
}
