//! Category Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use axum_helpers::validation_message;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Category service providing business logic operations
///
/// Handles validation and the name-uniqueness pre-check before
/// delegating persistence to the repository. The pre-check and the
/// subsequent insert are not atomic; a concurrent writer that slips
/// between them is rejected by the unique index instead.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new CategoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.list().await
    }

    /// Create a new category
    #[instrument(skip(self, input), fields(category_name = ?input.name))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        // Name presence gets its own check so a blank name reports the
        // same failure as a missing one
        let name = input.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(CategoryError::Validation(
                "Category name is required".to_string(),
            ));
        }

        input
            .validate()
            .map_err(|e| CategoryError::Validation(validation_message(&e)))?;

        // Explicit uniqueness pre-check; the unique index backstops it
        if self.repository.exists_by_name(name).await? {
            return Err(CategoryError::DuplicateName);
        }

        self.repository.create(input).await
    }

    /// Update an existing category
    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpdateCategory,
    ) -> CategoryResult<Category> {
        input
            .validate()
            .map_err(|e| CategoryError::Validation(validation_message(&e)))?;

        // A supplied name may change but never go blank
        if let Some(ref name) = input.name {
            if name.trim().is_empty() {
                return Err(CategoryError::Validation(
                    "Category name is required".to_string(),
                ));
            }
        }

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        // Re-check name uniqueness only when the name actually changes
        if let Some(ref new_name) = input.name {
            let new_name = new_name.trim();
            if new_name != existing.name && self.repository.exists_by_name(new_name).await? {
                return Err(CategoryError::DuplicateName);
            }
        }

        self.repository.update(id, input).await
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;

    fn create_input() -> CreateCategory {
        CreateCategory {
            name: Some("Coffee".to_string()),
            slug: Some("coffee".to_string()),
            description: Some("All things coffee".to_string()),
            image: Some("https://cdn.example.com/coffee.png".to_string()),
            parent_category: None,
        }
    }

    #[tokio::test]
    async fn test_create_category_succeeds() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_exists_by_name()
            .with(eq("Coffee"))
            .returning(|_| Ok(false));
        mock_repo
            .expect_create()
            .returning(|input| Category::new(input));

        let service = CategoryService::new(mock_repo);
        let category = service.create_category(create_input()).await.unwrap();

        assert_eq!(category.name, "Coffee");
        assert_eq!(category.slug, "coffee");
    }

    #[tokio::test]
    async fn test_create_category_missing_name() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(mock_repo);

        let result = service
            .create_category(CreateCategory {
                name: None,
                ..create_input()
            })
            .await;

        match result {
            Err(CategoryError::Validation(msg)) => {
                assert_eq!(msg, "Category name is required");
            }
            other => panic!("expected validation error, got {:?}", other.map(|c| c.name)),
        }
    }

    #[tokio::test]
    async fn test_create_category_blank_name() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(mock_repo);

        let result = service
            .create_category(CreateCategory {
                name: Some("   ".to_string()),
                ..create_input()
            })
            .await;

        assert!(matches!(result, Err(CategoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_category_duplicate_name() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_exists_by_name()
            .with(eq("Coffee"))
            .returning(|_| Ok(true));

        let service = CategoryService::new(mock_repo);
        let result = service.create_category(create_input()).await;

        assert!(matches!(result, Err(CategoryError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_create_category_name_too_long() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(mock_repo);

        let result = service
            .create_category(CreateCategory {
                name: Some("x".repeat(101)),
                ..create_input()
            })
            .await;

        match result {
            Err(CategoryError::Validation(msg)) => {
                assert!(msg.contains("Category name cannot exceed 100 characters"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|c| c.name)),
        }
    }

    #[tokio::test]
    async fn test_update_category_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();
        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.update_category(id, UpdateCategory::default()).await;

        assert!(matches!(result, Err(CategoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_category_name_conflict() {
        let mut mock_repo = MockCategoryRepository::new();
        let existing = Category::new(create_input()).unwrap();
        let id = existing.id;

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_exists_by_name()
            .with(eq("Tea"))
            .returning(|_| Ok(true));

        let service = CategoryService::new(mock_repo);
        let result = service
            .update_category(
                id,
                UpdateCategory {
                    name: Some("Tea".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(CategoryError::DuplicateName)));
    }

    #[tokio::test]
    async fn test_update_category_same_name_skips_check() {
        let mut mock_repo = MockCategoryRepository::new();
        let existing = Category::new(create_input()).unwrap();
        let id = existing.id;

        mock_repo
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        // No exists_by_name expectation: renaming to the current name
        // must not trigger the uniqueness check
        mock_repo
            .expect_update()
            .returning(|_, update| {
                let mut category = Category::new(create_input()).unwrap();
                category.apply_update(update)?;
                Ok(category)
            });

        let service = CategoryService::new(mock_repo);
        let updated = service
            .update_category(
                id,
                UpdateCategory {
                    name: Some("Coffee".to_string()),
                    description: Some("Updated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.description, "Updated");
    }
}
