use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::models::Book;
use crate::domain::book::ports::BookRepository;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;

/// Domain service implementation for category operations.
///
/// Books are read through their own repository so the dependents guard and
/// the per-category listing stay inside the category rules.
pub struct CategoryService<CR, BR>
where
    CR: CategoryRepository,
    BR: BookRepository,
{
    repository: Arc<CR>,
    book_repository: Arc<BR>,
}

impl<CR, BR> CategoryService<CR, BR>
where
    CR: CategoryRepository,
    BR: BookRepository,
{
    pub fn new(repository: Arc<CR>, book_repository: Arc<BR>) -> Self {
        Self {
            repository,
            book_repository,
        }
    }
}

#[async_trait]
impl<CR, BR> CategoryServicePort for CategoryService<CR, BR>
where
    CR: CategoryRepository,
    BR: BookRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        if self.repository.find_by_name(&command.name).await?.is_some() {
            tracing::debug!(name = %command.name, "Category name already in use");
            return Err(CategoryError::NameAlreadyExists(command.name.to_string()));
        }

        // A concurrent insert of the same name lands here as None.
        self.repository
            .create_if_absent(&command)
            .await?
            .ok_or_else(|| CategoryError::NameAlreadyExists(command.name.to_string()))
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    async fn find_category_by_name(
        &self,
        name: &CategoryName,
    ) -> Result<Category, CategoryError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| CategoryError::NotFoundByName(name.to_string()))
    }

    async fn category_exists(&self, id: CategoryId) -> Result<bool, CategoryError> {
        self.repository.exists(id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.list_all().await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        if !self.repository.exists(id).await? {
            return Err(CategoryError::NotFound(id));
        }

        if self
            .repository
            .name_taken_by_other(&command.name, id)
            .await?
        {
            tracing::debug!(
                category_id = %id,
                name = %command.name,
                "Category name already in use"
            );
            return Err(CategoryError::NameAlreadyExists(command.name.to_string()));
        }

        self.repository
            .update(id, &command)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        if self.repository.has_books(id).await? {
            tracing::warn!(category_id = %id, "Refusing to delete category with books");
            return Err(CategoryError::HasBooks(id));
        }

        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CategoryError::NotFound(id))
        }
    }

    async fn list_category_books(&self, id: CategoryId) -> Result<Vec<Book>, CategoryError> {
        if !self.repository.exists(id).await? {
            return Err(CategoryError::NotFound(id));
        }

        self.book_repository
            .find_by_category(id)
            .await
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))
    }
}
