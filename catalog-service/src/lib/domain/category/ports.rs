use async_trait::async_trait;

use crate::domain::book::models::Book;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a category whose name is not yet taken.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another category has the name, ignoring case
    /// * `DatabaseError` - Database operation failed
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Retrieve category by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError>;

    /// Retrieve category by name, ignoring case.
    ///
    /// # Errors
    /// * `NotFoundByName` - No category has this name
    /// * `DatabaseError` - Database operation failed
    async fn find_category_by_name(&self, name: &CategoryName) -> Result<Category, CategoryError>;

    /// Check whether a category with this identifier exists.
    async fn category_exists(&self, id: CategoryId) -> Result<bool, CategoryError>;

    /// Retrieve all categories ordered by identifier.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryError>;

    /// Rename an existing category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - A different category has the name, ignoring case
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete a category nothing references.
    ///
    /// Books are checked before existence.
    ///
    /// # Errors
    /// * `HasBooks` - At least one book belongs to the category
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError>;

    /// Retrieve the books filed under a category.
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_category_books(&self, id: CategoryId) -> Result<Vec<Book>, CategoryError>;
}

/// Persistence operations for category aggregate.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Insert a category unless one with the same name (ignoring case) exists.
    ///
    /// # Returns
    /// The stored row, or None when the name was already taken
    async fn create_if_absent(
        &self,
        command: &CreateCategoryCommand,
    ) -> Result<Option<Category>, CategoryError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Case-insensitive lookup by name.
    async fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, CategoryError>;

    /// Whether a category other than `id` has the name, ignoring case.
    async fn name_taken_by_other(
        &self,
        name: &CategoryName,
        id: CategoryId,
    ) -> Result<bool, CategoryError>;

    async fn exists(&self, id: CategoryId) -> Result<bool, CategoryError>;

    /// Whether any book references the category.
    async fn has_books(&self, id: CategoryId) -> Result<bool, CategoryError>;

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Apply a rename.
    ///
    /// # Returns
    /// The updated row, or None when no category has this identifier
    async fn update(
        &self,
        id: CategoryId,
        command: &UpdateCategoryCommand,
    ) -> Result<Option<Category>, CategoryError>;

    /// Remove a category.
    ///
    /// # Returns
    /// Whether a row was deleted
    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryError>;
}
