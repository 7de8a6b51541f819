use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookChanges;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::category::models::CategoryId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a book in an existing category.
    ///
    /// Checks run in order: category, title, release year.
    ///
    /// # Errors
    /// * `InvalidCategory` - Referenced category does not exist
    /// * `TitleAlreadyExists` - Another book has the title, ignoring case
    /// * `InvalidReleaseYear` - Year outside 1980..=2024
    /// * `DatabaseError` - Database operation failed
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError>;

    /// Retrieve book by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_book(&self, id: BookId) -> Result<Book, BookError>;

    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Replace every mutable field of a book.
    ///
    /// Checks run in order: existence, category, release year, title.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `InvalidCategory` - Referenced category does not exist
    /// * `InvalidReleaseYear` - Year outside 1980..=2024
    /// * `TitleAlreadyExists` - A different book has the title, ignoring case
    /// * `DatabaseError` - Database operation failed
    async fn update_book(&self, id: BookId, command: UpdateBookCommand) -> Result<Book, BookError>;

    /// Delete a book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, id: BookId) -> Result<(), BookError>;
}

/// Persistence operations for book aggregate.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Insert a book unless one with the same title (ignoring case) exists.
    ///
    /// # Returns
    /// The stored row, or None when the title was already taken
    ///
    /// # Errors
    /// * `InvalidCategory` - Category vanished before the insert
    /// * `DatabaseError` - Database operation failed
    async fn create_if_absent(&self, book: &NewBook) -> Result<Option<Book>, BookError>;

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError>;

    /// Case-insensitive lookup by title.
    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>, BookError>;

    /// Whether a book other than `id` has the title, ignoring case.
    async fn title_taken_by_other(&self, title: &BookTitle, id: BookId) -> Result<bool, BookError>;

    async fn exists(&self, id: BookId) -> Result<bool, BookError>;

    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError>;

    /// Overwrite the mutable fields of a book.
    ///
    /// # Returns
    /// The updated row, or None when no book has this identifier
    async fn update(&self, id: BookId, changes: &BookChanges) -> Result<Option<Book>, BookError>;

    /// Remove a book.
    ///
    /// # Returns
    /// Whether a row was deleted
    async fn delete(&self, id: BookId) -> Result<bool, BookError>;
}
