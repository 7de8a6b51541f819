use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::is_valid_release_year;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookChanges;
use crate::domain::book::models::BookId;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::book::ports::BookRepository;
use crate::domain::book::ports::BookServicePort;
use crate::domain::category::models::CategoryId;
use crate::domain::category::ports::CategoryRepository;

/// Domain service implementation for book operations.
pub struct BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    repository: Arc<BR>,
    category_repository: Arc<CR>,
}

impl<BR, CR> BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<BR>, category_repository: Arc<CR>) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    async fn ensure_category(&self, id: CategoryId) -> Result<(), BookError> {
        let exists = self
            .category_repository
            .exists(id)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        if exists {
            Ok(())
        } else {
            tracing::debug!(category_id = %id, "Book references unknown category");
            Err(BookError::InvalidCategory(id))
        }
    }
}

fn ensure_release_year(year: i32) -> Result<(), BookError> {
    if is_valid_release_year(year) {
        Ok(())
    } else {
        Err(BookError::InvalidReleaseYear(year))
    }
}

#[async_trait]
impl<BR, CR> BookServicePort for BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    async fn create_book(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        self.ensure_category(command.category_id).await?;

        if self
            .repository
            .find_by_title(&command.title)
            .await?
            .is_some()
        {
            tracing::debug!(title = %command.title, "Book title already in use");
            return Err(BookError::TitleAlreadyExists(command.title.to_string()));
        }

        ensure_release_year(command.release_year)?;

        let book = NewBook::from(command);
        self.repository
            .create_if_absent(&book)
            .await?
            .ok_or_else(|| BookError::TitleAlreadyExists(book.title.to_string()))
    }

    async fn get_book(&self, id: BookId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id))
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.repository.list_all().await
    }

    async fn update_book(
        &self,
        id: BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        if !self.repository.exists(id).await? {
            return Err(BookError::NotFound(id));
        }

        self.ensure_category(command.category_id).await?;
        ensure_release_year(command.release_year)?;

        if self
            .repository
            .title_taken_by_other(&command.title, id)
            .await?
        {
            tracing::debug!(book_id = %id, title = %command.title, "Book title already in use");
            return Err(BookError::TitleAlreadyExists(command.title.to_string()));
        }

        let changes = BookChanges::from(command);
        self.repository
            .update(id, &changes)
            .await?
            .ok_or(BookError::NotFound(id))
    }

    async fn delete_book(&self, id: BookId) -> Result<(), BookError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(BookError::NotFound(id))
        }
    }
}
