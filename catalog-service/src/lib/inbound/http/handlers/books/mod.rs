use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::book::errors::BookTitleError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::CreateBookCommand;
use crate::domain::book::models::UpdateBookCommand;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::ApiError;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.as_str().to_string(),
            description: book.description.clone(),
            image_url: book.image_url.clone(),
            release_year: book.release_year,
            price: book.price,
            total_page: book.total_page,
            thickness: book.thickness.to_string(),
            category_id: book.category_id.0,
            created_at: book.created_at,
            created_by: book.created_by.clone(),
            modified_at: book.modified_at,
            modified_by: book.modified_by.clone(),
        }
    }
}

/// HTTP request body for creating or replacing a book (raw JSON).
///
/// Any `thickness` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
    release_year: i32,
    #[serde(default)]
    price: i32,
    total_page: i32,
    category_id: i32,
    #[serde(default)]
    created_by: String,
    #[serde(default)]
    modified_by: String,
}

#[derive(Debug, Clone, Error)]
enum ParseBookRequestError {
    #[error("Invalid title: {0}")]
    Title(#[from] BookTitleError),

    #[error("Price must not be negative, got {0}")]
    NegativePrice(i32),

    #[error("Total page must not be negative, got {0}")]
    NegativeTotalPage(i32),
}

impl BookRequest {
    fn validated_title(&self) -> Result<BookTitle, ParseBookRequestError> {
        let title = BookTitle::new(self.title.as_str())?;
        if self.price < 0 {
            return Err(ParseBookRequestError::NegativePrice(self.price));
        }
        if self.total_page < 0 {
            return Err(ParseBookRequestError::NegativeTotalPage(self.total_page));
        }
        Ok(title)
    }

    fn try_into_create_command(self) -> Result<CreateBookCommand, ParseBookRequestError> {
        Ok(CreateBookCommand {
            title: self.validated_title()?,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            category_id: CategoryId(self.category_id),
            created_by: self.created_by,
            modified_by: self.modified_by,
        })
    }

    fn try_into_update_command(self) -> Result<UpdateBookCommand, ParseBookRequestError> {
        Ok(UpdateBookCommand {
            title: self.validated_title()?,
            description: self.description,
            image_url: self.image_url,
            release_year: self.release_year,
            price: self.price,
            total_page: self.total_page,
            category_id: CategoryId(self.category_id),
            modified_by: self.modified_by,
        })
    }
}

impl From<ParseBookRequestError> for ApiError {
    fn from(err: ParseBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
