use thiserror::Error;

use crate::domain::book::models::BookId;
use crate::domain::category::models::CategoryId;
use crate::domain::errors::ErrorKind;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book ID format: {0}")]
    InvalidFormat(String),
}

/// Error for BookTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookTitleError {
    #[error("Book title is empty")]
    Empty,

    #[error("Book title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for unknown thickness labels
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown thickness: {0}")]
pub struct ThicknessError(pub String);

/// Top-level error for all book-related operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    #[error("Invalid book ID: {0}")]
    InvalidBookId(#[from] BookIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] BookTitleError),

    #[error("Release year must be between 1980 and 2024, got {0}")]
    InvalidReleaseYear(i32),

    #[error("Category does not exist: {0}")]
    InvalidCategory(CategoryId),

    #[error("Book not found: {0}")]
    NotFound(BookId),

    #[error("Book title already in use: {0}")]
    TitleAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::InvalidBookId(_)
            | BookError::InvalidTitle(_)
            | BookError::InvalidReleaseYear(_)
            | BookError::InvalidCategory(_) => ErrorKind::Validation,
            BookError::NotFound(_) => ErrorKind::NotFound,
            BookError::TitleAlreadyExists(_) => ErrorKind::Conflict,
            BookError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}
