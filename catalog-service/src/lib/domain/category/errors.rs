use thiserror::Error;

use crate::domain::category::models::CategoryId;
use crate::domain::errors::ErrorKind;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid category ID format: {0}")]
    InvalidFormat(String),
}

/// Error for CategoryName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    #[error("Category name is empty")]
    Empty,

    #[error("Category name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all category-related operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("Invalid category name: {0}")]
    InvalidName(#[from] CategoryNameError),

    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Category not found with name: {0}")]
    NotFoundByName(String),

    #[error("Category name already in use: {0}")]
    NameAlreadyExists(String),

    #[error("Category {0} cannot be deleted while books still reference it")]
    HasBooks(CategoryId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl CategoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CategoryError::InvalidCategoryId(_) | CategoryError::InvalidName(_) => {
                ErrorKind::Validation
            }
            CategoryError::NotFound(_) | CategoryError::NotFoundByName(_) => ErrorKind::NotFound,
            CategoryError::NameAlreadyExists(_) | CategoryError::HasBooks(_) => {
                ErrorKind::Conflict
            }
            CategoryError::DatabaseError(_) => ErrorKind::Internal,
        }
    }
}
