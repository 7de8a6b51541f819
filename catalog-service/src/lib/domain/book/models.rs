use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::book::errors::BookIdError;
use crate::domain::book::errors::BookTitleError;
use crate::domain::book::errors::ThicknessError;
use crate::domain::category::models::CategoryId;

/// Earliest accepted release year.
pub const MIN_RELEASE_YEAR: i32 = 1980;
/// Latest accepted release year.
pub const MAX_RELEASE_YEAR: i32 = 2024;

/// Books with more pages than this are `tebal`.
const THICK_PAGE_THRESHOLD: i32 = 100;

/// Book aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Book identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i32);

impl BookId {
    /// Parse a book ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        s.trim()
            .parse::<i32>()
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Book title value object: non-blank, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookTitle(String);

impl BookTitle {
    const MAX_LENGTH: usize = 255;

    pub fn new(title: impl Into<String>) -> Result<Self, BookTitleError> {
        let title = title.into().trim().to_string();
        let length = title.chars().count();

        if length == 0 {
            return Err(BookTitleError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(BookTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Thickness label derived from the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thickness {
    /// More than 100 pages.
    Tebal,
    Tipis,
}

impl Thickness {
    pub fn from_total_page(total_page: i32) -> Self {
        if total_page > THICK_PAGE_THRESHOLD {
            Thickness::Tebal
        } else {
            Thickness::Tipis
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Thickness::Tebal => "tebal",
            Thickness::Tipis => "tipis",
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Thickness {
    type Err = ThicknessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tebal" => Ok(Thickness::Tebal),
            "tipis" => Ok(Thickness::Tipis),
            other => Err(ThicknessError(other.to_string())),
        }
    }
}

pub fn is_valid_release_year(year: i32) -> bool {
    (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year)
}

/// Command to create a new book.
///
/// Carries no thickness; it is derived when the book is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookCommand {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub category_id: CategoryId,
    pub created_by: String,
    pub modified_by: String,
}

/// Command to replace the mutable fields of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookCommand {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub category_id: CategoryId,
    pub modified_by: String,
}

/// Validated book row ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub created_by: String,
    pub modified_by: String,
}

impl From<CreateBookCommand> for NewBook {
    fn from(command: CreateBookCommand) -> Self {
        Self {
            thickness: Thickness::from_total_page(command.total_page),
            title: command.title,
            description: command.description,
            image_url: command.image_url,
            release_year: command.release_year,
            price: command.price,
            total_page: command.total_page,
            category_id: command.category_id,
            created_by: command.created_by,
            modified_by: command.modified_by,
        }
    }
}

/// Validated replacement values for an existing book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: BookTitle,
    pub description: String,
    pub image_url: String,
    pub release_year: i32,
    pub price: i32,
    pub total_page: i32,
    pub thickness: Thickness,
    pub category_id: CategoryId,
    pub modified_by: String,
}

impl From<UpdateBookCommand> for BookChanges {
    fn from(command: UpdateBookCommand) -> Self {
        Self {
            thickness: Thickness::from_total_page(command.total_page),
            title: command.title,
            description: command.description,
            image_url: command.image_url,
            release_year: command.release_year,
            price: command.price,
            total_page: command.total_page,
            category_id: command.category_id,
            modified_by: command.modified_by,
        }
    }
}
