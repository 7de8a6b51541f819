use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::errors::CategoryIdError;
use crate::domain::category::errors::CategoryNameError;

/// Category aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

/// Category identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i32);

impl CategoryId {
    /// Parse a category ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not an integer
    pub fn from_string(s: &str) -> Result<Self, CategoryIdError> {
        s.trim()
            .parse::<i32>()
            .map(CategoryId)
            .map_err(|e| CategoryIdError::InvalidFormat(format!("{}: {}", s, e)))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category name value object.
///
/// Non-blank after trimming and at most 255 characters. Uniqueness is
/// case-insensitive and enforced by the rules layer, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    const MAX_LENGTH: usize = 255;

    /// Create a validated category name.
    ///
    /// # Errors
    /// * `Empty` - Name is blank
    /// * `TooLong` - Name exceeds 255 characters
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryNameError> {
        let name = name.into().trim().to_string();
        let length = name.chars().count();

        if length == 0 {
            return Err(CategoryNameError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(CategoryNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
    pub created_by: String,
    pub modified_by: String,
}

/// Command to rename an existing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryCommand {
    pub name: CategoryName,
    pub modified_by: String,
}
