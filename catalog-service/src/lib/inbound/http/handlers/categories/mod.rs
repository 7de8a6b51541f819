use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::category::models::Category;

pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod list_category_books;
pub mod update_category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.as_str().to_string(),
            created_at: category.created_at,
            created_by: category.created_by.clone(),
            modified_at: category.modified_at,
            modified_by: category.modified_by.clone(),
        }
    }
}
