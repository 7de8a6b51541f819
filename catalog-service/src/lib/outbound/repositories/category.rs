use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;

const CATEGORY_COLUMNS: &str = "id, name, created_at, created_by, modified_at, modified_by";

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    name: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CategoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId(row.id),
            name: CategoryName::new(row.name)?,
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        })
    }
}

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create_if_absent(
        &self,
        command: &CreateCategoryCommand,
    ) -> Result<Option<Category>, CategoryError> {
        // Conflicts on categories_name_lower_key come back as no row.
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            INSERT INTO categories (name, created_by, modified_by)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(command.name.as_str())
        .bind(&command.created_by)
        .bind(&command.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM categories
            WHERE id = $1
            "#
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM categories
            WHERE LOWER(name) = LOWER($1)
            "#
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(Category::try_from).transpose()
    }

    async fn name_taken_by_other(
        &self,
        name: &CategoryName,
        id: CategoryId,
    ) -> Result<bool, CategoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE LOWER(name) = LOWER($1) AND id <> $2
            )
            "#,
        )
        .bind(name.as_str())
        .bind(id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))
    }

    async fn exists(&self, id: CategoryId) -> Result<bool, CategoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))
    }

    async fn has_books(&self, id: CategoryId) -> Result<bool, CategoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE category_id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CategoryError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Category>, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            SELECT {CATEGORY_COLUMNS}
            FROM categories
            ORDER BY id
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn update(
        &self,
        id: CategoryId,
        command: &UpdateCategoryCommand,
    ) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            r#"
            UPDATE categories
            SET name = $1, modified_by = $2, modified_at = CURRENT_TIMESTAMP
            WHERE id = $3
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(command.name.as_str())
        .bind(&command.modified_by)
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("categories_name_lower_key")
                {
                    return CategoryError::NameAlreadyExists(command.name.to_string());
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        row.map(Category::try_from).transpose()
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_foreign_key_violation() {
                        return CategoryError::HasBooks(id);
                    }
                }
                CategoryError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
