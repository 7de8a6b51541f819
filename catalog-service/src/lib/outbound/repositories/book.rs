use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookChanges;
use crate::domain::book::models::BookId;
use crate::domain::book::models::BookTitle;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::Thickness;
use crate::domain::book::ports::BookRepository;
use crate::domain::category::models::CategoryId;

const BOOK_COLUMNS: &str = "id, title, description, image_url, release_year, price, \
     total_page, thickness, category_id, created_at, created_by, modified_at, modified_by";

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i32,
    title: String,
    description: String,
    image_url: String,
    release_year: i32,
    price: i32,
    total_page: i32,
    thickness: String,
    category_id: i32,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<BookRow> for Book {
    type Error = BookError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let thickness = row
            .thickness
            .parse::<Thickness>()
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(Book {
            id: BookId(row.id),
            title: BookTitle::new(row.title)?,
            description: row.description,
            image_url: row.image_url,
            release_year: row.release_year,
            price: row.price,
            total_page: row.total_page,
            thickness,
            category_id: CategoryId(row.category_id),
            created_at: row.created_at,
            created_by: row.created_by,
            modified_at: row.modified_at,
            modified_by: row.modified_by,
        })
    }
}

/// Map write failures to domain errors by constraint.
fn write_error(e: sqlx::Error, title: &BookTitle, category_id: CategoryId) -> BookError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return BookError::InvalidCategory(category_id);
        }
        if db_err.is_unique_violation() && db_err.constraint() == Some("books_title_lower_key") {
            return BookError::TitleAlreadyExists(title.to_string());
        }
    }
    BookError::DatabaseError(e.to_string())
}

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create_if_absent(&self, book: &NewBook) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            INSERT INTO books (
                title, description, image_url, release_year, price,
                total_page, thickness, category_id, created_by, modified_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT DO NOTHING
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(book.title.as_str())
        .bind(&book.description)
        .bind(&book.image_url)
        .bind(book.release_year)
        .bind(book.price)
        .bind(book.total_page)
        .bind(book.thickness.as_str())
        .bind(book.category_id.0)
        .bind(&book.created_by)
        .bind(&book.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &book.title, book.category_id))?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE id = $1
            "#
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE LOWER(title) = LOWER($1)
            "#
        ))
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn title_taken_by_other(
        &self,
        title: &BookTitle,
        id: BookId,
    ) -> Result<bool, BookError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM books
                WHERE LOWER(title) = LOWER($1) AND id <> $2
            )
            "#,
        )
        .bind(title.as_str())
        .bind(id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))
    }

    async fn exists(&self, id: BookId) -> Result<bool, BookError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            ORDER BY id
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT {BOOK_COLUMNS}
            FROM books
            WHERE category_id = $1
            ORDER BY id
            "#
        ))
        .bind(category_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn update(&self, id: BookId, changes: &BookChanges) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            UPDATE books
            SET title = $1, description = $2, image_url = $3, release_year = $4,
                price = $5, total_page = $6, thickness = $7, category_id = $8,
                modified_by = $9, modified_at = CURRENT_TIMESTAMP
            WHERE id = $10
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(changes.title.as_str())
        .bind(&changes.description)
        .bind(&changes.image_url)
        .bind(changes.release_year)
        .bind(changes.price)
        .bind(changes.total_page)
        .bind(changes.thickness.as_str())
        .bind(changes.category_id.0)
        .bind(&changes.modified_by)
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, &changes.title, changes.category_id))?;

        row.map(Book::try_from).transpose()
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| BookError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
