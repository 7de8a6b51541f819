use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::CategoryId;
use crate::inbound::http::handlers::books::BookData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_category_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    let category_id = CategoryId::from_string(&id).map_err(CategoryError::from)?;

    let books = state
        .category_service
        .list_category_books(category_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        books.iter().map(BookData::from).collect(),
    ))
}
