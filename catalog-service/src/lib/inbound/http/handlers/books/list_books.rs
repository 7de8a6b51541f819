use axum::extract::State;
use axum::http::StatusCode;

use super::BookData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_books(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    let books = state.book_service.list_books().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        books.iter().map(BookData::from).collect(),
    ))
}
