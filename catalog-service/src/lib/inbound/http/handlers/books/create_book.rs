use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::BookData;
use super::BookRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_create_command()?;

    tracing::info!(caller = %caller.username, title = %command.title, "Creating book");

    state
        .book_service
        .create_book(command)
        .await
        .map_err(ApiError::from)
        .map(|ref book| {
            ApiSuccess::new(StatusCode::CREATED, book.into()).with_message("Book created")
        })
}
