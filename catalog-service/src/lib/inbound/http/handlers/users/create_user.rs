use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::non_empty_password;
use super::ParseUserRequestError;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = payload?;

    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| {
            ApiSuccess::new(StatusCode::CREATED, user.into()).with_message("User created")
        })
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: String,
    password: String,
    #[serde(default)]
    created_by: String,
    #[serde(default)]
    modified_by: String,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseUserRequestError> {
        Ok(CreateUserCommand {
            username: Username::new(self.username)?,
            password: non_empty_password(self.password)?,
            created_by: self.created_by,
            modified_by: self.modified_by,
        })
    }
}
