use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod update_user;

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            created_at: user.created_at,
            created_by: user.created_by.clone(),
            modified_at: user.modified_at,
            modified_by: user.modified_by.clone(),
        }
    }
}

#[derive(Debug, Clone, Error)]
enum ParseUserRequestError {
    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

fn non_empty_password(password: String) -> Result<String, ParseUserRequestError> {
    if password.is_empty() {
        Err(ParseUserRequestError::EmptyPassword)
    } else {
        Ok(password)
    }
}

impl From<ParseUserRequestError> for ApiError {
    fn from(err: ParseUserRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
