use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::book::errors::BookError;
use crate::domain::category::errors::CategoryError;
use crate::domain::errors::ErrorKind;
use crate::domain::user::errors::UserError;

pub mod books;
pub mod categories;
pub mod users;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.1 .0.message = Some(message.into());
        self
    }
}

impl ApiSuccess<()> {
    /// Success carrying only a message, no result.
    pub fn message(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(
            status,
            Json(ApiResponseBody {
                message: Some(message.into()),
                error: None,
                result: None,
            }),
        )
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Unauthorized(String),
    RequestTimeout(String),
}

impl ApiError {
    fn from_kind(kind: ErrorKind, message: String) -> Self {
        match kind {
            ErrorKind::Validation | ErrorKind::Conflict => ApiError::BadRequest(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Auth => ApiError::Unauthorized(message),
            ErrorKind::Internal => ApiError::InternalServerError(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                // Detail stays in the logs.
                tracing::error!(error = %msg, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::RequestTimeout(msg) => (StatusCode::REQUEST_TIMEOUT, msg),
        };

        (status, Json(ApiResponseBody::new_error(message))).into_response()
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        ApiError::from_kind(err.kind(), err.to_string())
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        ApiError::from_kind(err.kind(), err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        ApiError::from_kind(err.kind(), err.to_string())
    }
}

/// Response envelope: exactly the populated fields are serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(result: T) -> Self {
        Self {
            message: None,
            error: None,
            result: Some(result),
        }
    }
}

impl ApiResponseBody<()> {
    pub fn new_error(message: String) -> Self {
        Self {
            message: None,
            error: Some(message),
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::book::models::BookId;
    use crate::domain::category::models::CategoryId;

    #[test]
    fn test_envelope_skips_empty_fields() {
        let body = ApiResponseBody::new(vec![1, 2]);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "result": [1, 2] }));

        let body = ApiResponseBody::new_error("nope".to_string());
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "error": "nope" }));
    }

    #[test]
    fn test_error_kinds_map_to_status() {
        assert!(matches!(
            ApiError::from(CategoryError::HasBooks(CategoryId(1))),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(BookError::NotFound(BookId(1))),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::InvalidCredentials),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(BookError::DatabaseError("boom".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = ApiError::InternalServerError("pool timed out".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
