use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CreateCategoryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    tracing::info!(caller = %caller.username, name = %command.name, "Creating category");

    state
        .category_service
        .create_category(command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| {
            ApiSuccess::new(StatusCode::CREATED, category.into()).with_message("Category created")
        })
}

/// HTTP request body for creating a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryRequest {
    name: String,
    #[serde(default)]
    created_by: String,
    #[serde(default)]
    modified_by: String,
}

impl CreateCategoryRequest {
    fn try_into_command(self) -> Result<CreateCategoryCommand, CategoryError> {
        Ok(CreateCategoryCommand {
            name: CategoryName::new(self.name)?,
            created_by: self.created_by,
            modified_by: self.modified_by,
        })
    }
}
