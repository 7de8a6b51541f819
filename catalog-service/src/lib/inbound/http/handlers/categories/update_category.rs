use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CategoryData;
use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCategoryRequest>, JsonRejection>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let category_id = CategoryId::from_string(&id).map_err(CategoryError::from)?;
    let Json(body) = payload?;
    let command = UpdateCategoryCommand {
        name: CategoryName::new(body.name).map_err(CategoryError::from)?,
        modified_by: body.modified_by,
    };

    tracing::info!(caller = %caller.username, category_id = %category_id, "Updating category");

    state
        .category_service
        .update_category(category_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref category| {
            ApiSuccess::new(StatusCode::OK, category.into()).with_message("Category updated")
        })
}

/// HTTP request body for renaming a category (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryRequest {
    name: String,
    #[serde(default)]
    modified_by: String,
}
