//! Language lookup endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::language::Language};

use super::AuthenticatedUser;

/// List all languages, ordered by name
#[utoipa::path(
    get,
    path = "/languages",
    tag = "catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All languages", body = Vec<Language>)
    )
)]
pub async fn list_languages(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Language>>> {
    let languages = state.services.catalog.list_languages().await?;
    Ok(Json(languages))
}
