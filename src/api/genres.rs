//! Genre lookup endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::genre::Genre};

use super::AuthenticatedUser;

/// List all genres, ordered by name
#[utoipa::path(
    get,
    path = "/genres",
    tag = "catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All genres", body = Vec<Genre>)
    )
)]
pub async fn list_genres(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.services.catalog.list_genres().await?;
    Ok(Json(genres))
}
