use axum::{extract::State, Json};
use tmdb::models::Genre;

use crate::error::AppResult;
use crate::state::AppState;

/// List all movie genres, for building browse links.
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genre list", body = Vec<Genre>),
        (status = 502, description = "Catalog unavailable")
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = state.discovery.genres().await?;
    Ok(Json(genres))
}
