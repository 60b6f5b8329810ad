use axum::{extract::State, Json};
use discovery::TRENDING_LIMIT;

use crate::models::TrendingEntry;
use crate::state::AppState;

/// Top trending search terms.
///
/// Store failures degrade to an empty list; this endpoint never errors.
#[utoipa::path(
    get,
    path = "/api/trending",
    tag = "trending",
    responses(
        (status = 200, description = "Trending searches, most popular first", body = Vec<TrendingEntry>)
    )
)]
pub async fn get_trending(State(state): State<AppState>) -> Json<Vec<TrendingEntry>> {
    let counters = state.discovery.trending_movies(TRENDING_LIMIT).await;
    Json(counters.into_iter().map(TrendingEntry::from).collect())
}
