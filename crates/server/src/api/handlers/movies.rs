use axum::{
    extract::{Path, Query, State},
    Json,
};
use tmdb::models::MovieDetails;
use tmdb::TmdbError;

use crate::error::{AppError, AppResult};
use crate::models::ListingResponse;
use crate::state::AppState;

use super::{ListingQuery, PageQuery};

/// Search movies, or browse by popularity when the query is empty.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    params(ListingQuery),
    responses(
        (status = 200, description = "Listing outcome", body = ListingResponse),
        (status = 400, description = "Invalid page")
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> AppResult<Json<ListingResponse>> {
    let page = validate_page(query.page)?;
    let fetch = state.discovery.fetch_movies(&query.query, page).await;
    Ok(Json(ListingResponse::from_state(fetch, page)))
}

/// Browse movies carrying a genre, paged.
#[utoipa::path(
    get,
    path = "/api/discover/{genre_id}",
    tag = "movies",
    params(
        ("genre_id" = i64, Path, description = "Genre to browse"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Listing outcome", body = ListingResponse),
        (status = 400, description = "Invalid page")
    )
)]
pub async fn discover_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ListingResponse>> {
    let page = validate_page(query.page)?;
    let fetch = state.discovery.fetch_by_genre(genre_id, page).await;
    Ok(Json(ListingResponse::from_state(fetch, page)))
}

/// Full record for one movie.
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie details", body = MovieDetails),
        (status = 404, description = "Movie not found"),
        (status = 502, description = "Catalog unavailable")
    )
)]
pub async fn get_movie_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MovieDetails>> {
    let details = state
        .discovery
        .movie_details(id)
        .await
        .map_err(|e| match e {
            TmdbError::Api {
                status_code: 404, ..
            } => AppError::not_found("Movie not found"),
            e => AppError::from(e),
        })?;
    Ok(Json(details))
}

fn validate_page(page: u32) -> AppResult<u32> {
    if page < 1 || page > tmdb::MAX_PAGES {
        return Err(AppError::bad_request(format!(
            "Page must be between 1 and {}",
            tmdb::MAX_PAGES
        )));
    }
    Ok(page)
}
