use std::sync::Arc;

use tmdb::models::{Genre, Movie, MovieDetails, PaginatedResponse};
use tmdb::{TmdbClient, TmdbError};

use crate::trending::{SearchCounter, TrendingStore};

/// Fixed user-facing message for listing failures; the cause goes to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching movies. Please try again later";

/// One page of listing results.
pub type PageState = PaginatedResponse<Movie>;

/// Lifecycle of a single listing fetch.
///
/// Every fetch settles in `Success`, `Empty`, or `Error`; `Loading` is only
/// ever observed through a session's state channel while a fetch is in
/// flight.
#[derive(Debug, Clone)]
pub enum FetchState {
    Idle,
    Loading,
    Success(PageState),
    Empty,
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Composes the catalog client and the popularity store into the fetch
/// lifecycle the presentation layer consumes.
pub struct DiscoveryService {
    tmdb: Arc<TmdbClient>,
    trending: Arc<TrendingStore>,
}

impl DiscoveryService {
    pub fn new(tmdb: Arc<TmdbClient>, trending: Arc<TrendingStore>) -> Self {
        Self { tmdb, trending }
    }

    /// Listing fetch. An empty query browses by descending popularity;
    /// anything else searches, and a successful non-empty search bumps the
    /// term's popularity counter.
    pub async fn fetch_movies(&self, query: &str, page: u32) -> FetchState {
        let query = query.trim();
        let result = if query.is_empty() {
            self.tmdb.discover_popular(page).await
        } else {
            self.tmdb.search_movies(query, page).await
        };

        let record_term = (!query.is_empty()).then_some(query);
        self.resolve_listing(result, record_term).await
    }

    /// Genre-filtered listing fetch. Never touches the popularity store.
    pub async fn fetch_by_genre(&self, genre_id: i64, page: u32) -> FetchState {
        let result = self.tmdb.discover_by_genre(genre_id, page).await;
        self.resolve_listing(result, None).await
    }

    /// Full record for the details view.
    pub async fn movie_details(&self, id: i64) -> tmdb::Result<MovieDetails> {
        self.tmdb.movie_details(id).await
    }

    /// Genre list for browse links.
    pub async fn genres(&self) -> tmdb::Result<Vec<Genre>> {
        self.tmdb.movie_genres().await
    }

    /// Top trending search terms. Store failures degrade to an empty list.
    pub async fn trending_movies(&self, limit: u32) -> Vec<SearchCounter> {
        match self.trending.get_trending(limit).await {
            Ok(counters) => counters,
            Err(e) => {
                tracing::warn!("Failed to fetch trending searches: {}", e);
                Vec::new()
            }
        }
    }

    async fn resolve_listing(
        &self,
        result: tmdb::Result<PageState>,
        record_term: Option<&str>,
    ) -> FetchState {
        match result {
            Ok(page) => {
                let Some(top) = page.results.first() else {
                    return FetchState::Empty;
                };

                if let Some(term) = record_term {
                    // Best effort: a popularity counter is not worth failing
                    // the listing over.
                    if let Err(e) = self.trending.record_search(term, top).await {
                        tracing::warn!("Failed to record search \"{}\": {}", term, e);
                    }
                }

                FetchState::Success(page)
            }
            Err(TmdbError::Reported { message }) => {
                tracing::error!("Catalog reported a failure: {}", message);
                FetchState::Error(message)
            }
            Err(e) => {
                tracing::error!("Error fetching movies: {}", e);
                FetchState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }
}
