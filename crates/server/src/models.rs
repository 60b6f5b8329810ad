use serde::Serialize;
use utoipa::ToSchema;

use discovery::{can_jump_back, can_jump_forward, page_window, FetchState, SearchCounter};
use tmdb::models::Movie;

/// Outcome of a listing fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Success,
    Empty,
    Error,
}

/// One page of listing results plus everything the pagination control needs.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListingResponse {
    pub status: ListingStatus,
    /// User-facing message, only set when `status` is `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: i64,
    pub results: Vec<Movie>,
    /// Page numbers to render, windowed around the current page.
    pub pages: Vec<u32>,
    pub can_jump_back: bool,
    pub can_jump_forward: bool,
}

impl ListingResponse {
    pub fn from_state(state: FetchState, requested_page: u32) -> Self {
        match state {
            FetchState::Success(page) => Self {
                status: ListingStatus::Success,
                error: None,
                page: page.page,
                total_pages: page.total_pages,
                total_results: page.total_results,
                pages: page_window(page.page, page.total_pages),
                can_jump_back: can_jump_back(page.page),
                can_jump_forward: can_jump_forward(page.page, page.total_pages),
                results: page.results,
            },
            FetchState::Empty => Self::terminal(ListingStatus::Empty, None, requested_page),
            FetchState::Error(message) => {
                Self::terminal(ListingStatus::Error, Some(message), requested_page)
            }
            FetchState::Idle | FetchState::Loading => Self::terminal(
                ListingStatus::Error,
                Some(discovery::FETCH_ERROR_MESSAGE.to_string()),
                requested_page,
            ),
        }
    }

    fn terminal(status: ListingStatus, error: Option<String>, page: u32) -> Self {
        Self {
            status,
            error,
            page,
            total_pages: 0,
            total_results: 0,
            results: Vec::new(),
            pages: Vec::new(),
            can_jump_back: false,
            can_jump_forward: false,
        }
    }
}

/// Trending entry served to the home view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendingEntry {
    pub search_term: String,
    pub count: i64,
    pub movie_id: i64,
    pub poster_url: Option<String>,
}

impl From<SearchCounter> for TrendingEntry {
    fn from(counter: SearchCounter) -> Self {
        Self {
            search_term: counter.search_term,
            count: counter.count,
            movie_id: counter.movie_id,
            poster_url: counter.poster_url,
        }
    }
}
