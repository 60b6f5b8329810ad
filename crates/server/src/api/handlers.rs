mod genres;
mod movies;
mod trending;

use serde::Deserialize;
use utoipa::IntoParams;

fn default_page() -> u32 {
    1
}

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListingQuery {
    /// Search term; empty or absent browses by popularity.
    #[serde(default)]
    pub query: String,
    /// Page to fetch, 1-based.
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Query parameters for paged endpoints without a search term.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page to fetch, 1-based.
    #[serde(default = "default_page")]
    pub page: u32,
}

// Re-export all handlers
pub use genres::{__path_list_genres, list_genres};
pub use movies::{
    __path_discover_by_genre, __path_get_movie_details, __path_list_movies, discover_by_genre,
    get_movie_details, list_movies,
};
pub use trending::{__path_get_trending, get_trending};
