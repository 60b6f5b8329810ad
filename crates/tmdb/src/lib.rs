mod client;
mod discover;
mod error;
mod genres;
pub mod models;
mod movies;
mod search;

pub use client::{ApiKey, TmdbClient, IMAGE_BASE_URL};
pub use error::TmdbError;
pub use models::{Genre, Movie, MovieDetails, PaginatedResponse, ProductionCompany, MAX_PAGES};

pub type Result<T> = std::result::Result<T, TmdbError>;
