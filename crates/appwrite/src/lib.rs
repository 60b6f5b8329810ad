mod client;
mod documents;
mod error;
mod query;

pub use client::{AppwriteClient, DEFAULT_ENDPOINT};
pub use documents::{Document, DocumentList};
pub use error::AppwriteError;
pub use query::Query;

pub type Result<T> = std::result::Result<T, AppwriteError>;
