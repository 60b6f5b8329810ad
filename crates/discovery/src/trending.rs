use std::sync::Arc;

use appwrite::{AppwriteClient, Query};
use serde::{Deserialize, Serialize};
use tmdb::models::Movie;
use tmdb::IMAGE_BASE_URL;

/// How many trending entries the home view shows.
pub const TRENDING_LIMIT: u32 = 5;

/// Poster size stored alongside a counter.
const POSTER_SIZE: &str = "w500";

#[derive(Debug, thiserror::Error)]
pub enum TrendingError {
    #[error(transparent)]
    Store(#[from] appwrite::AppwriteError),
}

/// Per-term search counter document.
///
/// `search_term` is the de-facto unique key; `movie_id` and `poster_url`
/// point at the top result of the search that created the counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCounter {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: i64,
    pub movie_id: i64,
    pub poster_url: Option<String>,
}

/// Search-popularity counters in the external document store.
pub struct TrendingStore {
    client: Arc<AppwriteClient>,
    database_id: String,
    collection_id: String,
}

impl TrendingStore {
    pub fn new(
        client: Arc<AppwriteClient>,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            collection_id: collection_id.into(),
        }
    }

    /// Bump the counter for `term`, creating it on first sight.
    ///
    /// Read-then-write without a transaction: two racing searches for the
    /// same term can lose one increment, which is fine for a popularity
    /// counter.
    pub async fn record_search(&self, term: &str, movie: &Movie) -> Result<(), TrendingError> {
        let existing = self
            .client
            .list_documents::<SearchCounter>(
                &self.database_id,
                &self.collection_id,
                &[Query::equal("searchTerm", term)],
            )
            .await?;

        match existing.documents.first() {
            Some(doc) => {
                // Targeted field update, not a full overwrite.
                self.client
                    .update_document::<_, serde_json::Value>(
                        &self.database_id,
                        &self.collection_id,
                        &doc.id,
                        &serde_json::json!({ "count": doc.data.count + 1 }),
                    )
                    .await?;
            }
            None => {
                let counter = SearchCounter {
                    search_term: term.to_string(),
                    count: 1,
                    movie_id: movie.id,
                    poster_url: poster_url(movie),
                };
                self.client
                    .create_document::<_, serde_json::Value>(
                        &self.database_id,
                        &self.collection_id,
                        &counter,
                    )
                    .await?;
            }
        }

        Ok(())
    }

    /// The most-searched terms, descending, at most `limit` of them.
    pub async fn get_trending(&self, limit: u32) -> Result<Vec<SearchCounter>, TrendingError> {
        let list = self
            .client
            .list_documents::<SearchCounter>(
                &self.database_id,
                &self.collection_id,
                &[Query::order_desc("count"), Query::limit(limit)],
            )
            .await?;
        Ok(list.documents.into_iter().map(|doc| doc.data).collect())
    }
}

/// CDN URL for a movie's poster at the stored size.
fn poster_url(movie: &Movie) -> Option<String> {
    movie
        .poster_path
        .as_deref()
        .map(|path| format!("{}/{}{}", IMAGE_BASE_URL, POSTER_SIZE, path))
}
