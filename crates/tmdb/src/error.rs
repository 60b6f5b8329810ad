#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// The API answered 2xx but the payload carries an explicit failure flag.
    #[error("TMDB reported a failure: {message}")]
    Reported { message: String },

    #[error("Failed to decode TMDB response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
