use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;
use serde::Deserialize;

use crate::error::TmdbError;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for poster and backdrop images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Message used when the API flags a failure without giving a reason.
const REPORTED_FALLBACK: &str = "Failed to fetch movies";

/// Shared API key that can be updated at runtime.
pub type ApiKey = Arc<RwLock<String>>;

/// Failure flag some responses carry on an otherwise successful status.
#[derive(Debug, Deserialize)]
struct ReportedFailure {
    #[serde(rename = "Response")]
    response: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

pub struct TmdbClient {
    client: Client,
    api_key: ApiKey,
    base_url: String,
}

impl TmdbClient {
    /// Create a TmdbClient with an injected reqwest Client and bearer key.
    pub fn new(client: Client, api_key: ApiKey) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the current API key
    pub(crate) fn api_key(&self) -> String {
        self.api_key.read().clone()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue an authorized GET and decode the response body.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> crate::Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.api_key())
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        // A 2xx body can still carry an explicit failure flag.
        if let Ok(flag) = serde_json::from_str::<ReportedFailure>(&body) {
            if flag.response.as_deref() == Some("False") {
                return Err(TmdbError::Reported {
                    message: flag.error.unwrap_or_else(|| REPORTED_FALLBACK.to_string()),
                });
            }
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> TmdbClient {
        let key: ApiKey = Arc::new(RwLock::new("test-key".to_string()));
        TmdbClient::new(Client::new(), key).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn sends_bearer_authorization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/genre/movie/list"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "genres": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.movie_genres().await.unwrap();
    }

    #[tokio::test]
    async fn non_2xx_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.movie_genres().await.unwrap_err();
        match err {
            TmdbError::Api {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_flag_maps_to_reported_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.search_movies("nothing", 1).await.unwrap_err();
        match err {
            TmdbError::Reported { message } => assert_eq!(message, "Movie not found!"),
            other => panic!("expected Reported error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_flag_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": "False"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.search_movies("nothing", 1).await.unwrap_err();
        match err {
            TmdbError::Reported { message } => assert_eq!(message, REPORTED_FALLBACK),
            other => panic!("expected Reported error, got {other:?}"),
        }
    }
}
