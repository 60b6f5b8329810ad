use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// Search movies by title.
    /// GET /search/movie?query={query}&page={page}
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let response: PaginatedResponse<Movie> = self
            .get(
                "/search/movie",
                &[("query", query.to_string()), ("page", page.to_string())],
            )
            .await?;
        Ok(response.clamped())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;

    #[tokio::test]
    async fn parses_search_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .and(query_param("query", "dune"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 1,
                "results": [{
                    "id": 438631,
                    "title": "Dune",
                    "overview": "Paul Atreides...",
                    "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg",
                    "backdrop_path": null,
                    "release_date": "2021-09-15",
                    "vote_average": 7.8,
                    "vote_count": 9100,
                    "popularity": 93.2,
                    "genre_ids": [878, 12],
                    "original_language": "en"
                }],
                "total_pages": 3,
                "total_results": 42
            })))
            .mount(&server)
            .await;

        let client = TmdbClient::new(
            reqwest::Client::new(),
            Arc::new(RwLock::new("k".to_string())),
        )
        .with_base_url(server.uri());

        let page = client.search_movies("dune", 1).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 438631);
        assert_eq!(page.results[0].title, "Dune");
        assert_eq!(
            page.results[0].poster_path.as_deref(),
            Some("/d5NXSklXo0qyIYkgV94XAgMIckC.jpg")
        );
    }

    #[tokio::test]
    async fn zero_results_is_ok_and_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "page": 1,
                "results": [],
                "total_pages": 1,
                "total_results": 0
            })))
            .mount(&server)
            .await;

        let client = TmdbClient::new(
            reqwest::Client::new(),
            Arc::new(RwLock::new("k".to_string())),
        )
        .with_base_url(server.uri());

        let page = client.search_movies("zzzzz", 1).await.unwrap();
        assert!(page.results.is_empty());
    }
}
