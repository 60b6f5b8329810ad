use crate::{models::MovieDetails, TmdbClient};

impl TmdbClient {
    /// Get the full record for a single movie.
    /// GET /movie/{id}
    pub async fn movie_details(&self, id: i64) -> crate::Result<MovieDetails> {
        self.get(&format!("/movie/{}", id), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::TmdbClient;

    #[tokio::test]
    async fn parses_movie_details() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movie/438631"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 438631,
                "title": "Dune",
                "tagline": "It begins.",
                "overview": "Paul Atreides...",
                "poster_path": "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg",
                "backdrop_path": null,
                "release_date": "2021-09-15",
                "runtime": 155,
                "vote_average": 7.8,
                "vote_count": 9100,
                "genres": [
                    {"id": 878, "name": "Science Fiction"},
                    {"id": 12, "name": "Adventure"}
                ],
                "production_companies": [
                    {"id": 923, "name": "Legendary Pictures"}
                ]
            })))
            .mount(&server)
            .await;

        let client = TmdbClient::new(
            reqwest::Client::new(),
            Arc::new(RwLock::new("k".to_string())),
        )
        .with_base_url(server.uri());

        let details = client.movie_details(438631).await.unwrap();
        assert_eq!(details.runtime, Some(155));
        assert_eq!(details.genres.len(), 2);
        assert_eq!(details.genres[0].name, "Science Fiction");
        assert_eq!(details.production_companies[0].name, "Legendary Pictures");
    }
}
