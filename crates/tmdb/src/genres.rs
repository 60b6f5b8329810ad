use crate::{
    models::{Genre, GenreList},
    TmdbClient,
};

impl TmdbClient {
    /// List all movie genres.
    /// GET /genre/movie/list
    pub async fn movie_genres(&self) -> crate::Result<Vec<Genre>> {
        let list: GenreList = self.get("/genre/movie/list", &[]).await?;
        Ok(list.genres)
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
    async fn parses_genre_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/genre/movie/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "genres": [
                    {"id": 28, "name": "Action"},
                    {"id": 35, "name": "Comedy"}
                ]
            })))
            .mount(&server)
            .await;

        let client = TmdbClient::new(
            reqwest::Client::new(),
            Arc::new(RwLock::new("k".to_string())),
        )
        .with_base_url(server.uri());

        let genres = client.movie_genres().await.unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[1].name, "Comedy");
    }
}
