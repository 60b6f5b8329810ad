use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

impl TmdbClient {
    /// List movies sorted by descending popularity.
    /// GET /discover/movie?sort_by=popularity.desc&page={page}
    pub async fn discover_popular(&self, page: u32) -> crate::Result<PaginatedResponse<Movie>> {
        let response: PaginatedResponse<Movie> = self
            .get(
                "/discover/movie",
                &[
                    ("sort_by", "popularity.desc".to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        Ok(response.clamped())
    }

    /// List movies carrying the given genre.
    /// GET /discover/movie?with_genres={genre_id}&page={page}
    pub async fn discover_by_genre(
        &self,
        genre_id: i64,
        page: u32,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let response: PaginatedResponse<Movie> = self
            .get(
                "/discover/movie",
                &[
                    ("with_genres", genre_id.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        Ok(response.clamped())
    }
}
