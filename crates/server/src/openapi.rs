use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Discovery API",
        description = "Search, browse, and trending endpoints over the TMDB catalog"
    ),
    tags(
        (name = "movies", description = "Search and browse movie listings"),
        (name = "genres", description = "Genre list for browse links"),
        (name = "trending", description = "Search-popularity counters")
    )
)]
pub struct ApiDoc;
