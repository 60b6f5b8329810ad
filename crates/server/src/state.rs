use std::sync::Arc;
use std::time::Duration;

use appwrite::AppwriteClient;
use discovery::{DiscoveryService, TrendingStore};
use parking_lot::RwLock;
use tmdb::TmdbClient;

use crate::config::Config;

/// Outbound request timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub discovery: Arc<DiscoveryService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        let api_key: tmdb::ApiKey = Arc::new(RwLock::new(config.tmdb_api_key.clone()));
        let tmdb = Arc::new(TmdbClient::new(http.clone(), api_key));

        let mut store_client = AppwriteClient::new(http, config.appwrite.project_id.clone())
            .with_endpoint(config.appwrite.endpoint.clone());
        if let Some(key) = &config.appwrite.api_key {
            store_client = store_client.with_api_key(key.clone());
        }
        let trending = Arc::new(TrendingStore::new(
            Arc::new(store_client),
            config.appwrite.database_id.clone(),
            config.appwrite.collection_id.clone(),
        ));

        let discovery = Arc::new(DiscoveryService::new(tmdb, trending));

        Self {
            config: Arc::new(config),
            discovery,
        }
    }
}
