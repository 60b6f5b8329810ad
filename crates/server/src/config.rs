use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Connection settings for the popularity store.
#[derive(Debug, Clone)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: Option<String>,
    pub database_id: String,
    pub collection_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub tmdb_api_key: String,
    pub appwrite: AppwriteConfig,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", value))?,
            Err(_) => 3000,
        };

        Ok(Self {
            port,
            tmdb_api_key: required("TMDB_API_KEY")?,
            appwrite: AppwriteConfig {
                endpoint: env::var("APPWRITE_ENDPOINT")
                    .unwrap_or_else(|_| appwrite::DEFAULT_ENDPOINT.to_string()),
                project_id: required("APPWRITE_PROJECT_ID")?,
                api_key: env::var("APPWRITE_API_KEY").ok(),
                database_id: required("APPWRITE_DATABASE_ID")?,
                collection_id: required("APPWRITE_COLLECTION_ID")?,
            },
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}
